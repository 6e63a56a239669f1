use crate::screening::domain::{HouseholdInput, ImmigrationStatus, TaxFilingStatus};
use crate::screening::guidelines::GuidelineTables;

pub(super) fn tables() -> GuidelineTables {
    GuidelineTables::default()
}

/// Single citizen adult with no children and no earned income; fields are
/// overridden per test.
pub(super) fn household(state: &str, size: u32, gross_monthly_income: f64) -> HouseholdInput {
    HouseholdInput {
        state: state.to_string(),
        zip_code: None,
        household_size: size,
        children_count: 0,
        children_under5_count: 0,
        elderly_count: 0,
        gross_monthly_income,
        net_monthly_income: None,
        monthly_housing_cost: None,
        childcare_cost: None,
        is_pregnant: false,
        immigration_status: ImmigrationStatus::Citizen,
        has_disability: false,
        has_earned_income: false,
        monthly_earned_income: 0.0,
        tax_filing_status: TaxFilingStatus::Single,
    }
}

pub(super) fn working_family(state: &str, size: u32, children: u32, income: f64) -> HouseholdInput {
    let mut input = household(state, size, income);
    input.children_count = children;
    input.has_earned_income = true;
    input.monthly_earned_income = income;
    input
}

/// Gross monthly income that lands exactly at `percent`% FPL for the
/// household, so boundary tests can hit thresholds precisely.
pub(super) fn income_at_percent(
    tables: &GuidelineTables,
    size: u32,
    state: &str,
    percent: f64,
) -> f64 {
    crate::screening::fpl::monthly_fpl(tables, size, state) * percent / 100.0
}
