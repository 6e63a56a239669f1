use super::domain::HouseholdInput;
use super::guidelines::GuidelineTables;

/// Monthly Federal Poverty Level for a household in a given state. Household
/// size is floored at 1 before the per-person increment applies.
pub fn monthly_fpl(tables: &GuidelineTables, household_size: u32, state: &str) -> f64 {
    let tier = tables.fpl.tier_for_state(state);
    let additional = household_size.max(1).saturating_sub(1);
    let annual = tier.base + additional as f64 * tier.per_person;
    annual / 12.0
}

/// Gross monthly income as a percent of the household's monthly FPL.
///
/// Returns 0 if the computed FPL is exactly zero; unreachable with a
/// validated table set, but the division must never produce a non-finite
/// percentage.
pub fn fpl_percentage(tables: &GuidelineTables, input: &HouseholdInput) -> f64 {
    let fpl = monthly_fpl(tables, input.household_size, &input.state);
    if fpl == 0.0 {
        return 0.0;
    }
    (input.gross_monthly_income / fpl) * 100.0
}
