use crate::screening::domain::{EligibilityStatus, HouseholdInput, Program, ProgramResult};
use crate::screening::fpl::fpl_percentage;
use crate::screening::guidelines::GuidelineTables;

/// HUD actually keys on Area Median Income, but FPL is a workable proxy for
/// "Very Low Income" in a national screener. Eligible never means "will
/// receive" here; supply is the binding constraint.
pub(crate) fn evaluate(input: &HouseholdInput, tables: &GuidelineTables) -> ProgramResult {
    let fpl_percent = fpl_percentage(tables, input);
    let mut reasons = Vec::new();
    let key_factors = vec![format!("Income is ~{}% FPL", fpl_percent.round())];
    let t = &tables.thresholds;

    let status = if fpl_percent <= t.housing_priority_limit {
        reasons.push(format!(
            "Your income is very low (<{}% poverty), placing you in a priority group for \
             housing vouchers or public housing.",
            t.housing_priority_limit
        ));
        reasons.push("However, waitlists are often years long. Apply immediately.".to_string());
        EligibilityStatus::LikelyEligible
    } else if fpl_percent <= t.housing_low_income_limit {
        reasons.push(
            "You likely fall within the 'Low Income' limits for HUD programs, but priority \
             is often given to those with even lower income."
                .to_string(),
        );
        EligibilityStatus::Borderline
    } else {
        reasons.push(
            "While you might qualify for some affordable housing units, you likely exceed \
             income limits for deep-subsidy voucher programs."
                .to_string(),
        );
        EligibilityStatus::Unlikely
    };

    ProgramResult::new(Program::Housing, status, reasons, key_factors)
}
