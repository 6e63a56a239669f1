use crate::screening::domain::{EligibilityStatus, HouseholdInput, Program, ProgramResult};
use crate::screening::fpl::fpl_percentage;
use crate::screening::guidelines::GuidelineTables;

pub(crate) fn evaluate(input: &HouseholdInput, tables: &GuidelineTables) -> ProgramResult {
    // Categorical gate first: without a pregnant member or a child under 5,
    // income is never consulted.
    let categorically_eligible = input.is_pregnant || input.children_under5_count > 0;
    if !categorically_eligible {
        return ProgramResult::new(
            Program::Wic,
            EligibilityStatus::Unlikely,
            vec![
                "WIC is specifically for pregnant/postpartum individuals and children under 5."
                    .to_string(),
            ],
            vec!["No pregnant members or children under 5 reported".to_string()],
        );
    }

    let fpl_percent = fpl_percentage(tables, input);
    let mut reasons = Vec::new();
    let key_factors = vec![format!("Income is ~{}% FPL", fpl_percent.round())];
    let t = &tables.thresholds;

    let status = if fpl_percent <= t.wic_income_limit {
        reasons.push(format!(
            "Your income is at or below {}% of the poverty level, which meets the WIC \
             financial standard.",
            t.wic_income_limit
        ));
        EligibilityStatus::LikelyEligible
    } else if fpl_percent <= t.wic_borderline_limit {
        reasons.push(format!(
            "Your income is slightly above the {}% cutoff, but pregnancy counts as a larger \
             household size in some interpretations, or specific deductions may apply.",
            t.wic_income_limit
        ));
        EligibilityStatus::Borderline
    } else {
        reasons.push(format!(
            "Income appears to exceed the {}% FPL limit for WIC.",
            t.wic_income_limit
        ));
        EligibilityStatus::Unlikely
    };

    ProgramResult::new(Program::Wic, status, reasons, key_factors)
}
