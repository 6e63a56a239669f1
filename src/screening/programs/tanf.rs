use crate::screening::domain::{
    EligibilityStatus, HouseholdInput, ImmigrationStatus, Program, ProgramResult,
};
use crate::screening::fpl::fpl_percentage;
use crate::screening::guidelines::GuidelineTables;

pub(crate) fn evaluate(input: &HouseholdInput, tables: &GuidelineTables) -> ProgramResult {
    // Categorical gate: a minor child in the home or pregnancy.
    if input.children_count == 0 && !input.is_pregnant {
        return ProgramResult::new(
            Program::Tanf,
            EligibilityStatus::Unlikely,
            vec!["TANF generally requires a minor child in the home or pregnancy.".to_string()],
            vec!["No children under 18".to_string()],
        );
    }

    let fpl_percent = fpl_percentage(tables, input);
    let mut reasons = Vec::new();
    let key_factors = vec![format!("Income is ~{}% FPL", fpl_percent.round())];
    let t = &tables.thresholds;

    // Immigration gate is stricter than SNAP: an undocumented primary
    // applicant skips the income test entirely.
    let status = if input.immigration_status == ImmigrationStatus::Undocumented {
        reasons.push(
            "Primary applicant status may disqualify the household, though citizen children \
             might qualify for 'child-only' grants."
                .to_string(),
        );
        EligibilityStatus::Unlikely
    } else if fpl_percent <= t.tanf_income_limit {
        reasons.push(format!(
            "Your income is extremely low (<{}% FPL), which is required for cash assistance \
             in most states.",
            t.tanf_income_limit
        ));
        EligibilityStatus::LikelyEligible
    } else if fpl_percent <= t.tanf_borderline_limit {
        reasons.push(
            "Income is very low, but TANF limits are often lower than 100% FPL. State rules \
             vary significantly."
                .to_string(),
        );
        EligibilityStatus::Borderline
    } else {
        reasons.push(
            "TANF income limits are very strict (often well below the poverty line). Your \
             income likely exceeds them."
                .to_string(),
        );
        EligibilityStatus::Unlikely
    };

    ProgramResult::new(Program::Tanf, status, reasons, key_factors)
}
