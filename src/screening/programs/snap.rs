use crate::screening::domain::{
    EligibilityStatus, HouseholdInput, ImmigrationStatus, Program, ProgramResult,
};
use crate::screening::fpl::fpl_percentage;
use crate::screening::guidelines::GuidelineTables;

pub(crate) fn evaluate(input: &HouseholdInput, tables: &GuidelineTables) -> ProgramResult {
    let fpl_percent = fpl_percentage(tables, input);
    let mut reasons = Vec::new();
    let mut key_factors = Vec::new();

    // Oversimplified for general screening; mixed-status households are not
    // hard-failed because other members (like citizen children) may qualify.
    let valid_immigration = matches!(
        input.immigration_status,
        ImmigrationStatus::Citizen
            | ImmigrationStatus::LprFivePlus
            | ImmigrationStatus::OtherDocumented
    );

    if !valid_immigration {
        reasons.push(
            "Primary applicant's immigration status may limit eligibility, though other \
             household members (like citizen children) might still qualify."
                .to_string(),
        );
        key_factors.push("Immigration Status Check".to_string());
    }

    // Elderly or disabled households test against a relaxed gross limit.
    let has_vulnerable = input.elderly_count > 0 || input.has_disability;
    let effective_gross_limit = if has_vulnerable {
        tables.thresholds.snap_elderly_disabled_limit
    } else {
        tables.thresholds.snap_gross_limit
    };

    key_factors.push(format!(
        "Household income is ~{}% of FPL",
        fpl_percent.round()
    ));

    let status = if fpl_percent <= effective_gross_limit {
        if valid_immigration {
            reasons.push(format!(
                "Your gross income is within the typical federal limit ({}% FPL) or your \
                 state's expanded limit.",
                tables.thresholds.snap_gross_limit
            ));
            EligibilityStatus::LikelyEligible
        } else {
            reasons.push(
                "Income levels look eligible, but eligibility depends on specific \
                 immigration details for each member."
                    .to_string(),
            );
            EligibilityStatus::Borderline
        }
    } else if fpl_percent <= tables.thresholds.snap_categorical_limit {
        reasons.push(format!(
            "Your income is above the standard {}% federal limit but might qualify under \
             state-specific 'Categorical Eligibility' rules which can go up to 200% FPL \
             in some areas.",
            tables.thresholds.snap_gross_limit
        ));
        EligibilityStatus::Borderline
    } else {
        reasons.push(
            "Gross income appears to exceed standard and expanded limits for SNAP.".to_string(),
        );
        EligibilityStatus::Unlikely
    };

    ProgramResult::new(Program::Snap, status, reasons, key_factors)
}
