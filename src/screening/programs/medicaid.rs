use crate::screening::domain::{EligibilityStatus, HouseholdInput, Program, ProgramResult};
use crate::screening::fpl::fpl_percentage;
use crate::screening::guidelines::GuidelineTables;

pub(crate) fn evaluate(input: &HouseholdInput, tables: &GuidelineTables) -> ProgramResult {
    let fpl_percent = fpl_percentage(tables, input);
    let mut reasons = Vec::new();
    let mut key_factors = Vec::new();

    let is_expansion_state = tables.is_expansion_state(&input.state);
    let has_children = input.children_count > 0;
    let is_elderly_or_disabled = input.elderly_count > 0 || input.has_disability;
    let t = &tables.thresholds;

    key_factors.push(format!("Income is ~{}% FPL", fpl_percent.round()));

    // Branch order is load-bearing: pregnancy/children take priority over the
    // aged-disabled pathway, so a pregnant elderly applicant is screened under
    // the pregnancy rules.
    let status = if has_children || input.is_pregnant {
        if fpl_percent <= t.medicaid_children_limit {
            reasons.push(
                "Households with children or pregnant members typically have higher income \
                 limits (often 200%+ FPL)."
                    .to_string(),
            );
            EligibilityStatus::LikelyEligible
        } else if fpl_percent <= t.medicaid_chip_ceiling {
            reasons.push(
                "Income is relatively high, but CHIP programs in some states cover children \
                 up to 300% FPL or higher."
                    .to_string(),
            );
            EligibilityStatus::Borderline
        } else {
            reasons.push(
                "Income likely exceeds CHIP/Medicaid limits, but check state marketplace \
                 for subsidies."
                    .to_string(),
            );
            EligibilityStatus::Unlikely
        }
    } else if !is_elderly_or_disabled {
        // Non-pregnant adults, roughly 19-64.
        if is_expansion_state {
            if fpl_percent <= t.medicaid_expansion_limit {
                reasons.push(format!(
                    "{} is an expansion state. Adults with income under {}% FPL are \
                     typically eligible.",
                    input.state, t.medicaid_expansion_limit
                ));
                EligibilityStatus::LikelyEligible
            } else if fpl_percent <= t.medicaid_expansion_borderline {
                reasons.push(format!(
                    "You are slightly over the {}% limit, but deductions might bring you under.",
                    t.medicaid_expansion_limit
                ));
                EligibilityStatus::Borderline
            } else {
                reasons.push(format!(
                    "Income exceeds the {}% FPL expansion limit.",
                    t.medicaid_expansion_limit
                ));
                EligibilityStatus::Unlikely
            }
        } else {
            reasons.push(format!(
                "{} has not expanded Medicaid. Eligibility for non-disabled adults without \
                 children is very limited.",
                input.state
            ));
            if fpl_percent < 100.0 {
                key_factors.push("Coverage Gap risk".to_string());
                reasons.push(
                    "You may fall into the 'Coverage Gap' where you earn too little for \
                     Marketplace subsidies but don't qualify for Medicaid."
                        .to_string(),
                );
            }
            EligibilityStatus::Unlikely
        }
    } else {
        // Aged/Blind/Disabled pathway, heavily simplified.
        if fpl_percent <= t.medicaid_aged_disabled_limit {
            reasons.push(
                "Income is within typical limits for Aged/Disabled Medicaid programs."
                    .to_string(),
            );
            EligibilityStatus::LikelyEligible
        } else {
            reasons.push(format!(
                "Income is over {}% FPL, but 'Spend Down' programs or Savings Programs \
                 (MSP) might help.",
                t.medicaid_aged_disabled_limit
            ));
            EligibilityStatus::Borderline
        }
    };

    ProgramResult::new(Program::Medicaid, status, reasons, key_factors)
}
