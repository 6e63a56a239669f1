use super::common::*;
use crate::screening::domain::{EligibilityStatus, Program};
use crate::screening::programs::evaluate_program;

#[test]
fn children_branch_uses_chip_limits() {
    let tables = tables();
    let mut input = household("TX", 4, 3000.0); // ~115.6% FPL
    input.children_count = 2;

    let result = evaluate_program(Program::Medicaid, &input, &tables);

    assert_eq!(result.status, EligibilityStatus::LikelyEligible);
    assert!(result
        .reasons
        .iter()
        .any(|reason| reason.contains("children or pregnant")));
}

#[test]
fn children_branch_borderline_up_to_chip_ceiling() {
    let tables = tables();
    let income = income_at_percent(&tables, 3, "CA", 250.0);
    let mut input = household("CA", 3, income);
    input.children_count = 1;

    let result = evaluate_program(Program::Medicaid, &input, &tables);

    assert_eq!(result.status, EligibilityStatus::Borderline);
}

#[test]
fn children_branch_unlikely_above_chip_ceiling() {
    let tables = tables();
    let income = income_at_percent(&tables, 3, "CA", 350.0);
    let mut input = household("CA", 3, income);
    input.children_count = 1;

    let result = evaluate_program(Program::Medicaid, &input, &tables);

    assert_eq!(result.status, EligibilityStatus::Unlikely);
}

#[test]
fn expansion_state_adult_under_138_percent_is_likely() {
    let tables = tables();
    let input = household("CA", 1, 1000.0); // ~79.7% FPL, CA expanded

    let result = evaluate_program(Program::Medicaid, &input, &tables);

    assert_eq!(result.status, EligibilityStatus::LikelyEligible);
    assert!(result
        .reasons
        .iter()
        .any(|reason| reason.contains("expansion state")));
}

#[test]
fn expansion_state_adult_between_138_and_150_is_borderline() {
    let tables = tables();
    let income = income_at_percent(&tables, 1, "CA", 145.0);
    let input = household("CA", 1, income);

    let result = evaluate_program(Program::Medicaid, &input, &tables);

    assert_eq!(result.status, EligibilityStatus::Borderline);
}

#[test]
fn non_expansion_state_adult_is_always_unlikely() {
    let tables = tables();
    for percent in [30.0, 99.0, 120.0, 250.0] {
        let income = income_at_percent(&tables, 1, "TX", percent);
        let input = household("TX", 1, income);

        let result = evaluate_program(Program::Medicaid, &input, &tables);

        assert_eq!(result.status, EligibilityStatus::Unlikely, "at {percent}%");
    }
}

#[test]
fn coverage_gap_flagged_only_below_100_percent_in_non_expansion_state() {
    let tables = tables();

    let low = household("TX", 1, income_at_percent(&tables, 1, "TX", 60.0));
    let low_result = evaluate_program(Program::Medicaid, &low, &tables);
    assert!(low_result
        .key_factors
        .iter()
        .any(|factor| factor == "Coverage Gap risk"));
    assert!(low_result
        .reasons
        .iter()
        .any(|reason| reason.contains("Coverage Gap")));

    let higher = household("TX", 1, income_at_percent(&tables, 1, "TX", 120.0));
    let higher_result = evaluate_program(Program::Medicaid, &higher, &tables);
    assert!(!higher_result
        .key_factors
        .iter()
        .any(|factor| factor == "Coverage Gap risk"));
}

#[test]
fn aged_disabled_branch_under_100_percent_is_likely() {
    let tables = tables();
    let mut input = household("TX", 1, income_at_percent(&tables, 1, "TX", 85.0));
    input.elderly_count = 1;

    let result = evaluate_program(Program::Medicaid, &input, &tables);

    assert_eq!(result.status, EligibilityStatus::LikelyEligible);
}

#[test]
fn aged_disabled_branch_over_100_percent_mentions_spend_down() {
    let tables = tables();
    let mut input = household("TX", 1, income_at_percent(&tables, 1, "TX", 140.0));
    input.has_disability = true;

    let result = evaluate_program(Program::Medicaid, &input, &tables);

    assert_eq!(result.status, EligibilityStatus::Borderline);
    assert!(result
        .reasons
        .iter()
        .any(|reason| reason.contains("Spend Down")));
}

#[test]
fn pregnancy_takes_priority_over_aged_disabled_branch() {
    // A pregnant elderly applicant is screened under the pregnancy rules.
    let tables = tables();
    let income = income_at_percent(&tables, 2, "TX", 180.0);
    let mut input = household("TX", 2, income);
    input.is_pregnant = true;
    input.elderly_count = 1;

    let result = evaluate_program(Program::Medicaid, &input, &tables);

    // 180% would be borderline under ABD (over 100%); the pregnancy branch
    // reads it as likely (under 200%).
    assert_eq!(result.status, EligibilityStatus::LikelyEligible);
    assert!(result
        .reasons
        .iter()
        .any(|reason| reason.contains("children or pregnant")));
}
