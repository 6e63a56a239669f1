use super::common::*;
use crate::screening::domain::{EligibilityStatus, ImmigrationStatus, Program};
use crate::screening::programs::evaluate_program;

#[test]
fn wic_without_pregnancy_or_young_children_skips_income_entirely() {
    let tables = tables();
    // Income low enough to pass every income test; the categorical gate must
    // still short-circuit.
    let input = household("CA", 2, 200.0);

    let result = evaluate_program(Program::Wic, &input, &tables);

    assert_eq!(result.status, EligibilityStatus::Unlikely);
    assert_eq!(result.reasons.len(), 1);
    assert!(result.reasons[0].contains("pregnant/postpartum"));
    assert!(
        !result.key_factors.iter().any(|f| f.contains("% FPL")),
        "no income factor when income was never consulted"
    );
}

#[test]
fn wic_pregnancy_satisfies_categorical_gate() {
    let tables = tables();
    let mut input = household("CA", 2, 2000.0);
    input.is_pregnant = true;

    let result = evaluate_program(Program::Wic, &input, &tables);

    assert_eq!(result.status, EligibilityStatus::LikelyEligible);
    assert!(result.key_factors.iter().any(|f| f.contains("% FPL")));
}

#[test]
fn wic_child_under_five_satisfies_categorical_gate() {
    let tables = tables();
    let mut input = household("CA", 3, 2500.0);
    input.children_count = 1;
    input.children_under5_count = 1;

    let result = evaluate_program(Program::Wic, &input, &tables);

    assert_eq!(result.status, EligibilityStatus::LikelyEligible);
}

#[test]
fn wic_income_bands_apply_once_gate_is_met() {
    let tables = tables();
    let mut input = household("CA", 2, 0.0);
    input.is_pregnant = true;

    input.gross_monthly_income = income_at_percent(&tables, 2, "CA", 185.0);
    let at_limit = evaluate_program(Program::Wic, &input, &tables);
    assert_eq!(at_limit.status, EligibilityStatus::LikelyEligible);

    input.gross_monthly_income = income_at_percent(&tables, 2, "CA", 200.0);
    let over = evaluate_program(Program::Wic, &input, &tables);
    assert_eq!(over.status, EligibilityStatus::Borderline);

    input.gross_monthly_income = income_at_percent(&tables, 2, "CA", 240.0);
    let far_over = evaluate_program(Program::Wic, &input, &tables);
    assert_eq!(far_over.status, EligibilityStatus::Unlikely);
}

#[test]
fn tanf_without_children_or_pregnancy_short_circuits() {
    let tables = tables();
    let input = household("CA", 1, 100.0);

    let result = evaluate_program(Program::Tanf, &input, &tables);

    assert_eq!(result.status, EligibilityStatus::Unlikely);
    assert!(result.reasons[0].contains("minor child"));
    assert!(result
        .key_factors
        .iter()
        .any(|f| f == "No children under 18"));
}

#[test]
fn tanf_income_bands_for_family_with_children() {
    let tables = tables();
    let mut input = household("MI", 3, 0.0);
    input.children_count = 2;

    input.gross_monthly_income = income_at_percent(&tables, 3, "MI", 40.0);
    let deep_poverty = evaluate_program(Program::Tanf, &input, &tables);
    assert_eq!(deep_poverty.status, EligibilityStatus::LikelyEligible);

    input.gross_monthly_income = income_at_percent(&tables, 3, "MI", 70.0);
    let low = evaluate_program(Program::Tanf, &input, &tables);
    assert_eq!(low.status, EligibilityStatus::Borderline);

    input.gross_monthly_income = income_at_percent(&tables, 3, "MI", 120.0);
    let over = evaluate_program(Program::Tanf, &input, &tables);
    assert_eq!(over.status, EligibilityStatus::Unlikely);
}

#[test]
fn tanf_undocumented_applicant_is_unlikely_with_child_only_caveat() {
    let tables = tables();
    // Income well inside the 50% band; the immigration gate must win.
    let mut input = household("CA", 3, 100.0);
    input.children_count = 2;
    input.immigration_status = ImmigrationStatus::Undocumented;

    let result = evaluate_program(Program::Tanf, &input, &tables);

    assert_eq!(result.status, EligibilityStatus::Unlikely);
    assert!(result
        .reasons
        .iter()
        .any(|reason| reason.contains("child-only")));
    assert!(
        !result.reasons.iter().any(|r| r.contains("extremely low")),
        "income band reason must not appear after the immigration gate"
    );
}

#[test]
fn eitc_requires_earned_income() {
    let tables = tables();
    let input = household("CA", 1, 1500.0); // unearned only

    let result = evaluate_program(Program::Eitc, &input, &tables);

    assert_eq!(result.status, EligibilityStatus::Unlikely);
    assert!(result.reasons[0].contains("earned income"));
    assert!(result
        .key_factors
        .iter()
        .any(|f| f == "No earned income reported"));
}

#[test]
fn eitc_earned_income_flag_without_amount_still_short_circuits() {
    let tables = tables();
    let mut input = household("CA", 1, 1500.0);
    input.has_earned_income = true;
    input.monthly_earned_income = 0.0;

    let result = evaluate_program(Program::Eitc, &input, &tables);

    assert_eq!(result.status, EligibilityStatus::Unlikely);
}

#[test]
fn eitc_undocumented_applicant_is_unlikely_at_any_income() {
    let tables = tables();
    for income in [100.0, 1500.0, 9000.0] {
        let mut input = working_family("CA", 3, 2, income);
        input.immigration_status = ImmigrationStatus::Undocumented;

        let result = evaluate_program(Program::Eitc, &input, &tables);

        assert_eq!(result.status, EligibilityStatus::Unlikely, "at ${income}");
        assert!(result
            .key_factors
            .iter()
            .any(|f| f == "Immigration/SSN requirement"));
    }
}
