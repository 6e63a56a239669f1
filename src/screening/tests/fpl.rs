use super::common::*;
use crate::screening::fpl::{fpl_percentage, monthly_fpl};
use crate::screening::guidelines::VALID_STATE_CODES;

#[test]
fn monthly_fpl_matches_published_contiguous_guidelines() {
    let tables = tables();
    // 2024 household of one: $15,060 / 12.
    assert!((monthly_fpl(&tables, 1, "CA") - 1255.0).abs() < 1e-9);
    // Each additional person adds $5,380 annually.
    assert!((monthly_fpl(&tables, 4, "TX") - (15060.0 + 3.0 * 5380.0) / 12.0).abs() < 1e-9);
}

#[test]
fn alaska_and_hawaii_use_their_own_tiers() {
    let tables = tables();
    assert!((monthly_fpl(&tables, 1, "AK") - 18810.0 / 12.0).abs() < 1e-9);
    assert!((monthly_fpl(&tables, 1, "HI") - 17310.0 / 12.0).abs() < 1e-9);
    assert!(monthly_fpl(&tables, 1, "AK") > monthly_fpl(&tables, 1, "HI"));
    assert!(monthly_fpl(&tables, 1, "HI") > monthly_fpl(&tables, 1, "IA"));
}

#[test]
fn unrecognized_state_falls_back_to_contiguous_tier() {
    let tables = tables();
    assert_eq!(monthly_fpl(&tables, 3, "ZZ"), monthly_fpl(&tables, 3, "IA"));
}

#[test]
fn monthly_fpl_is_positive_and_strictly_increasing_in_size() {
    let tables = tables();
    for state in VALID_STATE_CODES {
        let mut previous = 0.0;
        for size in 1..=10 {
            let fpl = monthly_fpl(&tables, size, state);
            assert!(fpl > previous, "{state} size {size} should grow");
            previous = fpl;
        }
    }
}

#[test]
fn household_size_zero_is_floored_to_one() {
    let tables = tables();
    assert_eq!(monthly_fpl(&tables, 0, "CA"), monthly_fpl(&tables, 1, "CA"));
}

#[test]
fn percentage_is_zero_at_zero_income_and_linear_in_income() {
    let tables = tables();
    let mut input = household("CA", 1, 0.0);
    assert_eq!(fpl_percentage(&tables, &input), 0.0);

    input.gross_monthly_income = 1000.0;
    let at_1000 = fpl_percentage(&tables, &input);
    input.gross_monthly_income = 3000.0;
    let at_3000 = fpl_percentage(&tables, &input);
    assert!((at_3000 - 3.0 * at_1000).abs() < 1e-9);
}

#[test]
fn percentage_matches_worked_example() {
    // Household of 1 in CA at $1,000/month: 1000 / (15060/12) * 100 ~= 79.7%.
    let tables = tables();
    let input = household("CA", 1, 1000.0);
    let percent = fpl_percentage(&tables, &input);
    assert!((percent - 79.68).abs() < 0.01, "got {percent}");
}
