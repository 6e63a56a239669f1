use crate::screening::domain::{
    EligibilityStatus, HouseholdInput, ImmigrationStatus, Program, ProgramResult,
};
use crate::screening::guidelines::GuidelineTables;

pub(crate) fn evaluate(input: &HouseholdInput, tables: &GuidelineTables) -> ProgramResult {
    // Earned-income gate.
    if !input.has_earned_income || input.monthly_earned_income <= 0.0 {
        return ProgramResult::new(
            Program::Eitc,
            EligibilityStatus::Unlikely,
            vec![
                "You must have earned income from employment or self-employment to claim EITC."
                    .to_string(),
            ],
            vec!["No earned income reported".to_string()],
        );
    }

    // SSN requirement, roughly mapped to immigration status.
    if input.immigration_status == ImmigrationStatus::Undocumented {
        return ProgramResult::new(
            Program::Eitc,
            EligibilityStatus::Unlikely,
            vec![
                "Valid Social Security Numbers are generally required for everyone listed on \
                 the tax return for EITC."
                    .to_string(),
            ],
            vec!["Immigration/SSN requirement".to_string()],
        );
    }

    let annual_income = input.gross_monthly_income * 12.0;
    let limit = tables
        .eitc
        .limit_for(input.children_count, input.tax_filing_status);

    let key_factors = vec![
        format!("Annual Income ~${}", format_usd(annual_income)),
        format!("Threshold ~${}", format_usd(limit)),
    ];
    let mut reasons = Vec::new();

    let status = if annual_income < limit {
        reasons.push(format!(
            "Your estimated annual income is below the limit (${}) for your household size.",
            format_usd(limit)
        ));
        EligibilityStatus::LikelyEligible
    } else if annual_income < limit * tables.eitc.borderline_multiplier {
        reasons.push(
            "You are close to the income limit. Deductions (AGI) matter, so you might still \
             qualify for a reduced amount."
                .to_string(),
        );
        EligibilityStatus::Borderline
    } else {
        reasons.push(
            "Income likely exceeds the maximum limit for the Earned Income Tax Credit."
                .to_string(),
        );
        EligibilityStatus::Unlikely
    };

    ProgramResult::new(Program::Eitc, status, reasons, key_factors)
}

/// Whole-dollar rendering with thousands separators for the explanation text.
fn format_usd(amount: f64) -> String {
    let whole = amount.round().abs() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
