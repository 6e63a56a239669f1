use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Self-reported household snapshot supplied by the caller. Immutable per
/// assessment; the engine clamps `gross_monthly_income` and `household_size`
/// before evaluation but never mutates the caller's copy of anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdInput {
    /// Two-letter USPS state code (50 states + DC).
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    pub household_size: u32,
    #[serde(default)]
    pub children_count: u32,
    /// Children under five, a subset of `children_count`.
    #[serde(default)]
    pub children_under5_count: u32,
    #[serde(default)]
    pub elderly_count: u32,
    pub gross_monthly_income: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_monthly_income: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_housing_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub childcare_cost: Option<f64>,
    #[serde(default)]
    pub is_pregnant: bool,
    pub immigration_status: ImmigrationStatus,
    #[serde(default)]
    pub has_disability: bool,
    #[serde(default)]
    pub has_earned_income: bool,
    #[serde(default)]
    pub monthly_earned_income: f64,
    #[serde(default)]
    pub tax_filing_status: TaxFilingStatus,
}

/// Primary applicant's immigration status, kept deliberately coarse. The
/// screening questions never ask about other household members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImmigrationStatus {
    Citizen,
    #[serde(rename = "lpr_5_plus")]
    LprFivePlus,
    #[serde(rename = "lpr_less_5")]
    LprLessFive,
    OtherDocumented,
    Undocumented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxFilingStatus {
    #[default]
    Single,
    MarriedJoint,
    HeadOfHousehold,
    Other,
}

/// Three-valued screening verdict. The declaration order doubles as display
/// emphasis (likely above borderline above unlikely); comparison logic never
/// depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityStatus {
    LikelyEligible,
    Borderline,
    Unlikely,
}

impl EligibilityStatus {
    pub const fn label(self) -> &'static str {
        match self {
            EligibilityStatus::LikelyEligible => "Likely Eligible",
            EligibilityStatus::Borderline => "Borderline",
            EligibilityStatus::Unlikely => "Unlikely",
        }
    }
}

/// The six programs screened, in the order results are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Program {
    Snap,
    Medicaid,
    Wic,
    Tanf,
    Eitc,
    Housing,
}

impl Program {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Snap,
            Self::Medicaid,
            Self::Wic,
            Self::Tanf,
            Self::Eitc,
            Self::Housing,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Snap => "snap",
            Self::Medicaid => "medicaid",
            Self::Wic => "wic",
            Self::Tanf => "tanf",
            Self::Eitc => "eitc",
            Self::Housing => "housing",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Snap => "SNAP (Food Stamps)",
            Self::Medicaid => "Medicaid & CHIP",
            Self::Wic => "WIC (Women, Infants, & Children)",
            Self::Tanf => "TANF (Cash Assistance)",
            Self::Eitc => "Federal EITC",
            Self::Housing => "Housing Assistance (Section 8/Public Housing)",
        }
    }

    pub const fn learn_more_url(self) -> &'static str {
        match self {
            Self::Snap => "https://www.fns.usda.gov/snap/recipient/eligibility",
            Self::Medicaid => "https://www.medicaid.gov/",
            Self::Wic => "https://www.fns.usda.gov/wic",
            Self::Tanf => "https://www.acf.hhs.gov/ofa/programs/tanf",
            Self::Eitc => {
                "https://www.irs.gov/credits-deductions/individuals/earned-income-tax-credit"
            }
            Self::Housing => {
                "https://www.hud.gov/topics/housing_choice_voucher_program_section_8"
            }
        }
    }
}

/// One program's verdict with its explanation trail. Pure output data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramResult {
    pub program_id: String,
    pub program_name: String,
    pub status: EligibilityStatus,
    /// At least one entry on every branch an evaluator can take.
    pub reasons: Vec<String>,
    pub key_factors: Vec<String>,
    pub learn_more_url: String,
}

impl ProgramResult {
    pub fn new(
        program: Program,
        status: EligibilityStatus,
        reasons: Vec<String>,
        key_factors: Vec<String>,
    ) -> Self {
        Self {
            program_id: program.id().to_string(),
            program_name: program.name().to_string(),
            status,
            reasons,
            key_factors,
            learn_more_url: program.learn_more_url().to_string(),
        }
    }
}

/// Aggregate output of one assessment run. Created fresh per request, never
/// mutated, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResults {
    pub timestamp: DateTime<Utc>,
    /// The normalized input the evaluators actually saw.
    pub input: HouseholdInput,
    /// Exactly six entries: snap, medicaid, wic, tanf, eitc, housing.
    pub programs: Vec<ProgramResult>,
    /// Household income as a percent of FPL, for display.
    pub fpl_percentage: f64,
}
