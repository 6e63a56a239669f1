use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::TaxFilingStatus;

/// The 50 states plus DC. Used by the surfaces to reject typos before the
/// engine runs; the engine itself falls back to the contiguous FPL tier for
/// anything it does not recognize.
pub const VALID_STATE_CODES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

pub fn is_valid_state_code(code: &str) -> bool {
    VALID_STATE_CODES.contains(&code)
}

/// One regional poverty-guideline tier: annual base for a household of one
/// plus an annual increment per additional person.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FplTier {
    pub base: f64,
    pub per_person: f64,
}

/// The three regional tiers HHS publishes guidelines for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FplTables {
    pub contiguous: FplTier,
    pub alaska: FplTier,
    pub hawaii: FplTier,
}

impl FplTables {
    /// Unrecognized codes use the contiguous-48/DC tier. Deliberate fallback,
    /// not an error path.
    pub fn tier_for_state(&self, state: &str) -> FplTier {
        match state {
            "AK" => self.alaska,
            "HI" => self.hawaii,
            _ => self.contiguous,
        }
    }
}

/// EITC annual gross-income ceilings keyed by qualifying-children bucket,
/// with separate columns for married-filing-jointly and everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EitcLimitRow {
    pub joint: f64,
    pub other: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EitcLimits {
    pub no_children: EitcLimitRow,
    pub one_child: EitcLimitRow,
    pub two_children: EitcLimitRow,
    pub three_plus_children: EitcLimitRow,
    /// Income within `limit * borderline_multiplier` reads as borderline.
    pub borderline_multiplier: f64,
}

impl EitcLimits {
    pub fn limit_for(&self, children_count: u32, filing: TaxFilingStatus) -> f64 {
        let row = match children_count {
            0 => self.no_children,
            1 => self.one_child,
            2 => self.two_children,
            _ => self.three_plus_children,
        };
        if filing == TaxFilingStatus::MarriedJoint {
            row.joint
        } else {
            row.other
        }
    }
}

/// Percent-of-FPL cutoffs for each income-tested program.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgramThresholds {
    /// Standard SNAP gross-income ceiling.
    pub snap_gross_limit: f64,
    /// Relaxed ceiling when the household has an elderly or disabled member.
    pub snap_elderly_disabled_limit: f64,
    /// Broad-based categorical eligibility ceiling.
    pub snap_categorical_limit: f64,
    pub medicaid_children_limit: f64,
    pub medicaid_chip_ceiling: f64,
    pub medicaid_expansion_limit: f64,
    pub medicaid_expansion_borderline: f64,
    pub medicaid_aged_disabled_limit: f64,
    pub wic_income_limit: f64,
    pub wic_borderline_limit: f64,
    pub tanf_income_limit: f64,
    pub tanf_borderline_limit: f64,
    pub housing_priority_limit: f64,
    pub housing_low_income_limit: f64,
}

/// Complete policy table set for one guideline year. Evaluators read
/// thresholds from here and only here, so a yearly update is a data swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidelineTables {
    pub guideline_year: u16,
    pub fpl: FplTables,
    pub medicaid_expansion_states: BTreeSet<String>,
    pub eitc: EitcLimits,
    pub thresholds: ProgramThresholds,
}

impl GuidelineTables {
    /// Load a guideline set from a JSON file, typically a yearly refresh
    /// pointed at by `APP_GUIDELINES_PATH`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GuidelineError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| GuidelineError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let tables: Self =
            serde_json::from_str(&raw).map_err(|source| GuidelineError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        tables.validate()?;
        Ok(tables)
    }

    /// Reject table sets that would break the engine's "always finite,
    /// non-negative" guarantees before any assessment runs.
    pub fn validate(&self) -> Result<(), GuidelineError> {
        for (region, tier) in [
            ("contiguous", self.fpl.contiguous),
            ("alaska", self.fpl.alaska),
            ("hawaii", self.fpl.hawaii),
        ] {
            if tier.base <= 0.0 || tier.per_person <= 0.0 {
                return Err(GuidelineError::InvalidTier {
                    region,
                    base: tier.base,
                    per_person: tier.per_person,
                });
            }
        }
        if self.eitc.borderline_multiplier < 1.0 {
            return Err(GuidelineError::InvalidMultiplier(
                self.eitc.borderline_multiplier,
            ));
        }
        Ok(())
    }

    pub fn is_expansion_state(&self, state: &str) -> bool {
        self.medicaid_expansion_states.contains(state)
    }
}

impl Default for GuidelineTables {
    /// Approximate 2024 HHS poverty guidelines and program cutoffs, for
    /// educational screening only.
    fn default() -> Self {
        let expansion = [
            "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "HI", "ID", "IL", "IN", "IA", "KY",
            "LA", "ME", "MD", "MA", "MI", "MN", "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY",
            "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SD", "UT", "VT", "VA", "WA", "WV",
        ];

        Self {
            guideline_year: 2024,
            fpl: FplTables {
                contiguous: FplTier {
                    base: 15060.0,
                    per_person: 5380.0,
                },
                alaska: FplTier {
                    base: 18810.0,
                    per_person: 6730.0,
                },
                hawaii: FplTier {
                    base: 17310.0,
                    per_person: 6190.0,
                },
            },
            medicaid_expansion_states: expansion.iter().map(|s| s.to_string()).collect(),
            eitc: EitcLimits {
                no_children: EitcLimitRow {
                    joint: 24210.0,
                    other: 17640.0,
                },
                one_child: EitcLimitRow {
                    joint: 53120.0,
                    other: 46560.0,
                },
                two_children: EitcLimitRow {
                    joint: 59478.0,
                    other: 52918.0,
                },
                three_plus_children: EitcLimitRow {
                    joint: 63398.0,
                    other: 56838.0,
                },
                borderline_multiplier: 1.1,
            },
            thresholds: ProgramThresholds {
                snap_gross_limit: 130.0,
                snap_elderly_disabled_limit: 165.0,
                snap_categorical_limit: 185.0,
                medicaid_children_limit: 200.0,
                medicaid_chip_ceiling: 300.0,
                medicaid_expansion_limit: 138.0,
                medicaid_expansion_borderline: 150.0,
                medicaid_aged_disabled_limit: 100.0,
                wic_income_limit: 185.0,
                wic_borderline_limit: 220.0,
                tanf_income_limit: 50.0,
                tanf_borderline_limit: 80.0,
                housing_priority_limit: 50.0,
                housing_low_income_limit: 80.0,
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GuidelineError {
    #[error("failed to read guideline tables at {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse guideline tables at {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{region} FPL tier must have positive base and per-person amounts (got {base}, {per_person})")]
    InvalidTier {
        region: &'static str,
        base: f64,
        per_person: f64,
    },
    #[error("EITC borderline multiplier must be at least 1.0 (got {0})")]
    InvalidMultiplier(f64),
}
