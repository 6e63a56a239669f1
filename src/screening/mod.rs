//! Household benefit-screening engine: the FPL calculator, the six program
//! rule sets, and the assessment orchestrator that ties them together.

pub mod domain;
pub mod engine;
pub mod fpl;
pub mod guidelines;
pub mod programs;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentResults, EligibilityStatus, HouseholdInput, ImmigrationStatus, Program,
    ProgramResult, TaxFilingStatus,
};
pub use engine::{run_assessment, AssessmentEngine};
pub use guidelines::{is_valid_state_code, GuidelineError, GuidelineTables, VALID_STATE_CODES};
