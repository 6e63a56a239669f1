use chrono::Utc;

use super::domain::{AssessmentResults, HouseholdInput, Program};
use super::fpl::fpl_percentage;
use super::guidelines::GuidelineTables;
use super::programs::evaluate_program;

/// Stateless orchestrator that applies every program's rule set to one
/// household snapshot. Holds only policy tables; each call is independent.
pub struct AssessmentEngine {
    tables: GuidelineTables,
}

impl AssessmentEngine {
    pub fn new(tables: GuidelineTables) -> Self {
        Self { tables }
    }

    /// Engine backed by the built-in guideline year.
    pub fn with_defaults() -> Self {
        Self::new(GuidelineTables::default())
    }

    pub fn tables(&self) -> &GuidelineTables {
        &self.tables
    }

    /// Run one full assessment. Clamps the two fields the engine defends
    /// (income to >= 0, household size to >= 1), evaluates the six programs
    /// in fixed order, and stamps the result. Never fails: every well-typed
    /// input maps to a complete result.
    pub fn assess(&self, input: HouseholdInput) -> AssessmentResults {
        let input = normalize(input);

        let programs = Program::ordered()
            .into_iter()
            .map(|program| evaluate_program(program, &input, &self.tables))
            .collect();

        // Display metadata; evaluators recompute their own copies by design.
        let fpl_percentage = fpl_percentage(&self.tables, &input);

        AssessmentResults {
            timestamp: Utc::now(),
            input,
            programs,
            fpl_percentage,
        }
    }
}

/// Convenience entry point over the default guideline tables.
pub fn run_assessment(input: HouseholdInput) -> AssessmentResults {
    AssessmentEngine::with_defaults().assess(input)
}

fn normalize(mut input: HouseholdInput) -> HouseholdInput {
    input.gross_monthly_income = input.gross_monthly_income.max(0.0);
    input.household_size = input.household_size.max(1);
    input
}
