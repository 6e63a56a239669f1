//! One independent, side-effect-free evaluator per program. The evaluators
//! share a functional contract (normalized input + guideline tables in, one
//! `ProgramResult` out) but no base type; the engine dispatches them via the
//! fixed `Program::ordered()` list.
//!
//! Each evaluator recomputes the FPL percentage for itself rather than taking
//! it from a shared context, keeping every rule set testable in isolation.

pub(crate) mod eitc;
pub(crate) mod housing;
pub(crate) mod medicaid;
pub(crate) mod snap;
pub(crate) mod tanf;
pub(crate) mod wic;

use super::domain::{HouseholdInput, Program, ProgramResult};
use super::guidelines::GuidelineTables;

/// Run a single program's rule set against an already-normalized input.
pub fn evaluate_program(
    program: Program,
    input: &HouseholdInput,
    tables: &GuidelineTables,
) -> ProgramResult {
    match program {
        Program::Snap => snap::evaluate(input, tables),
        Program::Medicaid => medicaid::evaluate(input, tables),
        Program::Wic => wic::evaluate(input, tables),
        Program::Tanf => tanf::evaluate(input, tables),
        Program::Eitc => eitc::evaluate(input, tables),
        Program::Housing => housing::evaluate(input, tables),
    }
}
