//! Resultados de invocaciones de hooks.

mod outcome;

pub use outcome::{CallOutcome, CallOutcomeSet, CapturedError};
