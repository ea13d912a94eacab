//! Core calculator module
//!
//! The engine state machine, the four arithmetic operations, and the
//! canonical number format shared by both.

pub mod engine;
pub mod format;
mod operations;

pub use engine::{Engine, EngineState, Pending, Phase};
pub use format::{format_number, parse_operand, MAX_FRACTION_DIGITS};
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors reported to the UI collaborator.
///
/// Every variant is recoverable: by the time a handler returns one of these
/// the engine has already reset itself and the display reads `"0"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// An operand string could not be parsed as a finite number
    #[error("Invalid number format: {0}")]
    NumberFormat(String),
    /// Right operand of a division was exactly zero
    #[error("Cannot divide by zero")]
    DivideByZero,
    /// The result is not representable as a finite number
    #[error("Result is too large to display")]
    Overflow,
}

impl CalcError {
    /// Creates a number format error for the given operand text
    #[must_use]
    pub fn number_format(operand: impl Into<String>) -> Self {
        Self::NumberFormat(operand.into())
    }
}
