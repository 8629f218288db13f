//! Errors raised by exact integer operations.

use thiserror::Error;

use crate::Integer;

/// Errors that can occur when an operation needs a non-negative argument.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntegerError {
    /// n! was requested for n < 0.
    #[error("factorial is undefined for negative argument {0}")]
    NegativeFactorial(Integer),

    /// n! was requested for an n that does not fit in a machine word.
    #[error("factorial argument {0} is too large")]
    FactorialTooLarge(Integer),
}
