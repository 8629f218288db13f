//! Errors raised while summing a series.

use thiserror::Error;

/// Errors that can occur during series evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// The term count N was 0.
    #[error("series needs at least one term")]
    NoTerms,

    /// Converting xⁿ or n! to `f64` overflowed and the quotient is not a number.
    #[error("term {index} is not representable as a finite f64")]
    NonFiniteTerm {
        /// The exponent n of the rejected term.
        index: usize,
    },
}
