//! Series inputs as a single value.

use maclaurin_integers::Integer;
use num_traits::One;

use crate::exponential::{partial_sums, series_exp, PartialSums};
use crate::SeriesError;

/// Number of terms summed when none is given.
pub const DEFAULT_TERMS: usize = 99;

/// The value to exponentiate and how many series terms to sum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesConfig {
    /// The exponent x in e^x.
    pub x: Integer,
    /// The term count N.
    pub terms: usize,
}

impl SeriesConfig {
    /// Creates a configuration.
    pub fn new(x: Integer, terms: usize) -> Self {
        Self { x, terms }
    }

    /// Replaces the exponent.
    #[must_use]
    pub fn with_x(mut self, x: Integer) -> Self {
        self.x = x;
        self
    }

    /// Replaces the term count.
    #[must_use]
    pub fn with_terms(mut self, terms: usize) -> Self {
        self.terms = terms;
        self
    }

    /// Checks that the configuration describes a computable series.
    pub fn validate(&self) -> Result<(), SeriesError> {
        if self.terms == 0 {
            return Err(SeriesError::NoTerms);
        }
        Ok(())
    }

    /// Approximates e^x.
    pub fn evaluate(&self) -> Result<f64, SeriesError> {
        self.validate()?;
        series_exp(&self.x, self.terms)
    }

    /// Running sums after each term.
    pub fn partial_sums(&self) -> Result<PartialSums, SeriesError> {
        self.validate()?;
        Ok(partial_sums(&self.x, self.terms))
    }
}

impl Default for SeriesConfig {
    /// e^1 with 99 terms.
    fn default() -> Self {
        Self {
            x: Integer::one(),
            terms: DEFAULT_TERMS,
        }
    }
}
