//! The exponential series e^x = Σₙ xⁿ/n!.
//!
//! Terms are produced exactly and only rounded when a caller asks for their
//! value, so the exact/approximate boundary stays in one place.

use maclaurin_integers::Integer;
use num_traits::One;
use tracing::{debug, trace};

use crate::SeriesError;

/// One term xⁿ/n! of the series, held exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpTerm {
    /// The exponent n.
    pub index: usize,
    /// xⁿ.
    pub power: Integer,
    /// n!.
    pub factorial: Integer,
}

impl ExpTerm {
    /// Converts numerator and denominator to `f64` and divides.
    ///
    /// Both sides are rounded independently. A side beyond `f64` range becomes
    /// infinite; a finite numerator over an infinite factorial gives 0, which
    /// is accepted, but an infinite or NaN quotient is rejected.
    pub fn value(&self) -> Result<f64, SeriesError> {
        let value = self.power.to_f64() / self.factorial.to_f64();
        if value.is_finite() {
            Ok(value)
        } else {
            Err(SeriesError::NonFiniteTerm { index: self.index })
        }
    }
}

/// Iterator over the first N exact terms of e^x.
///
/// Only the current xⁿ and n! are held; each step multiplies them forward.
#[derive(Clone, Debug)]
pub struct Terms {
    x: Integer,
    next: usize,
    count: usize,
    power: Integer,
    factorial: Integer,
}

impl Iterator for Terms {
    type Item = ExpTerm;

    fn next(&mut self) -> Option<ExpTerm> {
        if self.next >= self.count {
            return None;
        }
        let index = self.next;
        if index > 0 {
            self.power = &self.power * &self.x;
            self.factorial = &self.factorial * &Integer::from(index);
        }
        self.next += 1;

        Some(ExpTerm {
            index,
            power: self.power.clone(),
            factorial: self.factorial.clone(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Terms {}

/// Returns the terms x⁰/0!, x¹/1!, ..., xᴺ⁻¹/(N-1)!.
#[must_use]
pub fn terms(x: &Integer, count: usize) -> Terms {
    Terms {
        x: x.clone(),
        next: 0,
        count,
        power: Integer::one(),
        factorial: Integer::one(),
    }
}

/// Iterator over the running `f64` sums of the series.
///
/// Stops after yielding the first error.
#[derive(Clone, Debug)]
pub struct PartialSums {
    terms: Terms,
    sum: f64,
    failed: bool,
}

impl Iterator for PartialSums {
    type Item = Result<f64, SeriesError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let term = self.terms.next()?;
        match term.value() {
            Ok(value) => {
                self.sum += value;
                trace!(index = term.index, term = value, sum = self.sum, "series term");
                Some(Ok(self.sum))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Returns the sums after 1, 2, ..., N terms.
#[must_use]
pub fn partial_sums(x: &Integer, count: usize) -> PartialSums {
    PartialSums {
        terms: terms(x, count),
        sum: 0.0,
        failed: false,
    }
}

/// Approximates e^x with the first `count` terms of its Maclaurin series.
///
/// # Errors
///
/// Returns [`SeriesError::NoTerms`] if `count` is 0 and
/// [`SeriesError::NonFiniteTerm`] if a term overflows `f64`.
pub fn series_exp(x: &Integer, count: usize) -> Result<f64, SeriesError> {
    if count == 0 {
        return Err(SeriesError::NoTerms);
    }

    let mut sum = 0.0;
    for partial in partial_sums(x, count) {
        sum = partial?;
    }

    debug!(%x, terms = count, sum, "evaluated exponential series");
    Ok(sum)
}
