//! Exact factorials.
//!
//! n! is built as an iterative product, so the argument size is bounded
//! by memory rather than by call-stack depth.

use num_traits::One;

use crate::{Integer, IntegerError};

/// Computes n! exactly.
///
/// # Errors
///
/// Returns [`IntegerError::NegativeFactorial`] if `n < 0` and
/// [`IntegerError::FactorialTooLarge`] if `n` does not fit in a `usize`.
pub fn factorial(n: &Integer) -> Result<Integer, IntegerError> {
    if n.is_negative() {
        return Err(IntegerError::NegativeFactorial(n.clone()));
    }
    let n = n
        .to_usize()
        .ok_or_else(|| IntegerError::FactorialTooLarge(n.clone()))?;
    Ok(factorial_usize(n))
}

/// Computes n! exactly for an index that is already known to be non-negative.
#[must_use]
pub fn factorial_usize(n: usize) -> Integer {
    (2..=n).fold(Integer::one(), |acc, k| acc * Integer::from(k))
}

/// A memo of 0!, 1!, ..., k!.
///
/// Each entry is derived from its predecessor, so walking n upwards costs one
/// multiplication per step instead of n.
#[derive(Clone, Debug)]
pub struct FactorialTable {
    values: Vec<Integer>,
}

impl FactorialTable {
    /// Creates a table holding only 0! = 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: vec![Integer::one()],
        }
    }

    /// Creates a table with 0!..n! already filled in.
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        let mut table = Self {
            values: Vec::with_capacity(n + 1),
        };
        table.values.push(Integer::one());
        table.extend_to(n);
        table
    }

    /// Returns n!, extending the table if needed.
    pub fn get(&mut self, n: usize) -> &Integer {
        self.extend_to(n);
        &self.values[n]
    }

    /// Number of cached factorials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: 0! is present from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn extend_to(&mut self, n: usize) {
        while self.values.len() <= n {
            let k = self.values.len();
            let next = &self.values[k - 1] * &Integer::from(k);
            self.values.push(next);
        }
    }
}

impl Default for FactorialTable {
    fn default() -> Self {
        Self::new()
    }
}
