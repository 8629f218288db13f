//! # Maclaurin
//!
//! Approximates e^x by summing the Maclaurin series Σ xⁿ/n! over exact
//! arbitrary precision integers, then rounding each term to `f64`.
//!
//! ## Quick Start
//!
//! ```rust
//! use maclaurin::prelude::*;
//!
//! let e = series_exp(&Integer::new(1), 99).unwrap();
//! assert!((e - std::f64::consts::E).abs() < 1e-9);
//!
//! let five = factorial(&Integer::new(5)).unwrap();
//! assert_eq!(five.to_i64(), Some(120));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use maclaurin_integers as integers;
pub use maclaurin_series as series;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use maclaurin_integers::{factorial, FactorialTable, Integer, IntegerError};
    pub use maclaurin_series::{
        partial_sums, series_exp, ExpTerm, SeriesConfig, SeriesError, DEFAULT_TERMS,
    };
}
