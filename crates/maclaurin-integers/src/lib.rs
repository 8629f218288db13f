//! # maclaurin-integers
//!
//! Exact integer arithmetic for series evaluation.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Exact factorials, one-shot (`factorial`) or memoized (`FactorialTable`)
//!
//! ## Precision Notes
//!
//! Every operation here is exact. The only lossy step is
//! [`Integer::to_f64`], which callers invoke explicitly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod factorial;
pub mod integer;

#[cfg(test)]
mod proptests;

pub use error::IntegerError;
pub use factorial::{factorial, factorial_usize, FactorialTable};
pub use integer::Integer;
