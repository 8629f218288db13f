//! Truncated Maclaurin series for the exponential function.
//!
//! This crate provides:
//! - [`series_exp`]: e^x ≈ Σₙ₌₀ᴺ⁻¹ xⁿ/n! for an exact integer x
//! - [`terms`] / [`partial_sums`]: the same computation, one step at a time
//! - [`SeriesConfig`]: the input value and term count as a reusable value
//!
//! # Precision
//!
//! xⁿ and n! are exact. Each term crosses into `f64` at exactly one place,
//! [`ExpTerm::value`], and that conversion is where all approximation error
//! comes from. Once a term is rounded the loss is permanent; a larger term
//! count cannot recover it.

pub mod config;
pub mod error;
pub mod exponential;

#[cfg(test)]
mod proptests;

pub use config::{SeriesConfig, DEFAULT_TERMS};
pub use error::SeriesError;
pub use exponential::{partial_sums, series_exp, terms, ExpTerm, PartialSums, Terms};
