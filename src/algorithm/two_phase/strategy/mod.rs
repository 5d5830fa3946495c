//! # Strategies
//!
//! Choices that the Simplex method leaves open, such as which column enters the basis.
pub mod pivot_rule;
