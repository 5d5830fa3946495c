//! # Data structures
//!
//! Linear programs as they are given by the user, their equality form, and the dense matrix that
//! the tableau is stored in.
pub mod linear_algebra;
pub mod linear_program;
