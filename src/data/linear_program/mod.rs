//! # Representing linear programs
//!
//! This module contains different representations of linear programs. Linear programs in general
//! form may contain any type of constraint, while linear programs in standard form contain
//! equality constraints with a nonnegative right hand side only.
pub mod elements;
pub mod error;
pub mod general_form;
pub mod standard_form;
pub mod solution;
