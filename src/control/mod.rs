//! # Optimal control
//!
//! Control problems that are discretized in time and solved as linear programs.
pub mod discretization;
