//! # Errors in the description of a linear program
//!
//! These are detected when a linear program is created, before any solving starts. Outcomes of
//! solving (infeasibility, unboundedness) are not errors; see `OptimizationResult`.
use thiserror::Error;

/// A linear program could not be created from the provided data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinearProgramError {
    /// A linear program needs at least one variable.
    #[error("linear program has no variables")]
    NoVariables,
    /// A row of the constraint matrix has the wrong number of coefficients.
    #[error("constraint row {row} has {found} coefficients, expected {expected}")]
    RowLength {
        /// Index of the first row with a wrong length.
        row: usize,
        /// Number of coefficients in that row.
        found: usize,
        /// Number of variables.
        expected: usize,
    },
    /// The right hand side doesn't have a value for each constraint.
    #[error("right hand side has {found} values for {expected} constraints")]
    RightHandSideLength {
        /// Number of right hand side values.
        found: usize,
        /// Number of constraint rows.
        expected: usize,
    },
    /// There isn't a constraint type for each constraint.
    #[error("{found} constraint types given for {expected} constraints")]
    ConstraintTypeCount {
        /// Number of constraint types.
        found: usize,
        /// Number of constraint rows.
        expected: usize,
    },
    /// A comparison code other than `-1`, `0` or `1`.
    #[error("invalid comparison code {0}, expected -1 (>=), 0 (==) or 1 (<=)")]
    ComparisonCode(i8),
    /// A direction code other than `1` or `-1`.
    #[error("invalid optimization direction {0}, expected 1 (minimize) or -1 (maximize)")]
    DirectionCode(i8),
    /// An infinite or NaN value.
    #[error("non-finite value in the {0}")]
    NonFinite(&'static str),
}
