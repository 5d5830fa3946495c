//! # Building blocks to describe linear programs.
use std::convert::TryFrom;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::Not;

use crate::data::linear_program::error::LinearProgramError;

/// A `Constraint` is a type of (in)equality.
///
/// Numerically, a constraint type is encoded as `0` for `==`, `1` for `<=` and `-1` for `>=`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConstraintType {
    Equal,
    Less,
    Greater,
}

impl ConstraintType {
    /// Coefficient of the slack variable that turns this constraint into an equality.
    ///
    /// # Return value
    ///
    /// `None` for an equality constraint, which needs no slack. A positive slack for a `<=`
    /// constraint and a negative one (a surplus) for a `>=` constraint.
    #[must_use]
    pub fn slack_coefficient(self) -> Option<f64> {
        match self {
            ConstraintType::Equal => None,
            ConstraintType::Less => Some(1f64),
            ConstraintType::Greater => Some(-1f64),
        }
    }
}

/// Flipping the direction of the inequality, as happens when both sides are multiplied by `-1`.
impl Not for ConstraintType {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            ConstraintType::Equal => ConstraintType::Equal,
            ConstraintType::Less => ConstraintType::Greater,
            ConstraintType::Greater => ConstraintType::Less,
        }
    }
}

impl TryFrom<i8> for ConstraintType {
    type Error = LinearProgramError;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ConstraintType::Equal),
            1 => Ok(ConstraintType::Less),
            -1 => Ok(ConstraintType::Greater),
            other => Err(LinearProgramError::ComparisonCode(other)),
        }
    }
}

impl Display for ConstraintType {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        f.write_str(match self {
            ConstraintType::Equal => "==",
            ConstraintType::Less => "<=",
            ConstraintType::Greater => ">=",
        })
    }
}

/// Direction of optimization.
///
/// Numerically, `1` means minimization and `-1` maximization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Objective {
    Maximize,
    Minimize,
}

impl Objective {
    /// Factor with which a relative cost is multiplied before testing whether it is improving.
    ///
    /// A column improves a minimization problem when its relative cost is negative, and a
    /// maximization problem when it is positive.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Objective::Minimize => 1f64,
            Objective::Maximize => -1f64,
        }
    }
}

impl Default for Objective {
    fn default() -> Self {
        Objective::Minimize
    }
}

impl TryFrom<i8> for Objective {
    type Error = LinearProgramError;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Objective::Minimize),
            -1 => Ok(Objective::Maximize),
            other => Err(LinearProgramError::DirectionCode(other)),
        }
    }
}
