//! # Linear programs in "general form"
//!
//! The representation in which linear programs are handed to the solver: a dense constraint
//! matrix where each row is either an equality or an inequality, right hand sides of any sign, and
//! nonnegative variables.
use std::convert::TryFrom;
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::error::LinearProgramError;
use crate::data::linear_program::standard_form::StandardForm;

/// A linear program in general form.
///
/// All variables are nonnegative. Row `i` reads `<a_i, x> ? b_i` where `?` is given by
/// `constraint_types[i]`.
///
/// Consistency of the dimensions is checked at creation, so that the solver can rely on it.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram {
    /// Which direction does the objective function go?
    objective: Objective,
    /// Cost coefficient for each variable.
    cost: Vec<f64>,
    /// All constraint coefficients.
    ///
    /// Has size `b.len()` in the row direction, size `cost.len()` in the column direction.
    constraints: DenseMatrix,
    /// All right-hands sides of equations, any sign.
    b: Vec<f64>,
    /// The equation type of all rows, ordered by index.
    constraint_types: Vec<ConstraintType>,
}

impl LinearProgram {
    /// Create a new linear program.
    ///
    /// # Arguments
    ///
    /// * `objective`: Minimize or maximize.
    /// * `cost`: One cost coefficient per variable.
    /// * `rows`: Row-major constraint coefficients, one row per constraint, each of the same
    /// length as `cost`.
    /// * `b`: One right hand side per constraint.
    /// * `constraint_types`: One constraint type per constraint.
    ///
    /// # Errors
    ///
    /// If the dimensions don't agree, there are no variables, or a value is not finite.
    ///
    /// A program without variables is rejected even though its dimensions can be consistent. Each
    /// of its constraints reads `0 ? b_i`, which can be decided without solving anything, and its
    /// solution would be an empty vector.
    pub fn new(
        objective: Objective,
        cost: Vec<f64>,
        rows: Vec<Vec<f64>>,
        b: Vec<f64>,
        constraint_types: Vec<ConstraintType>,
    ) -> Result<Self, LinearProgramError> {
        let nr_variables = cost.len();
        let nr_constraints = rows.len();

        if nr_variables == 0 {
            return Err(LinearProgramError::NoVariables);
        }
        if let Some((row, found)) = rows.iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, length)| length != nr_variables) {
            return Err(LinearProgramError::RowLength { row, found, expected: nr_variables });
        }
        if b.len() != nr_constraints {
            return Err(LinearProgramError::RightHandSideLength {
                found: b.len(),
                expected: nr_constraints,
            });
        }
        if constraint_types.len() != nr_constraints {
            return Err(LinearProgramError::ConstraintTypeCount {
                found: constraint_types.len(),
                expected: nr_constraints,
            });
        }
        if !cost.iter().all(|v| v.is_finite()) {
            return Err(LinearProgramError::NonFinite("cost vector"));
        }
        if !rows.iter().flatten().all(|v| v.is_finite()) {
            return Err(LinearProgramError::NonFinite("constraint matrix"));
        }
        if !b.iter().all(|v| v.is_finite()) {
            return Err(LinearProgramError::NonFinite("right hand side"));
        }

        Ok(Self {
            objective,
            cost,
            constraints: DenseMatrix::from_data(rows, nr_variables),
            b,
            constraint_types,
        })
    }

    /// Create a new linear program from numerical codes.
    ///
    /// # Arguments
    ///
    /// * `direction`: `1` to minimize, `-1` to maximize.
    /// * `comparisons`: Per row, `0` for `==`, `1` for `<=` and `-1` for `>=`.
    ///
    /// See `LinearProgram::new` for the other arguments.
    ///
    /// # Errors
    ///
    /// If a code is invalid, or for any of the reasons `LinearProgram::new` fails.
    pub fn from_codes(
        direction: i8,
        cost: Vec<f64>,
        rows: Vec<Vec<f64>>,
        b: Vec<f64>,
        comparisons: &[i8],
    ) -> Result<Self, LinearProgramError> {
        let objective = Objective::try_from(direction)?;
        let constraint_types = comparisons.iter()
            .map(|&code| ConstraintType::try_from(code))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(objective, cost, rows, b, constraint_types)
    }

    /// Rewrite into equality form with a nonnegative right hand side.
    ///
    /// Rows with a negative right hand side are negated, after which each inequality receives a
    /// slack (`<=`) or surplus (`>=`) variable.
    #[must_use]
    pub fn standardize(&self) -> StandardForm {
        StandardForm::new(self)
    }

    /// Value of the objective function at a point.
    pub fn objective_value(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), self.nr_variables());

        self.cost.iter().zip(x).map(|(c, v)| c * v).sum()
    }

    /// Whether a point satisfies all constraints and variable bounds.
    ///
    /// # Arguments
    ///
    /// * `x`: Value for each variable.
    /// * `tolerance`: Violation that is still accepted, in absolute terms.
    pub fn is_feasible(&self, x: &[f64], tolerance: f64) -> bool {
        debug_assert_eq!(x.len(), self.nr_variables());

        x.iter().all(|&v| v >= -tolerance) && (0..self.nr_constraints()).all(|i| {
            let lhs = self.constraints.row(i).iter().zip(x).map(|(a, v)| a * v).sum::<f64>();
            let difference = lhs - self.b[i];
            match self.constraint_types[i] {
                ConstraintType::Equal => difference.abs() <= tolerance,
                ConstraintType::Less => difference <= tolerance,
                ConstraintType::Greater => difference >= -tolerance,
            }
        })
    }

    /// Which direction the objective function goes.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Cost coefficients, one for each variable.
    pub fn cost(&self) -> &[f64] {
        &self.cost
    }

    /// Constraint matrix.
    pub fn constraints(&self) -> &DenseMatrix {
        &self.constraints
    }

    /// Right hand side, one for each constraint.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Constraint type, one for each constraint.
    pub fn constraint_types(&self) -> &[ConstraintType] {
        &self.constraint_types
    }

    /// Number of variables, the length of a solution vector.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of constraints (rows).
    pub fn nr_constraints(&self) -> usize {
        self.b.len()
    }
}

impl Display for LinearProgram {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let term = |(j, v): (usize, &f64)| format!("{} x{}", v, j);

        writeln!(f, "{}", match self.objective {
            Objective::Minimize => "minimize",
            Objective::Maximize => "maximize",
        })?;
        writeln!(f, "    {}", self.cost.iter().enumerate().map(term).join(" + "))?;
        writeln!(f, "subject to")?;
        for i in 0..self.nr_constraints() {
            writeln!(
                f,
                "    {} {} {}",
                self.constraints.row(i).iter().enumerate()
                    .filter(|&(_, &v)| v != 0f64)
                    .map(term)
                    .join(" + "),
                self.constraint_types[i],
                self.b[i],
            )?;
        }

        Ok(())
    }
}
