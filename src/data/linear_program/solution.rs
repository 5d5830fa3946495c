//! # Representation of optimal solutions
//!
//! Once a linear program is fully solved, a solution is derived. It contains a value for each
//! variable of the original problem; slack and artificial variables are not part of it.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

/// An optimal solution to a linear program.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Value of the objective function at `values`, in the direction of the original problem.
    objective_value: f64,
    /// One value for each structural variable, ordered by index.
    values: Vec<f64>,
}

impl Solution {
    /// Create a new `Solution` instance.
    pub fn new(objective_value: f64, values: Vec<f64>) -> Self {
        Self { objective_value, values }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Values of the variables, ordered by index.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Take the values of the variables.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "objective value: {}", self.objective_value)?;
        writeln!(f, "values: [{}]", self.values.iter().join(", "))
    }
}
