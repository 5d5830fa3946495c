//! # Linear programs in equality form
//!
//! A `LinearProgram` rewritten such that all constraints are equalities with a nonnegative right
//! hand side. Inequalities received a slack or surplus column, and every row is implicitly
//! accompanied by an artificial column which together form an identity matrix: a feasible starting
//! basis for the first phase.
use cumsum::cumsum_array_owned;
use enum_map::{Enum, enum_map, EnumMap};

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::general_form::LinearProgram;

/// The groups that the columns of a `StandardForm` are divided in, in this order.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColumnType {
    /// Variables of the original problem.
    Structural,
    /// One for each inequality, in row order.
    Slack,
    /// One for each row, only present in the first phase.
    Artificial,
}

/// A linear program with equality constraints and a nonnegative right hand side.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm {
    objective: Objective,
    /// Structural and slack coefficients, without the artificial identity.
    ///
    /// Dimensions `nr_rows` x `column_group_end[ColumnType::Slack]`.
    constraints: DenseMatrix,
    /// Right hand side, all values nonnegative.
    b: Vec<f64>,
    /// Cost of the structural columns. Slack and artificial columns have zero original cost.
    cost: Vec<f64>,
    /// Exclusive end index of each column group.
    column_group_end: EnumMap<ColumnType, usize>,
}

impl StandardForm {
    /// Normalize signs and add slacks.
    ///
    /// Rows with a negative right hand side are multiplied by `-1`, which flips their inequality.
    /// Then, for each inequality in row order, a column `comp[i] e_i` is appended.
    pub(crate) fn new(program: &LinearProgram) -> Self {
        let nr_rows = program.nr_constraints();
        let nr_structural = program.nr_variables();

        let mut constraint_types = program.constraint_types().to_vec();
        let mut b = program.b().to_vec();
        let mut structural_rows = (0..nr_rows)
            .map(|i| program.constraints().row(i).to_vec())
            .collect::<Vec<_>>();
        for i in 0..nr_rows {
            if b[i] < 0f64 {
                b[i] = -b[i];
                for value in &mut structural_rows[i] {
                    *value = -*value;
                }
                constraint_types[i] = !constraint_types[i];
            }
        }

        let nr_slacks = constraint_types.iter()
            .filter(|constraint_type| constraint_type.slack_coefficient().is_some())
            .count();
        let cumulative = cumsum_array_owned([nr_structural, nr_slacks, nr_rows]);
        let column_group_end = enum_map!{
            ColumnType::Structural => cumulative[0],
            ColumnType::Slack      => cumulative[1],
            ColumnType::Artificial => cumulative[2],
        };

        let nr_columns = column_group_end[ColumnType::Slack];
        let mut constraints = DenseMatrix::zeros(nr_rows, nr_columns);
        let mut next_slack = column_group_end[ColumnType::Structural];
        for (i, row) in structural_rows.into_iter().enumerate() {
            constraints.row_mut(i)[..nr_structural].copy_from_slice(&row);
            if let Some(coefficient) = constraint_types[i].slack_coefficient() {
                constraints[(i, next_slack)] = coefficient;
                next_slack += 1;
            }
        }
        debug_assert_eq!(next_slack, column_group_end[ColumnType::Slack]);

        Self {
            objective: program.objective(),
            constraints,
            b,
            cost: program.cost().to_vec(),
            column_group_end,
        }
    }

    /// To which group column `j` belongs.
    pub fn column_type(&self, j: usize) -> ColumnType {
        debug_assert!(j < self.nr_columns_with_artificial());

        if j < self.column_group_end[ColumnType::Structural] {
            ColumnType::Structural
        } else if j < self.column_group_end[ColumnType::Slack] {
            ColumnType::Slack
        } else {
            ColumnType::Artificial
        }
    }

    /// Coefficient in row `i`, column `j`, where `j` may index an artificial column.
    pub fn coefficient(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nr_rows());

        match self.column_type(j) {
            ColumnType::Structural | ColumnType::Slack => self.constraints[(i, j)],
            ColumnType::Artificial => {
                if j - self.column_group_end[ColumnType::Slack] == i { 1f64 } else { 0f64 }
            },
        }
    }

    /// Original cost of column `j`; zero for slack and artificial columns.
    pub fn cost(&self, j: usize) -> f64 {
        match self.column_type(j) {
            ColumnType::Structural => self.cost[j],
            ColumnType::Slack | ColumnType::Artificial => 0f64,
        }
    }

    /// Right hand side, all values nonnegative.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Which direction the objective function goes.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Exclusive end index of a column group.
    pub fn column_group_end(&self, column_type: ColumnType) -> usize {
        self.column_group_end[column_type]
    }

    /// Number of constraints.
    pub fn nr_rows(&self) -> usize {
        self.b.len()
    }

    /// Number of variables of the original problem.
    pub fn nr_structural(&self) -> usize {
        self.column_group_end[ColumnType::Structural]
    }

    /// Number of columns excluding the artificial ones.
    pub fn nr_columns(&self) -> usize {
        self.column_group_end[ColumnType::Slack]
    }

    /// Number of columns including the artificial ones.
    pub fn nr_columns_with_artificial(&self) -> usize {
        self.column_group_end[ColumnType::Artificial]
    }
}
