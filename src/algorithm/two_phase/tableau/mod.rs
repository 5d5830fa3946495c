//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//!
//! The tableau is a dense matrix of `m + 1` rows and `1 + n` columns. Row `0` is the objective
//! row: it holds minus the current objective function value followed by the relative costs. The
//! other rows hold the current value of the basic variable of that row, followed by the
//! coefficients of the constraints with respect to the current basis.
//!
//! Methods take row indices in `0..m` and column indices in `0..n`; the shift into the matrix is
//! handled here.
use std::cmp::max;
use std::fmt::{Display, Formatter, Result as FormatResult};

use log::trace;

use crate::algorithm::two_phase::tableau::basis::Basis;
use crate::algorithm::two_phase::tableau::kind::{Artificial, Kind, NonArtificial};
use crate::data::linear_algebra::{is_negative, is_positive, is_zero};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::standard_form::{ColumnType, StandardForm};

pub mod basis;
pub mod kind;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns all data describing the current basis, and is modified in place by every basis change.
#[derive(Clone, PartialEq, Debug)]
pub struct Tableau<K> {
    /// Objective row, value column and the constraint coefficients.
    ///
    /// Dimensions `(self.nr_rows() + 1)` x `(1 + self.nr_columns())`.
    matrix: DenseMatrix,
    /// Which columns are basic, and in which row.
    basis: Basis,
    /// Threshold below which values are considered to be zero.
    epsilon: f64,
    /// Whether this tableau has artificial variables (and is in the first phase of the two-phase
    /// algorithm) or not. See the `Kind` trait for more information.
    kind: K,
}

impl<K> Tableau<K>
where
    K: Kind,
{
    /// Gauss-Jordan elimination around element `(row, column)`.
    ///
    /// The pivot row is divided by the pivot element, after which a multiple of it is subtracted
    /// from every other row, including the objective row. Afterwards, the pivot column is exactly
    /// the unit vector of `row`.
    ///
    /// The basis is not updated; see `bring_into_basis`.
    ///
    /// # Arguments
    ///
    /// * `row`: Constraint row in range `0..self.nr_rows()`.
    /// * `column`: Column in range `0..self.nr_columns()`, with a nonzero element in `row`.
    pub fn pivot(&mut self, row: usize, column: usize) {
        debug_assert!(row < self.nr_rows());
        debug_assert!(column < self.nr_columns());

        let (pivot_row, pivot_column) = (row + 1, column + 1);
        let pivot_value = self.matrix[(pivot_row, pivot_column)];
        debug_assert!(pivot_value.abs() > 0f64, "Pivot on a zero element ({}, {})", row, column);

        self.matrix.multiply_row(pivot_row, 1f64 / pivot_value);
        for i in 0..self.matrix.nr_rows() {
            if i != pivot_row {
                let factor = self.matrix[(i, pivot_column)];
                if factor != 0f64 {
                    self.matrix.mul_add_rows(pivot_row, i, -factor);
                }
            }
        }
        for i in 0..self.matrix.nr_rows() {
            self.matrix[(i, pivot_column)] = if i == pivot_row { 1f64 } else { 0f64 };
        }
    }

    /// Brings a column into the basis by pivoting and exchanging it with the basic column of the
    /// pivot row.
    ///
    /// # Return value
    ///
    /// Index of the column that left the basis.
    pub fn bring_into_basis(&mut self, pivot_column_index: usize, pivot_row_index: usize) -> usize {
        debug_assert!(!self.is_in_basis(pivot_column_index));

        self.pivot(pivot_row_index, pivot_column_index);
        let leaving = self.basis.swap(pivot_column_index, pivot_row_index);
        trace!(
            "Column {} entered the basis in row {}, column {} left, objective value {}",
            pivot_column_index, pivot_row_index, leaving, self.objective_function_value(),
        );

        leaving
    }

    /// Determine the row to pivot on.
    ///
    /// This is the row with the minimal ratio between the current constraint value and the
    /// element in the column, among the rows where that element is positive. When several rows
    /// attain the minimum, the first one is chosen.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering column.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded in the direction of
    /// this column.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        let mut min_values: Option<(usize, f64)> = None;
        for row in 0..self.nr_rows() {
            let xij = self.element(row, column);
            if is_positive(xij, self.epsilon) {
                let ratio = self.constraint_value(row) / xij;
                match &mut min_values {
                    Some((min_index, min_ratio)) => if ratio < *min_ratio {
                        *min_index = row;
                        *min_ratio = ratio;
                    },
                    None => min_values = Some((row, ratio)),
                }
            }
        }

        min_values.map(|(min_index, _)| min_index)
    }

    /// Relative cost of column `j` with respect to the current basis.
    pub fn relative_cost(&self, j: usize) -> f64 {
        debug_assert!(j < self.nr_columns());

        self.matrix[(0, j + 1)]
    }

    /// Value of the objective function at the current basic solution.
    pub fn objective_function_value(&self) -> f64 {
        -self.matrix[(0, 0)]
    }

    /// Current value of the variable that is basic in row `i`.
    pub fn constraint_value(&self, i: usize) -> f64 {
        debug_assert!(i < self.nr_rows());

        self.matrix[(i + 1, 0)]
    }

    /// Coefficient of column `j` in row `i`, with respect to the current basis.
    pub fn element(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.matrix[(i + 1, j + 1)]
    }

    /// Whether a column is currently basic.
    pub fn is_in_basis(&self, column: usize) -> bool {
        self.basis.is_basic(column)
    }

    /// The current partition in basic and nonbasic columns.
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// Value of every variable at the current basic solution.
    ///
    /// # Return value
    ///
    /// A value for each column, zero for the nonbasic ones.
    pub fn current_bfs(&self) -> Vec<f64> {
        let mut values = vec![0f64; self.nr_columns()];
        for (i, &j) in self.basis.basic().iter().enumerate() {
            values[j] = self.constraint_value(i);
        }

        values
    }

    /// Threshold below which values are considered to be zero.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Number of constraint rows, excluding the objective row.
    pub fn nr_rows(&self) -> usize {
        self.matrix.nr_rows() - 1
    }

    /// Number of variables, including any artificial ones.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns() - 1
    }
}

impl Tableau<Artificial> {
    /// Create the tableau for the auxiliary problem of the first phase.
    ///
    /// The matrix is allocated once at its final size and filled by index. The artificial columns
    /// form the initial basis. Their cost is `1`, all other columns have cost `0`, so the relative
    /// cost of a column is minus the sum of its coefficients.
    pub fn new(standard_form: &StandardForm, epsilon: f64) -> Self {
        let nr_rows = standard_form.nr_rows();
        let nr_columns = standard_form.nr_columns_with_artificial();
        let first_artificial = standard_form.column_group_end(ColumnType::Slack);

        let mut matrix = DenseMatrix::zeros(1 + nr_rows, 1 + nr_columns);
        for i in 0..nr_rows {
            let b_i = standard_form.b()[i];
            debug_assert!(b_i >= 0f64);
            matrix[(i + 1, 0)] = b_i;
            matrix[(0, 0)] -= b_i;

            for j in 0..first_artificial {
                let value = standard_form.coefficient(i, j);
                matrix[(i + 1, j + 1)] = value;
                matrix[(0, j + 1)] -= value;
            }
            matrix[(i + 1, 1 + first_artificial + i)] = 1f64;
        }

        let basis = Basis::new(
            (first_artificial..nr_columns).collect(),
            (0..first_artificial).collect(),
        );

        Self {
            matrix,
            basis,
            epsilon,
            kind: Artificial { nr_artificial: nr_rows },
        }
    }

    /// Number of artificial columns.
    pub fn nr_artificial_variables(&self) -> usize {
        self.kind.nr_artificial_variables()
    }

    /// Whether column `j` is artificial.
    pub fn is_artificial(&self, j: usize) -> bool {
        j >= self.first_artificial()
    }

    /// Rows in which an artificial variable is basic, in increasing order.
    pub fn artificial_basis_rows(&self) -> Vec<usize> {
        (0..self.nr_rows())
            .filter(|&i| self.is_artificial(self.basis.basic_column(i)))
            .collect()
    }

    /// Index of the first artificial column.
    fn first_artificial(&self) -> usize {
        self.nr_columns() - self.nr_artificial_variables()
    }

    /// Delete constraint rows together with their basic variable.
    ///
    /// The basic variable of each removed row should be artificial.
    ///
    /// # Arguments
    ///
    /// * `rows`: Sorted, deduplicated constraint row indices.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        debug_assert!(rows.iter().all(|&i| self.is_artificial(self.basis.basic_column(i))));

        let matrix_rows = rows.iter().map(|i| i + 1).collect::<Vec<_>>();
        self.matrix.remove_rows(&matrix_rows);
        self.basis.remove_rows(rows);
    }
}

impl Tableau<NonArtificial> {
    /// Create a tableau without artificial variables from the final tableau of the first phase.
    ///
    /// The artificial columns are dropped and the objective row is recomputed for the original
    /// cost: `c - c_B T` for the relative costs and `-c_B x_B` for the value.
    ///
    /// # Arguments
    ///
    /// * `artificial`: Tableau without any artificial variables in the basis.
    /// * `cost`: Cost of each non-artificial column.
    pub fn from_artificial(artificial: Tableau<Artificial>, cost: &[f64]) -> Self {
        let nr_columns = artificial.first_artificial();
        debug_assert_eq!(cost.len(), nr_columns);
        debug_assert!(artificial.artificial_basis_rows().is_empty());

        let Tableau { mut matrix, mut basis, epsilon, .. } = artificial;
        matrix.truncate_columns(1 + nr_columns);
        basis.truncate_columns(nr_columns);

        let objective_row = matrix.row_mut(0);
        objective_row[0] = 0f64;
        objective_row[1..].copy_from_slice(cost);
        for (i, &j) in basis.basic().iter().enumerate() {
            if cost[j] != 0f64 {
                matrix.mul_add_rows(i + 1, 0, -cost[j]);
            }
        }
        for &j in basis.basic() {
            matrix[(0, j + 1)] = 0f64;
        }

        Self { matrix, basis, epsilon, kind: NonArtificial }
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn debug_assert_in_basic_feasible_solution_state<K: Kind>(tableau: &Tableau<K>) {
    let epsilon = tableau.epsilon;

    // Correct number of basis columns
    debug_assert_eq!(tableau.basis.len(), tableau.nr_rows());

    // Basic columns are unit vectors, including a zero relative cost
    for (i, &j) in tableau.basis.basic().iter().enumerate() {
        debug_assert!(
            is_zero(tableau.relative_cost(j), epsilon),
            "Relative cost of basic column {} is not zero", j,
        );
        for k in 0..tableau.nr_rows() {
            let expected = if k == i { 1f64 } else { 0f64 };
            debug_assert!(
                is_zero(tableau.element(k, j) - expected, epsilon),
                "Column {} is not equal to e_{}", j, i,
            );
        }
    }

    // Primal feasibility
    for i in 0..tableau.nr_rows() {
        let value = tableau.constraint_value(i);
        debug_assert!(
            !is_negative(value, epsilon),
            "rhs (b) is not always nonnegative: at index {} we have {} < 0", i, value,
        );
    }
}

impl<K: Kind> Display for Tableau<K> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let format = |value: f64| format!("{:.4}", value);

        writeln!(f, "=== Tableau ===")?;
        let objective = format(self.objective_function_value());
        let cost = (0..self.nr_columns())
            .map(|j| format(self.relative_cost(j)))
            .collect::<Vec<_>>();
        let b = (0..self.nr_rows())
            .map(|i| format(self.constraint_value(i)))
            .collect::<Vec<_>>();
        let columns = (0..self.nr_columns())
            .map(|j| (0..self.nr_rows()).map(|i| format(self.element(i, j))).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        // Artificial columns are marked with an "a"
        let first_artificial = self.nr_columns() - self.kind.nr_artificial_variables();
        let headers = (0..self.nr_columns())
            .map(|j| if j < first_artificial { j.to_string() } else { format!("a{}", j) })
            .collect::<Vec<_>>();

        let row_counter_width = max("cost".len(), self.nr_rows().to_string().len());
        let column_width = columns.iter().enumerate().map(|(j, column)| {
            column.iter().map(String::len)
                .chain([headers[j].len(), cost[j].len()])
                .max().unwrap_or(0)
        }).collect::<Vec<_>>();
        let b_inner_width = b.iter().map(String::len).chain([objective.len()]).max().unwrap_or(0);

        // Column counters
        write!(f, "{0:>width$} |", "", width = row_counter_width)?;
        write!(f, " {0:^width$} |", "b", width = b_inner_width)?;
        for (header, width) in headers.iter().zip(&column_width) {
            write!(f, " {0:^width$}", header, width = width)?;
        }
        writeln!(f)?;

        let total_width = (row_counter_width + 1) + 1 + (1 + b_inner_width + 1) + 1 +
            column_width.iter().map(|l| 1 + l).sum::<usize>();
        // Separator
        writeln!(f, "{}", "-".repeat(total_width))?;

        // Cost row
        write!(f, "{0:>width$} |", "cost", width = row_counter_width)?;
        write!(f, " {0:^width$} |", objective, width = b_inner_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", cost[j], width = width)?;
        }
        writeln!(f)?;

        // Separator
        writeln!(f, "{}", "-".repeat(total_width))?;

        // Row counter and row data
        for i in 0..self.nr_rows() {
            write!(f, "{0:>width$} |", i, width = row_counter_width)?;
            write!(f, " {0:^width$} |", b[i], width = b_inner_width)?;
            for (j, width) in column_width.iter().enumerate() {
                write!(f, " {0:^width$}", columns[j][i], width = width)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Basis ===")?;
        write!(f, "{}", self.basis)
    }
}
