//! # Dense matrix
//!
//! Row-major storage with dimensions fixed at creation. Rows can only be removed as a whole, which
//! is what happens to redundant constraints after the first phase.
use std::ops::{Index, IndexMut};

use index_utils::remove_indices;

/// Uses a `Vec<Vec<f64>>` as underlying data structure. Indices start at `0`.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix {
    data: Vec<Vec<f64>>,
    nr_columns: usize,
}

impl DenseMatrix {
    /// Create a `DenseMatrix` from row-major data.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, each of length `nr_columns`.
    /// * `nr_columns`: Number of columns. Given explicitly, such that a matrix without rows still
    /// has a width.
    pub fn from_data(data: Vec<Vec<f64>>, nr_columns: usize) -> Self {
        debug_assert!(
            data.iter().all(|row| row.len() == nr_columns),
            "Row lengths not equal to the number of columns {}", nr_columns,
        );

        Self { data, nr_columns }
    }

    /// Create a matrix of zeros of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self { data: vec![vec![0f64; nr_columns]; nr_rows], nr_columns }
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[f64] {
        debug_assert!(i < self.nr_rows());

        &self.data[i]
    }

    /// Mutable access to the values of row `i`.
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        debug_assert!(i < self.nr_rows());

        &mut self.data[i]
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: f64) {
        debug_assert!(i < self.nr_rows());

        for value in &mut self.data[i] {
            *value *= factor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: f64) {
        debug_assert!(read_row < self.nr_rows());
        debug_assert!(write_row < self.nr_rows());
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let addition = factor * self.data[read_row][j];
            self.data[write_row][j] += addition;
        }
    }

    /// Remove rows from this matrix.
    ///
    /// # Arguments
    ///
    /// * `indices`: Sorted, deduplicated indices of the rows to remove.
    pub fn remove_rows(&mut self, indices: &[usize]) {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(indices.iter().all(|&i| i < self.nr_rows()));

        remove_indices(&mut self.data, indices);
    }

    /// Keep only the first `nr_columns` columns.
    pub fn truncate_columns(&mut self, nr_columns: usize) {
        debug_assert!(nr_columns <= self.nr_columns);

        for row in &mut self.data {
            row.truncate(nr_columns);
        }
        self.nr_columns = nr_columns;
    }

    /// Take the rows of this matrix.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.data
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

impl Index<(usize, usize)> for DenseMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns);

        &self.data[i][j]
    }
}

impl IndexMut<(usize, usize)> for DenseMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns);

        &mut self.data[i][j]
    }
}
