//! # Basis partition
//!
//! Which columns are basic, and in which row, and which are not.
use std::fmt::{Display, Formatter, Result as FormatResult};

use index_utils::remove_indices;
use itertools::Itertools;

/// Where a column currently is in the partition.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Position {
    /// Basic in the given row.
    Basic(usize),
    /// Nonbasic at the given index of the nonbasic list.
    Nonbasic(usize),
}

/// Partition of the column indices in basic and nonbasic ones.
///
/// Both lists have a fixed length and only change by swapping an element of one with an element of
/// the other. Together, they contain each column index exactly once.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Basis {
    /// Column index of the basic variable in each row.
    basic: Vec<usize>,
    /// Column indices of the nonbasic variables, in no particular order.
    nonbasic: Vec<usize>,
    /// For each column, where it can be found in the two lists above.
    positions: Vec<Position>,
}

impl Basis {
    /// Create a new partition.
    ///
    /// # Arguments
    ///
    /// * `basic`: Column index of the basic variable for each row.
    /// * `nonbasic`: All other column indices.
    pub fn new(basic: Vec<usize>, nonbasic: Vec<usize>) -> Self {
        let nr_columns = basic.len() + nonbasic.len();
        let mut positions = vec![Position::Nonbasic(usize::MAX); nr_columns];
        for (i, &j) in basic.iter().enumerate() {
            positions[j] = Position::Basic(i);
        }
        for (index, &j) in nonbasic.iter().enumerate() {
            positions[j] = Position::Nonbasic(index);
        }

        let basis = Self { basic, nonbasic, positions };
        debug_assert!(basis.is_partition());
        basis
    }

    /// Exchange a nonbasic column with the basic column of a row.
    ///
    /// # Arguments
    ///
    /// * `entering`: Column index of a currently nonbasic column.
    /// * `row`: Row whose basic column leaves the basis.
    ///
    /// # Return value
    ///
    /// Column index of the leaving column.
    ///
    /// # Panics
    ///
    /// If `entering` is already basic.
    pub fn swap(&mut self, entering: usize, row: usize) -> usize {
        debug_assert!(row < self.basic.len());

        let index = match self.positions[entering] {
            Position::Nonbasic(index) => index,
            Position::Basic(_) => panic!("Column {} is already basic", entering),
        };
        let leaving = self.basic[row];

        self.basic[row] = entering;
        self.nonbasic[index] = leaving;
        self.positions[entering] = Position::Basic(row);
        self.positions[leaving] = Position::Nonbasic(index);

        leaving
    }

    /// Remove rows together with their basic columns.
    ///
    /// Columns keep their indices; the removed columns are no longer part of the partition.
    ///
    /// # Arguments
    ///
    /// * `rows`: Sorted, deduplicated row indices.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        debug_assert!(rows.windows(2).all(|w| w[0] < w[1]));

        remove_indices(&mut self.basic, rows);
        self.reindex_basic();
    }

    /// Remove columns that are nonbasic from the partition and renumber the remaining columns.
    ///
    /// # Arguments
    ///
    /// * `keep`: Columns with index at least this value are removed. None of them may be basic.
    pub fn truncate_columns(&mut self, keep: usize) {
        debug_assert!(self.basic.iter().all(|&j| j < keep));

        self.nonbasic.retain(|&j| j < keep);
        self.positions = vec![Position::Nonbasic(usize::MAX); keep];
        for (index, &j) in self.nonbasic.iter().enumerate() {
            self.positions[j] = Position::Nonbasic(index);
        }
        self.reindex_basic();
    }

    fn reindex_basic(&mut self) {
        for (i, &j) in self.basic.iter().enumerate() {
            self.positions[j] = Position::Basic(i);
        }
    }

    /// Column index of the variable that is basic in row `i`.
    pub fn basic_column(&self, i: usize) -> usize {
        self.basic[i]
    }

    /// Basic column for each row.
    pub fn basic(&self) -> &[usize] {
        &self.basic
    }

    /// All nonbasic columns, in no particular order.
    pub fn nonbasic(&self) -> &[usize] {
        &self.nonbasic
    }

    /// Where column `j` is.
    #[cfg(test)]
    fn position(&self, j: usize) -> Position {
        self.positions[j]
    }

    /// Whether column `j` is basic.
    pub fn is_basic(&self, j: usize) -> bool {
        matches!(self.positions[j], Position::Basic(_))
    }

    /// Number of basic columns, equal to the number of rows.
    pub fn len(&self) -> usize {
        self.basic.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.basic.is_empty()
    }

    /// Whether every column is either basic or nonbasic, exactly once.
    fn is_partition(&self) -> bool {
        let nr_columns = self.positions.len();
        let mut seen = vec![false; nr_columns];
        for &j in self.basic.iter().chain(&self.nonbasic) {
            if j >= nr_columns || seen[j] {
                return false;
            }
            seen[j] = true;
        }

        seen.into_iter().all(|v| v)
    }
}

impl Display for Basis {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "basic: [{}]", self.basic.iter().join(", "))?;
        writeln!(f, "nonbasic: [{}]", self.nonbasic.iter().sorted().join(", "))
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::tableau::basis::{Basis, Position};

    #[test]
    fn swap() {
        let mut basis = Basis::new(vec![3, 4], vec![0, 1, 2]);
        assert!(basis.is_basic(3));
        assert_eq!(basis.position(1), Position::Nonbasic(1));

        let leaving = basis.swap(1, 0);
        assert_eq!(leaving, 3);
        assert_eq!(basis.basic(), &[1, 4]);
        assert_eq!(basis.nonbasic(), &[0, 3, 2]);
        assert_eq!(basis.position(1), Position::Basic(0));
        assert_eq!(basis.position(3), Position::Nonbasic(1));
        assert!(basis.is_partition());
    }

    #[test]
    #[should_panic]
    fn swap_basic_column() {
        let mut basis = Basis::new(vec![3, 4], vec![0, 1, 2]);
        basis.swap(4, 0);
    }

    #[test]
    fn remove_rows_and_truncate() {
        let mut basis = Basis::new(vec![0, 4, 2], vec![1, 3, 5]);
        basis.remove_rows(&[1]);
        assert_eq!(basis.basic(), &[0, 2]);
        assert_eq!(basis.position(2), Position::Basic(1));

        basis.truncate_columns(3);
        assert_eq!(basis.nonbasic(), &[1]);
        assert_eq!(basis.position(1), Position::Nonbasic(0));
        assert!(basis.is_partition());
        assert_eq!(basis.len(), 2);
    }

    #[test]
    fn display() {
        let basis = Basis::new(vec![2], vec![1, 0]);
        assert_eq!(basis.to_string(), "basic: [2]\nnonbasic: [0, 1]\n");
    }
}
