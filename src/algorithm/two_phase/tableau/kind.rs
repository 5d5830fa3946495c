//! # Tableau types: artificial or not
//!
//! A tableau can contain artificial variables. They are used to find a feasible solution in a
//! two-phase algorithm: the first phase finds a basic feasible solution, the second improves it.
//!
//! The `Tableau` type and the algorithm logic in the parent modules are independent of whether a
//! tableau contains artificial variables, or not. This module enables those abstractions.

/// The tableau type provides two different ways for the `Tableau` to function, depending on whether
/// artificial variables are part of the problem.
pub trait Kind {
    /// How many artificial variables are in the tableau.
    ///
    /// Artificial variables, if any, always have the highest column indices.
    fn nr_artificial_variables(&self) -> usize;
}

/// The tableau of the first phase.
///
/// Each row has an artificial column, which together form an identity matrix.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Artificial {
    /// Number of artificial columns, equal to the number of rows at creation.
    pub(crate) nr_artificial: usize,
}

impl Kind for Artificial {
    fn nr_artificial_variables(&self) -> usize {
        self.nr_artificial
    }
}

/// The tableau of the second phase, containing only columns of the standard form problem.
///
/// This `Tableau` variant should only be constructed with a known feasible basis.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NonArtificial;

impl Kind for NonArtificial {
    fn nr_artificial_variables(&self) -> usize {
        0
    }
}
