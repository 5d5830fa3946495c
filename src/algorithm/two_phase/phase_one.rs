//! # Phase one: finding a basic feasible solution
//!
//! An auxiliary problem is solved, in which each row has an artificial variable of cost `1`. The
//! artificial variables form the initial basis. If the sum of the artificial variables can be
//! reduced to zero, the original problem is feasible, and the final basis is a starting point for
//! the second phase once the remaining artificial variables have been removed from it.
use log::debug;

use crate::algorithm::two_phase::{IterationResult, primal as iterate};
use crate::algorithm::two_phase::settings::SolverSettings;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::kind::Artificial;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::{is_positive, is_zero};
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::standard_form::StandardForm;

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// The remaining variants indicate that the auxiliary problem could not be solved, which doesn't
/// happen for correctly constructed auxiliary problems unless the iteration limit is hit.
#[derive(Debug, PartialEq)]
pub enum FeasibilityResult {
    /// The problem is feasible and all information necessary to start the second phase is in this
    /// variant.
    Feasible {
        /// Tableau without artificial variables in the basis.
        tableau: Tableau<Artificial>,
        /// Whether rows were removed from the tableau.
        rank: Rank,
    },
    /// The auxiliary optimum is not zero.
    Infeasible,
    /// The auxiliary problem started from a negative right hand side.
    AuxiliaryInfeasible,
    /// The auxiliary problem was reported unbounded.
    AuxiliaryUnbounded,
    /// The iteration limit was reached before the auxiliary problem was solved.
    IterationLimit,
}

/// A matrix or linear program either has full rank, or is rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices is provided, that
/// when removed, makes the matrix or linear program full rank.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows need to be removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the standard form linear program is found.
///
/// # Arguments
///
/// * `standard_form`: Problem with a nonnegative right hand side.
/// * `settings`: Tolerance and iteration limit.
///
/// # Return value
///
/// Whether the problem is feasible, and if so, a tableau in which no artificial variable is basic.
pub(crate) fn primal<PR: PivotRule>(
    standard_form: &StandardForm,
    settings: &SolverSettings,
) -> FeasibilityResult {
    if standard_form.b().iter().any(|&value| value < 0f64) {
        return FeasibilityResult::AuxiliaryInfeasible;
    }

    let mut tableau = Tableau::<Artificial>::new(standard_form, settings.epsilon);
    debug!(
        "Phase one: {} rows, {} columns of which {} artificial",
        tableau.nr_rows(), tableau.nr_columns(), tableau.nr_artificial_variables(),
    );

    match iterate::<_, PR>(&mut tableau, Objective::Minimize, settings.max_iterations) {
        IterationResult::Optimal => {
            let artificial_sum = tableau.objective_function_value();
            // Absolute, not scaled by the magnitude of `b`
            if is_positive(artificial_sum, settings.epsilon) {
                debug!("Phase one: infeasible, sum of artificial variables {}", artificial_sum);
                return FeasibilityResult::Infeasible;
            }

            let rows_to_remove = remove_artificial_basis_variables(&mut tableau);
            let rank = if rows_to_remove.is_empty() {
                Rank::Full
            } else {
                debug!("Phase one: removing {} redundant rows", rows_to_remove.len());
                tableau.remove_rows(&rows_to_remove);
                Rank::Deficient(rows_to_remove)
            };

            FeasibilityResult::Feasible { tableau, rank }
        },
        IterationResult::Unbounded => FeasibilityResult::AuxiliaryUnbounded,
        IterationResult::IterationLimit => FeasibilityResult::IterationLimit,
    }
}

/// Removes all artificial variables from the basis by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// For each row with an artificial basic variable, the non-artificial nonbasic column with the
/// lowest index and a nonzero element in that row is pivoted in. If there is no such column, the
/// row is a linear combination of the other rows.
///
/// # Arguments
///
/// * `tableau`: Tableau with an artificial objective of zero.
///
/// # Return value
///
/// A `Vec` with indices of rows that are redundant. Is sorted as a side effect of the algorithm.
fn remove_artificial_basis_variables(tableau: &mut Tableau<Artificial>) -> Vec<usize> {
    let epsilon = tableau.epsilon();
    let mut rows_to_remove = Vec::new();

    for pivot_row in tableau.artificial_basis_rows() {
        // The artificial variable is still in the basis, at zero level
        debug_assert!(is_zero(tableau.constraint_value(pivot_row), epsilon));

        let pivot_column = tableau.basis().nonbasic().iter()
            .copied()
            .filter(|&j| !tableau.is_artificial(j))
            .filter(|&j| !is_zero(tableau.element(pivot_row, j), epsilon))
            .min();

        match pivot_column {
            Some(pivot_column) => {
                tableau.bring_into_basis(pivot_column, pivot_row);
            },
            None => rows_to_remove.push(pivot_row),
        }
    }

    debug_assert!(rows_to_remove.windows(2).all(|w| w[0] < w[1]));
    rows_to_remove
}
