//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the two-phase simplex
//! algorithm on a dense tableau. The first phase finds a basic feasible solution by solving an
//! auxiliary problem, the second phase optimizes the original objective starting from it.
use log::{debug, trace};

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::phase_one::{FeasibilityResult, Rank};
use crate::algorithm::two_phase::settings::SolverSettings;
use crate::algorithm::two_phase::strategy::pivot_rule::{Bland, PivotRule};
use crate::algorithm::two_phase::tableau::{debug_assert_in_basic_feasible_solution_state, Tableau};
use crate::algorithm::two_phase::tableau::kind::{Kind, NonArtificial};
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::general_form::LinearProgram;

pub mod phase_one;
pub mod phase_two;
pub mod settings;
pub mod strategy;
pub mod tableau;

/// Solve a linear program with the two-phase method.
///
/// # Arguments
///
/// * `program`: Linear program in general form.
/// * `settings`: Tolerance and iteration limit.
///
/// # Return value
///
/// The solution if there is a finite optimum, otherwise the reason why there is none.
pub fn solve(program: &LinearProgram, settings: &SolverSettings) -> OptimizationResult {
    // Guaranteed not to cycle, together with the ratio test
    type Rule = Bland;

    let standard_form = program.standardize();
    debug!(
        "Solving a linear program with {} variables and {} constraints",
        program.nr_variables(), program.nr_constraints(),
    );

    match phase_one::primal::<Rule>(&standard_form, settings) {
        FeasibilityResult::Feasible { tableau, rank } => {
            if let Rank::Deficient(rows) = &rank {
                debug!("Removed redundant rows {:?}", rows);
            }

            let cost = (0..standard_form.nr_columns())
                .map(|j| standard_form.cost(j))
                .collect::<Vec<_>>();
            let mut tableau = Tableau::<NonArtificial>::from_artificial(tableau, &cost);
            phase_two::primal::<Rule>(
                &mut tableau,
                standard_form.objective(),
                standard_form.nr_structural(),
                settings,
            )
        },
        FeasibilityResult::Infeasible => OptimizationResult::Infeasible,
        FeasibilityResult::AuxiliaryInfeasible => OptimizationResult::AuxiliaryInfeasible,
        FeasibilityResult::AuxiliaryUnbounded => OptimizationResult::AuxiliaryUnbounded,
        FeasibilityResult::IterationLimit => OptimizationResult::IterationLimit,
    }
}

/// How a run of the primal Simplex method ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IterationResult {
    /// No column improves the objective.
    Optimal,
    /// A column improves the objective, but no row limits how far it can enter.
    ///
    /// The tableau is left in the state in which this was detected.
    Unbounded,
    /// More pivots were needed than allowed.
    IterationLimit,
}

/// Pivot until the tableau is optimal or found to be unbounded.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal)
/// - All constraint values need to be nonnegative (primal feasibility)
///
/// # Arguments
///
/// * `tableau`: Tableau in a basic feasible solution state, modified in place.
/// * `objective`: Direction of optimization.
/// * `max_iterations`: Maximum number of pivots.
pub fn primal<K, PR>(
    tableau: &mut Tableau<K>,
    objective: Objective,
    max_iterations: usize,
) -> IterationResult
where
    K: Kind,
    PR: PivotRule,
{
    let mut rule = PR::new();
    let mut nr_iterations = 0;
    trace!("Starting from\n{}", tableau);

    let result = loop {
        debug_assert_in_basic_feasible_solution_state(tableau);

        match rule.select_primal_pivot_column(tableau, objective) {
            Some((column_index, _cost)) => {
                if nr_iterations == max_iterations {
                    break IterationResult::IterationLimit;
                }
                match tableau.select_primal_pivot_row(column_index) {
                    Some(row_index) => {
                        tableau.bring_into_basis(column_index, row_index);
                        nr_iterations += 1;
                    },
                    None => break IterationResult::Unbounded,
                }
            },
            None => break IterationResult::Optimal,
        }
    };

    debug!(
        "{:?} after {} iterations, objective value {}",
        result, nr_iterations, tableau.objective_function_value(),
    );
    result
}
