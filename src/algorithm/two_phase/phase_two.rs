//! # Phase two: improving a basic feasible solution
//!
//! Starting from the basis found in the first phase, the original objective is optimized.
use log::debug;

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::{IterationResult, primal as iterate};
use crate::algorithm::two_phase::settings::SolverSettings;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::kind::NonArtificial;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::solution::Solution;

/// Reduces the cost of the basic feasible solution to the minimum (or increases it to the
/// maximum).
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal)
/// - All constraint values need to be nonnegative (primal feasibility)
///
/// # Arguments
///
/// * `tableau`: Tableau with the original costs.
/// * `objective`: Direction of optimization.
/// * `nr_structural`: Number of variables of the original problem, which are the columns with the
/// lowest indices.
/// * `settings`: Iteration limit.
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal<PR: PivotRule>(
    tableau: &mut Tableau<NonArtificial>,
    objective: Objective,
    nr_structural: usize,
    settings: &SolverSettings,
) -> OptimizationResult {
    debug!("Phase two: {} rows, {} columns", tableau.nr_rows(), tableau.nr_columns());

    match iterate::<_, PR>(tableau, objective, settings.max_iterations) {
        IterationResult::Optimal => {
            let mut values = tableau.current_bfs();
            values.truncate(nr_structural);
            let objective_value = tableau.objective_function_value();
            debug!("Phase two: optimal, objective value {}", objective_value);

            OptimizationResult::FiniteOptimum(Solution::new(objective_value, values))
        },
        IterationResult::Unbounded => OptimizationResult::Unbounded,
        IterationResult::IterationLimit => OptimizationResult::IterationLimit,
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::OptimizationResult;
    use crate::algorithm::two_phase::phase_two::primal;
    use crate::algorithm::two_phase::settings::SolverSettings;
    use crate::algorithm::two_phase::strategy::pivot_rule::Bland;
    use crate::data::linear_program::elements::Objective;
    use crate::tests::problem_2;

    #[test]
    fn already_optimal() {
        let mut tableau = problem_2::tableau_form();
        let result = primal::<Bland>(&mut tableau, Objective::Minimize, 2, &SolverSettings::default());

        match result {
            OptimizationResult::FiniteOptimum(solution) => {
                assert_eq!(solution.values().len(), 2);
                assert_abs_diff_eq!(solution.values()[0], 2f64);
                assert_abs_diff_eq!(solution.values()[1], 1f64);
                assert_abs_diff_eq!(solution.objective_value(), 4f64);
            },
            other => panic!("Expected a finite optimum, got {:?}", other),
        }
    }

    #[test]
    fn simplex_maximize() {
        // Maximize x + 2y on x + y = 3, x - y <= 1: the slack enters and x leaves
        let mut tableau = problem_2::tableau_form();
        let result = primal::<Bland>(&mut tableau, Objective::Maximize, 2, &SolverSettings::default());

        match result {
            OptimizationResult::FiniteOptimum(solution) => {
                assert_abs_diff_eq!(solution.values()[0], 0f64);
                assert_abs_diff_eq!(solution.values()[1], 3f64);
                assert_abs_diff_eq!(solution.objective_value(), 6f64);
            },
            other => panic!("Expected a finite optimum, got {:?}", other),
        }
    }
}
