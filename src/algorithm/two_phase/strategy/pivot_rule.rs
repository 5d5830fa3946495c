//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::is_negative;
use crate::data::linear_program::elements::Objective;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is currently made
/// independent of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau in a basic feasible solution state.
    /// * `objective`: Direction of optimization, which determines the sign of an improving
    /// relative cost.
    ///
    /// # Return value
    ///
    /// Index of a nonbasic column that improves the objective together with its relative cost, or
    /// `None` if the current basis is optimal.
    fn select_primal_pivot_column<K: Kind>(
        &mut self,
        tableau: &Tableau<K>,
        objective: Objective,
    ) -> Option<(usize, f64)>;
}

/// Bland's rule: pivot on the improving column with the lowest index.
///
/// Together with a ratio test that breaks ties consistently, this rule avoids cycling.
pub struct Bland;

impl PivotRule for Bland {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<K: Kind>(
        &mut self,
        tableau: &Tableau<K>,
        objective: Objective,
    ) -> Option<(usize, f64)> {
        let sign = objective.sign();

        // The nonbasic columns are not kept in any order
        tableau.basis().nonbasic().iter()
            .copied()
            .filter(|&j| is_negative(sign * tableau.relative_cost(j), tableau.epsilon()))
            .min()
            .map(|j| (j, tableau.relative_cost(j)))
    }
}
