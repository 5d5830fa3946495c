//! Two equalities of which the second is twice the first.
//!
//! Minimize `x` subject to `x + y = 2` and `2x + 2y = 4`, with optimum `(0, 2)`.
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::general_form::LinearProgram;

pub fn linear_program() -> LinearProgram {
    LinearProgram::new(
        Objective::Minimize,
        vec![1f64, 0f64],
        vec![
            vec![1f64, 1f64],
            vec![2f64, 2f64],
        ],
        vec![2f64, 4f64],
        vec![ConstraintType::Equal, ConstraintType::Equal],
    ).unwrap()
}
