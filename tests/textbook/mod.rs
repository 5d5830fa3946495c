//! # Small linear programs with a known optimum
use approx::assert_abs_diff_eq;

use tableau_lp::algorithm::{OptimizationResult, Status};
use tableau_lp::algorithm::two_phase::settings::SolverSettings;
use tableau_lp::algorithm::two_phase::solve;
use tableau_lp::data::linear_program::general_form::LinearProgram;

use crate::init_logging;

fn optimum(program: &LinearProgram) -> (Vec<f64>, f64) {
    init_logging();

    match solve(program, &SolverSettings::default()) {
        OptimizationResult::FiniteOptimum(solution) => {
            assert!(program.is_feasible(solution.values(), 1e-9));
            assert_abs_diff_eq!(
                program.objective_value(solution.values()),
                solution.objective_value(),
                epsilon = 1e-9
            );
            (solution.values().to_vec(), solution.objective_value())
        },
        other => panic!("Expected a finite optimum, got {:?}", other),
    }
}

#[test]
fn minimize_on_facet() {
    let program = LinearProgram::from_codes(
        1,
        vec![1f64, 1f64],
        vec![vec![1f64, 1f64]],
        vec![4f64],
        &[-1],
    ).unwrap();

    let (x, f) = optimum(&program);
    assert_abs_diff_eq!(x[0] + x[1], 4f64, epsilon = 1e-6);
    assert_abs_diff_eq!(f, 4f64, epsilon = 1e-6);
}

#[test]
fn maximize_production() {
    // Maximize 3x + 5y subject to x <= 4, 2y <= 12 and 3x + 2y <= 18
    let program = LinearProgram::from_codes(
        -1,
        vec![3f64, 5f64],
        vec![vec![1f64, 0f64], vec![0f64, 2f64], vec![3f64, 2f64]],
        vec![4f64, 12f64, 18f64],
        &[1, 1, 1],
    ).unwrap();

    let (x, f) = optimum(&program);
    assert_abs_diff_eq!(x[0], 2f64, epsilon = 1e-6);
    assert_abs_diff_eq!(x[1], 6f64, epsilon = 1e-6);
    assert_abs_diff_eq!(f, 36f64, epsilon = 1e-6);
}

#[test]
fn mixed_constraints() {
    // Minimize x + 2y subject to -x - y = -3 and x - y <= 1
    let program = LinearProgram::from_codes(
        1,
        vec![1f64, 2f64],
        vec![vec![-1f64, -1f64], vec![1f64, -1f64]],
        vec![-3f64, 1f64],
        &[0, 1],
    ).unwrap();

    let (x, f) = optimum(&program);
    assert_abs_diff_eq!(x[0], 2f64, epsilon = 1e-6);
    assert_abs_diff_eq!(x[1], 1f64, epsilon = 1e-6);
    assert_abs_diff_eq!(f, 4f64, epsilon = 1e-6);
}

#[test]
fn dependent_equalities() {
    let program = LinearProgram::from_codes(
        1,
        vec![1f64, 0f64],
        vec![vec![1f64, 1f64], vec![2f64, 2f64]],
        vec![2f64, 4f64],
        &[0, 0],
    ).unwrap();

    let (x, f) = optimum(&program);
    assert_abs_diff_eq!(x[0], 0f64, epsilon = 1e-6);
    assert_abs_diff_eq!(x[1], 2f64, epsilon = 1e-6);
    assert_abs_diff_eq!(f, 0f64, epsilon = 1e-6);
}

#[test]
fn degenerate_without_cycling() {
    // Beale's example
    let program = LinearProgram::from_codes(
        -1,
        vec![0.75f64, -150f64, 0.02f64, -6f64],
        vec![
            vec![0.25f64, -60f64, -0.04f64, 9f64],
            vec![0.5f64, -90f64, -0.02f64, 3f64],
            vec![0f64, 0f64, 1f64, 0f64],
        ],
        vec![0f64, 0f64, 1f64],
        &[1, 1, 1],
    ).unwrap();

    let (x, f) = optimum(&program);
    assert_abs_diff_eq!(x[0], 0.04f64, epsilon = 1e-6);
    assert_abs_diff_eq!(x[1], 0f64, epsilon = 1e-6);
    assert_abs_diff_eq!(x[2], 1f64, epsilon = 1e-6);
    assert_abs_diff_eq!(x[3], 0f64, epsilon = 1e-6);
    assert_abs_diff_eq!(f, 0.05f64, epsilon = 1e-6);
}

#[test]
fn unbounded() {
    init_logging();

    let program = LinearProgram::from_codes(-1, vec![1f64], vec![vec![1f64]], vec![0f64], &[-1])
        .unwrap();
    let result = solve(&program, &SolverSettings::default());
    assert_eq!(result, OptimizationResult::Unbounded);
    assert_eq!(result.status().code(), 2);
}

#[test]
fn infeasible() {
    init_logging();

    let program = LinearProgram::from_codes(
        1,
        vec![1f64],
        vec![vec![1f64], vec![1f64]],
        vec![1f64, 2f64],
        &[1, -1],
    ).unwrap();
    let result = solve(&program, &SolverSettings::default());
    assert_eq!(result.status(), Status::Infeasible);
    assert_eq!(result.status().code(), 1);
}
