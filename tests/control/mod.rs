//! # The discretized minimum-acceleration problem
use approx::assert_abs_diff_eq;

use tableau_lp::algorithm::OptimizationResult;
use tableau_lp::algorithm::two_phase::settings::SolverSettings;
use tableau_lp::control::discretization::{Discretization, DiscretizationError, Profile};

use crate::init_logging;

fn profile(factor: usize) -> Profile {
    init_logging();

    let discretization = Discretization::with_factor(factor).unwrap();
    match discretization.solve(&SolverSettings::default()).unwrap() {
        OptimizationResult::FiniteOptimum(solution) => {
            Profile::from_solution(&discretization, &solution)
        },
        other => panic!("Expected a finite optimum, got {:?}", other),
    }
}

fn assert_boundary_conditions(profile: &Profile) {
    let last = profile.time.len() - 1;
    assert_abs_diff_eq!(profile.time[last], 10f64, epsilon = 1e-9);
    assert_abs_diff_eq!(profile.velocity[0], 0f64, epsilon = 1e-6);
    assert_abs_diff_eq!(profile.velocity[last], 0f64, epsilon = 1e-6);
    assert_abs_diff_eq!(profile.position[0], 0f64, epsilon = 1e-6);
    assert_abs_diff_eq!(profile.position[last], 1f64, epsilon = 1e-6);
    assert_eq!(profile.acceleration[last], 0f64);
}

#[test]
fn two_intervals() {
    let profile = profile(2);

    assert_boundary_conditions(&profile);
    assert_abs_diff_eq!(profile.acceleration[0], 0.04f64, epsilon = 1e-6);
    assert_abs_diff_eq!(profile.acceleration[1], -0.04f64, epsilon = 1e-6);
    assert_abs_diff_eq!(profile.velocity[1], 0.2f64, epsilon = 1e-6);
    assert_abs_diff_eq!(profile.position[1], 0f64, epsilon = 1e-6);
    assert_abs_diff_eq!(profile.total_absolute_acceleration, 0.08f64, epsilon = 1e-6);
}

#[test]
fn finer_discretizations() {
    for (factor, optimum) in [
        (4, 0.32f64 / 3f64),
        (10, 2f64 / 9f64),
        (20, 8f64 / 19f64),
    ] {
        let profile = profile(factor);

        assert_eq!(profile.time.len(), factor + 1);
        assert_boundary_conditions(&profile);
        assert_abs_diff_eq!(profile.total_absolute_acceleration, optimum, epsilon = 1e-6);
    }
}

#[test]
fn unreachable_distance() {
    init_logging();

    let discretization = Discretization::new(2, 10f64, -1f64).unwrap();
    let result = discretization.solve(&SolverSettings::default()).unwrap();
    assert_eq!(result, OptimizationResult::Infeasible);
}

#[test]
fn too_coarse() {
    assert_eq!(Discretization::with_factor(0), Err(DiscretizationError::Factor(0)));
    assert_eq!(Discretization::with_factor(1), Err(DiscretizationError::Factor(1)));
}
