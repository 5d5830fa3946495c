//! # Discretized minimum-acceleration problem
//!
//! A vehicle starts at rest at position `0` and has to be at rest at position `distance` after
//! `duration` time units. Time is divided in `factor` intervals of length `p`, on which the
//! acceleration is constant. The total absolute acceleration is minimized.
//!
//! The acceleration is free in sign, so it is split in a positive and a negative part. Its
//! absolute value is bounded from above by an auxiliary variable, whose sum is minimized.
use std::fmt::{Display, Formatter, Result as FormatResult};

use thiserror::Error;

use crate::algorithm::OptimizationResult;
use crate::algorithm::two_phase::settings::SolverSettings;
use crate::algorithm::two_phase::solve;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::error::LinearProgramError;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::Solution;

/// Length of the time horizon unless specified otherwise.
pub const DEFAULT_DURATION: f64 = 10f64;
/// Distance to travel unless specified otherwise.
pub const DEFAULT_DISTANCE: f64 = 1f64;
/// Smallest number of intervals.
pub const MIN_FACTOR: usize = 2;

/// The parameters could not be turned into a linear program.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiscretizationError {
    /// Too few time intervals.
    #[error("discretization factor must be at least 2, got {0}")]
    Factor(usize),
    /// The time horizon is not a positive number.
    #[error("duration must be positive and finite, got {0}")]
    Duration(f64),
    /// The distance is not a number.
    #[error("distance must be finite, got {0}")]
    Distance(f64),
    /// The resulting linear program is malformed.
    #[error(transparent)]
    LinearProgram(#[from] LinearProgramError),
}

/// Division of the time horizon in intervals.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Discretization {
    /// Number of intervals, `d`.
    factor: usize,
    /// Length of the time horizon, `T`.
    duration: f64,
    /// Position at the end of the time horizon, `X`.
    distance: f64,
}

impl Discretization {
    /// Create a new discretization.
    ///
    /// # Arguments
    ///
    /// * `factor`: Number of intervals, at least `2`.
    /// * `duration`: Length of the time horizon, positive.
    /// * `distance`: Position at the end of the time horizon. A negative value makes the problem
    /// infeasible, as positions are nonnegative.
    pub fn new(factor: usize, duration: f64, distance: f64) -> Result<Self, DiscretizationError> {
        if factor < MIN_FACTOR {
            return Err(DiscretizationError::Factor(factor));
        }
        if !(duration.is_finite() && duration > 0f64) {
            return Err(DiscretizationError::Duration(duration));
        }
        if !distance.is_finite() {
            return Err(DiscretizationError::Distance(distance));
        }

        Ok(Self { factor, duration, distance })
    }

    /// Discretization with the default duration and distance.
    pub fn with_factor(factor: usize) -> Result<Self, DiscretizationError> {
        Self::new(factor, DEFAULT_DURATION, DEFAULT_DISTANCE)
    }

    /// Length of a time interval.
    pub fn step(&self) -> f64 {
        self.duration / self.factor as f64
    }

    /// Number of intervals.
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Variable index of the positive part of the acceleration on interval `i`.
    pub fn positive_acceleration(&self, i: usize) -> usize {
        debug_assert!(i < self.factor);

        2 * i
    }

    /// Variable index of the negative part of the acceleration on interval `i`.
    pub fn negative_acceleration(&self, i: usize) -> usize {
        debug_assert!(i < self.factor);

        2 * i + 1
    }

    /// Variable index of the velocity at grid point `i`.
    pub fn velocity(&self, i: usize) -> usize {
        debug_assert!(i <= self.factor);

        2 * self.factor + i
    }

    /// Variable index of the position at grid point `i`.
    pub fn position(&self, i: usize) -> usize {
        debug_assert!(i <= self.factor);

        3 * self.factor + 1 + i
    }

    /// Variable index of the bound on the absolute acceleration on interval `i`.
    pub fn absolute_acceleration(&self, i: usize) -> usize {
        debug_assert!(i < self.factor);

        4 * self.factor + 2 + i
    }

    /// Number of variables, `5d + 2`.
    pub fn nr_variables(&self) -> usize {
        5 * self.factor + 2
    }

    /// Number of constraints, `4d + 4`.
    pub fn nr_constraints(&self) -> usize {
        4 * self.factor + 4
    }

    /// Build the linear program.
    ///
    /// For each interval `i` there are two kinematic equalities,
    ///
    /// * `p a_i + v_i - v_{i+1} = 0`
    /// * `-p^2 a_i + p v_{i+1} + x_i - x_{i+1} = 0`
    ///
    /// and two inequalities that make `y_i` at least `|a_i|`. Finally, the velocity is zero at both
    /// ends, the position starts at zero and ends at the distance.
    pub fn linear_program(&self) -> Result<LinearProgram, DiscretizationError> {
        let d = self.factor;
        let p = self.step();
        let mut constraints = DenseMatrix::zeros(self.nr_constraints(), self.nr_variables());

        for i in 0..d {
            let (plus, minus) = (self.positive_acceleration(i), self.negative_acceleration(i));

            // Velocity
            constraints[(2 * i, plus)] = p;
            constraints[(2 * i, minus)] = -p;
            constraints[(2 * i, self.velocity(i))] = 1f64;
            constraints[(2 * i, self.velocity(i + 1))] = -1f64;

            // Position
            constraints[(2 * i + 1, plus)] = -p * p;
            constraints[(2 * i + 1, minus)] = p * p;
            constraints[(2 * i + 1, self.velocity(i + 1))] = p;
            constraints[(2 * i + 1, self.position(i))] = 1f64;
            constraints[(2 * i + 1, self.position(i + 1))] = -1f64;

            // Absolute value
            constraints[(2 * d + 2 * i, plus)] = -1f64;
            constraints[(2 * d + 2 * i, minus)] = 1f64;
            constraints[(2 * d + 2 * i, self.absolute_acceleration(i))] = 1f64;
            constraints[(2 * d + 2 * i + 1, plus)] = 1f64;
            constraints[(2 * d + 2 * i + 1, minus)] = -1f64;
            constraints[(2 * d + 2 * i + 1, self.absolute_acceleration(i))] = 1f64;
        }

        // Boundary conditions
        constraints[(4 * d, self.velocity(0))] = 1f64;
        constraints[(4 * d + 1, self.velocity(d))] = 1f64;
        constraints[(4 * d + 2, self.position(0))] = 1f64;
        constraints[(4 * d + 3, self.position(d))] = 1f64;

        let mut b = vec![0f64; self.nr_constraints()];
        b[4 * d + 3] = self.distance;

        let constraint_types = (0..self.nr_constraints())
            .map(|i| if (2 * d..4 * d).contains(&i) {
                ConstraintType::Greater
            } else {
                ConstraintType::Equal
            })
            .collect();

        let mut cost = vec![0f64; self.nr_variables()];
        for i in 0..d {
            cost[self.absolute_acceleration(i)] = 1f64;
        }

        let program = LinearProgram::new(
            Objective::Minimize,
            cost,
            constraints.into_rows(),
            b,
            constraint_types,
        )?;

        Ok(program)
    }

    /// Build and solve the linear program.
    ///
    /// Use `Profile::from_solution` to read the result in case of a finite optimum.
    pub fn solve(&self, settings: &SolverSettings) -> Result<OptimizationResult, DiscretizationError> {
        let program = self.linear_program()?;

        Ok(solve(&program, settings))
    }
}

/// Acceleration, velocity and position over time.
///
/// All vectors have a value for each of the `d + 1` grid points.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    /// Start of each interval, and the end of the time horizon.
    pub time: Vec<f64>,
    /// Acceleration on the interval starting at each grid point; zero at the last point.
    pub acceleration: Vec<f64>,
    /// Velocity at each grid point.
    pub velocity: Vec<f64>,
    /// Position at each grid point.
    pub position: Vec<f64>,
    /// Sum of the absolute accelerations.
    pub total_absolute_acceleration: f64,
}

impl Profile {
    /// Read the profile from a solution of `discretization.linear_program()`.
    pub fn from_solution(discretization: &Discretization, solution: &Solution) -> Self {
        let d = discretization.factor;
        let p = discretization.step();
        let values = solution.values();
        debug_assert_eq!(values.len(), discretization.nr_variables());

        let time = (0..=d).map(|i| i as f64 * p).collect();
        let acceleration = (0..=d)
            .map(|i| if i < d {
                values[discretization.positive_acceleration(i)]
                    - values[discretization.negative_acceleration(i)]
            } else {
                0f64
            })
            .collect::<Vec<_>>();
        let velocity = (0..=d).map(|i| values[discretization.velocity(i)]).collect();
        let position = (0..=d).map(|i| values[discretization.position(i)]).collect();
        let total_absolute_acceleration = acceleration.iter().map(|a| a.abs()).sum();

        Self { time, acceleration, velocity, position, total_absolute_acceleration }
    }
}

/// Tab separated, one line per grid point, followed by the total absolute acceleration.
impl Display for Profile {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "t\ta(t)\tv(t)\tx(t)")?;
        for i in 0..self.time.len() {
            writeln!(
                f,
                "{:.2}\t{:.6}\t{:.6}\t{:.6}",
                self.time[i], self.acceleration[i], self.velocity[i], self.position[i],
            )?;
        }
        writeln!(f, "sum |a(t)|\t{:.6}", self.total_absolute_acceleration)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::OptimizationResult;
    use crate::algorithm::two_phase::settings::SolverSettings;
    use crate::control::discretization::{Discretization, DiscretizationError, Profile};
    use crate::data::linear_program::elements::ConstraintType;

    fn assert_all_close(found: &[f64], expected: &[f64]) {
        assert_eq!(found.len(), expected.len());
        for (found, expected) in found.iter().zip(expected) {
            assert_abs_diff_eq!(found, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn parameters() {
        assert_eq!(Discretization::with_factor(1), Err(DiscretizationError::Factor(1)));
        assert_eq!(
            Discretization::new(4, 0f64, 1f64),
            Err(DiscretizationError::Duration(0f64)),
        );
        assert!(matches!(
            Discretization::new(4, 1f64, f64::NAN),
            Err(DiscretizationError::Distance(_))
        ));

        let discretization = Discretization::with_factor(4).unwrap();
        assert_eq!(discretization.step(), 2.5f64);
        assert_eq!(discretization.nr_variables(), 22);
        assert_eq!(discretization.nr_constraints(), 20);
    }

    #[test]
    fn variable_indices() {
        let discretization = Discretization::with_factor(3).unwrap();
        assert_eq!(discretization.positive_acceleration(2), 4);
        assert_eq!(discretization.negative_acceleration(2), 5);
        assert_eq!(discretization.velocity(0), 6);
        assert_eq!(discretization.velocity(3), 9);
        assert_eq!(discretization.position(0), 10);
        assert_eq!(discretization.position(3), 13);
        assert_eq!(discretization.absolute_acceleration(0), 14);
        assert_eq!(discretization.absolute_acceleration(2), 16);
        assert_eq!(discretization.nr_variables(), 17);
    }

    #[test]
    fn linear_program() {
        let discretization = Discretization::with_factor(2).unwrap();
        let program = discretization.linear_program().unwrap();

        assert_eq!(program.nr_variables(), 12);
        assert_eq!(program.nr_constraints(), 12);
        assert_eq!(program.b()[11], 1f64);
        assert_eq!(program.cost()[10..], [1f64, 1f64]);
        assert_eq!(program.constraint_types()[4], ConstraintType::Greater);
        assert_eq!(program.constraint_types()[8], ConstraintType::Equal);

        // p a_0 - p a_0' + v_0 - v_1 = 0
        assert_eq!(&program.constraints().row(0)[..6], &[5f64, -5f64, 0f64, 0f64, 1f64, -1f64]);
        // -p^2 a_1 + p^2 a_1' + p v_2 + x_1 - x_2 = 0
        assert_eq!(
            program.constraints().row(3),
            &[0f64, 0f64, -25f64, 25f64, 0f64, 0f64, 5f64, 0f64, 1f64, -1f64, 0f64, 0f64],
        );
    }

    #[test]
    fn two_intervals() {
        let discretization = Discretization::with_factor(2).unwrap();
        let result = discretization.solve(&SolverSettings::default()).unwrap();
        let profile = Profile::from_solution(&discretization, result.solution().unwrap());

        assert_all_close(&profile.time, &[0f64, 5f64, 10f64]);
        assert_all_close(&profile.acceleration, &[0.04f64, -0.04f64, 0f64]);
        assert_all_close(&profile.velocity, &[0f64, 0.2f64, 0f64]);
        assert_all_close(&profile.position, &[0f64, 0f64, 1f64]);
        assert_abs_diff_eq!(profile.total_absolute_acceleration, 0.08f64, epsilon = 1e-6);
    }

    #[test]
    fn three_intervals() {
        let discretization = Discretization::with_factor(3).unwrap();
        let result = discretization.solve(&SolverSettings::default()).unwrap();
        let profile = Profile::from_solution(&discretization, result.solution().unwrap());

        assert_all_close(&profile.acceleration, &[0.045f64, 0f64, -0.045f64, 0f64]);
        assert_all_close(&profile.velocity, &[0f64, 0.15f64, 0.15f64, 0f64]);
        assert_all_close(&profile.position, &[0f64, 0f64, 0.5f64, 1f64]);
        assert_abs_diff_eq!(profile.total_absolute_acceleration, 0.09f64, epsilon = 1e-6);
    }

    #[test]
    fn negative_distance() {
        let discretization = Discretization::new(2, 10f64, -1f64).unwrap();
        let result = discretization.solve(&SolverSettings::default()).unwrap();
        assert_eq!(result, OptimizationResult::Infeasible);
    }

    #[test]
    fn report() {
        let profile = Profile {
            time: vec![0f64, 5f64, 10f64],
            acceleration: vec![0.04f64, -0.04f64, 0f64],
            velocity: vec![0f64, 0.2f64, 0f64],
            position: vec![0f64, 0f64, 1f64],
            total_absolute_acceleration: 0.08f64,
        };
        assert_eq!(
            profile.to_string(),
            "t\ta(t)\tv(t)\tx(t)\n\
             0.00\t0.040000\t0.000000\t0.000000\n\
             5.00\t-0.040000\t0.200000\t0.000000\n\
             10.00\t0.000000\t0.000000\t1.000000\n\
             sum |a(t)|\t0.080000\n",
        );
    }
}
