//! # Solver settings
//!
//! Tolerance and iteration limit used by the two-phase method. Settings are created through the
//! generated `SolverSettingsBuilder`, which checks the values before building.
use derive_builder::Builder;
use thiserror::Error;

use crate::data::linear_algebra::EPSILON;

/// Iteration limit per phase unless configured otherwise.
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Settings for the two-phase Simplex method.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct SolverSettings {
    /// Values with an absolute value up to this threshold are treated as zero.
    ///
    /// The threshold is absolute, also for the sum of the artificial variables that decides
    /// feasibility. Round-off grows with the magnitude of the data, so programs with coefficients
    /// or right hand sides far above `1` need a larger value.
    #[builder(default = "EPSILON")]
    pub epsilon: f64,

    /// Maximum number of pivots in each of the two phases.
    #[builder(default = "DEFAULT_MAX_ITERATIONS")]
    pub max_iterations: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Error type returned by settings validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// A field has a value outside of its domain.
    #[error("bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

impl From<SettingsError> for SolverSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        SolverSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl SolverSettingsBuilder {
    /// Check that the specified values are usable.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(epsilon) = self.epsilon {
            if !(epsilon.is_finite() && epsilon > 0f64) {
                return Err(SettingsError::BadFieldValue("epsilon"));
            }
        }
        if let Some(max_iterations) = self.max_iterations {
            if max_iterations == 0 {
                return Err(SettingsError::BadFieldValue("max_iterations"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::settings::{SettingsError, SolverSettings, SolverSettingsBuilder};
    use crate::data::linear_algebra::EPSILON;

    #[test]
    fn defaults() {
        let built = SolverSettingsBuilder::default().build().unwrap();
        assert_eq!(built, SolverSettings::default());
        assert_eq!(built.epsilon, EPSILON);
        assert_eq!(built.max_iterations, 100_000);
    }

    #[test]
    fn custom() {
        let settings = SolverSettingsBuilder::default()
            .epsilon(1e-9)
            .max_iterations(10)
            .build()
            .unwrap();
        assert_eq!(settings.epsilon, 1e-9);
        assert_eq!(settings.max_iterations, 10);
    }

    #[test]
    fn invalid() {
        let mut builder = SolverSettingsBuilder::default();
        builder.epsilon(-1f64);
        assert_eq!(builder.validate(), Err(SettingsError::BadFieldValue("epsilon")));
        assert!(builder.build().is_err());

        assert!(SolverSettingsBuilder::default().epsilon(f64::NAN).build().is_err());
        assert!(SolverSettingsBuilder::default().max_iterations(0).build().is_err());
    }
}
