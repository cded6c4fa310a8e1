use thiserror::Error;

use crate::Termination;

/// Tolerance, iteration cap, and termination policy shared by the solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
    termination: Termination,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("hysteresis must require at least one within-tolerance observation")]
    Hysteresis,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iters: 100,
            termination: Termination::default(),
        }
    }
}

impl Config {
    /// Creates a new config using the default [`Termination`] policy.
    ///
    /// A `max_iters` of zero is allowed and produces an empty trace.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is non-finite or not positive.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            tolerance,
            max_iters,
            termination: Termination::default(),
        })
    }

    /// Returns a copy of this config with a different termination policy.
    ///
    /// # Errors
    ///
    /// Returns an error if a hysteresis policy requires zero observations.
    pub fn with_termination(self, termination: Termination) -> Result<Self, ConfigError> {
        if termination.required() == 0 {
            return Err(ConfigError::Hysteresis);
        }

        Ok(Self {
            termination,
            ..self
        })
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of recorded iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the termination policy.
    #[must_use]
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Returns true if `metric` is strictly below the tolerance.
    #[must_use]
    pub fn is_within(&self, metric: f64) -> bool {
        metric < self.tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(0.0, 10), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(-1e-3, 10), Err(ConfigError::Tolerance));
        assert_eq!(Config::new(f64::NAN, 10), Err(ConfigError::Tolerance));
    }

    #[test]
    fn rejects_zero_hysteresis() {
        let config = Config::new(1e-6, 10).unwrap();
        let result = config.with_termination(Termination::Hysteresis { required: 0 });
        assert_eq!(result, Err(ConfigError::Hysteresis));
    }

    #[test]
    fn within_is_strict() {
        let config = Config::new(0.5, 10).unwrap();
        assert!(config.is_within(0.49));
        assert!(!config.is_within(0.5));
    }

    #[test]
    fn termination_is_replaced() {
        let config = Config::default()
            .with_termination(Termination::FirstWithin)
            .unwrap();
        assert_eq!(config.termination(), Termination::FirstWithin);
        assert_eq!(config.max_iters(), 100);
    }
}
