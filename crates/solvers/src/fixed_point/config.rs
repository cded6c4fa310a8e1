use thiserror::Error;

/// Damping `λ` used when none is configured.
pub const DEFAULT_DAMPING: f64 = 0.1;

/// Errors that can occur when validating a fixed-point config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("damping must be finite and positive, got {0}")]
    Damping(f64),
}

/// Configuration for the fixed-point solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    base: iterlab_core::Config,
    damping: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self::from(iterlab_core::Config::default())
    }
}

impl Config {
    /// Creates a config with an explicit damping `λ`.
    ///
    /// # Errors
    ///
    /// Returns an error if `damping` is non-finite or not positive.
    pub fn new(base: iterlab_core::Config, damping: f64) -> Result<Self, ConfigError> {
        if !damping.is_finite() || damping <= 0.0 {
            return Err(ConfigError::Damping(damping));
        }
        Ok(Self { base, damping })
    }

    /// Returns the shared tolerance, iteration cap, and termination policy.
    #[must_use]
    pub fn base(&self) -> &iterlab_core::Config {
        &self.base
    }

    /// Returns the damping `λ` in `g(x) = x - λ·f(x)`.
    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }
}

impl From<iterlab_core::Config> for Config {
    fn from(base: iterlab_core::Config) -> Self {
        Self {
            base,
            damping: DEFAULT_DAMPING,
        }
    }
}
