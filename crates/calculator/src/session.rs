use std::{fs, path::Path};

use iterlab_core::{Config, Termination};
use iterlab_solvers::{
    fixed_point::{self, DEFAULT_DAMPING},
    optimization::interval_halving::{self, Rule},
};
use serde::{Deserialize, Serialize};

use crate::{Error, Method};

/// Every input to one calculation.
///
/// Sessions are plain values: build one, optionally load it from TOML, and
/// hand it to [`calculate`](crate::calculate) by reference. Missing TOML keys
/// take the defaults below.
///
/// ```toml
/// function = "8*e^(1-x) + 7*log(x)"
/// method = "optimal"
/// a = 1.0
/// b = 2.0
/// tolerance = 0.0001
/// max_iters = 100
/// termination = { hysteresis = { required = 5 } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Session {
    /// Function of `x`, as text.
    pub function: String,

    pub method: Method,

    /// Left bound, or the initial guess `p0` for fixed-point iteration.
    pub a: f64,

    /// Right bound. Unused by fixed-point iteration.
    pub b: f64,

    pub tolerance: f64,
    pub max_iters: usize,
    pub termination: Termination,

    /// Damping `λ` of the fixed-point map `x - λ·f(x)`.
    pub damping: f64,

    /// Half-selection rule for interval halving.
    pub rule: Rule,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            function: "8*e^(1-x) + 7*log(x)".to_owned(),
            method: Method::default(),
            a: 1.0,
            b: 2.0,
            tolerance: 1e-4,
            max_iters: 100,
            termination: Termination::default(),
            damping: DEFAULT_DAMPING,
            rule: Rule::default(),
        }
    }
}

impl Session {
    /// Parses and validates a session from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid session.
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        let session: Self = toml::from_str(text)?;
        session.validate()?;
        Ok(session)
    }

    /// Reads a session file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid session.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Checks the settings without running anything.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty function, non-finite bounds, or invalid
    /// solver settings.
    pub fn validate(&self) -> Result<(), Error> {
        if self.function.trim().is_empty() {
            return Err(Error::Session("function is empty".to_owned()));
        }

        let bounds: &[f64] = if self.method.uses_interval() {
            &[self.a, self.b]
        } else {
            &[self.a]
        };
        if let Some(value) = bounds.iter().find(|v| !v.is_finite()) {
            return Err(Error::Session(format!("starting value {value} is not finite")));
        }

        if self.method == Method::FixedPoint {
            self.fixed_point_config()?;
        } else {
            self.config()?;
        }
        Ok(())
    }

    pub(crate) fn config(&self) -> Result<Config, Error> {
        Ok(Config::new(self.tolerance, self.max_iters)?.with_termination(self.termination)?)
    }

    pub(crate) fn interval_halving_config(&self) -> Result<interval_halving::Config, Error> {
        Ok(interval_halving::Config::new(self.config()?).with_rule(self.rule))
    }

    pub(crate) fn fixed_point_config(&self) -> Result<fixed_point::Config, Error> {
        Ok(fixed_point::Config::new(self.config()?, self.damping)?)
    }
}
