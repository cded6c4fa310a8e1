use std::{error::Error as StdError, io, path::PathBuf};

use iterlab_core::ConfigError;
use iterlab_expr::ParseError;
use iterlab_solvers::{EvalError, fixed_point};
use thiserror::Error;

use crate::Method;

/// Errors returned by the calculator.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read session file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid session file")]
    Toml(#[from] toml::de::Error),

    #[error("invalid session: {0}")]
    Session(String),

    #[error("invalid solver settings")]
    Config(#[from] ConfigError),

    #[error("invalid fixed-point settings")]
    FixedPoint(#[from] fixed_point::ConfigError),

    #[error("invalid function")]
    Parse(#[from] ParseError),

    #[error("cannot evaluate the function at the interval end x = {x}")]
    Probe {
        x: f64,
        #[source]
        source: EvalError,
    },

    #[error("{method} failed")]
    Solve {
        method: Method,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn solve<E>(method: Method, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Solve {
            method,
            source: Box::new(source),
        }
    }
}
