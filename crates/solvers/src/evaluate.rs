use std::error::Error as StdError;

use thiserror::Error;

use iterlab_core::{Function, Trace};

use crate::Error;

/// Errors that can occur when sampling a function.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The function itself failed (parse, domain, or division error).
    #[error("failed to evaluate f({x})")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The function returned NaN or an infinity.
    #[error("f({x}) is not finite: {value}")]
    NonFinite { x: f64, value: f64 },
}

/// Evaluates `f` at `x`, rejecting non-finite results.
///
/// # Errors
///
/// Returns an error if the function fails or produces a non-finite value.
pub fn evaluate<F: Function>(f: &F, x: f64) -> Result<f64, EvalError> {
    let value = f.call(x).map_err(|e| EvalError::Function {
        x,
        source: Box::new(e),
    })?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { x, value })
    }
}

/// Evaluates `f` at `x` inside a run.
///
/// On failure the trace accumulated so far moves into the returned error.
pub(crate) fn sample<F: Function, R>(f: &F, x: f64, trace: &mut Trace<R>) -> Result<f64, Error<R>> {
    evaluate(f, x).map_err(|source| Error::Evaluation {
        source,
        trace: std::mem::take(trace),
    })
}
