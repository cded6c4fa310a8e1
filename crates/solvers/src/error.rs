use thiserror::Error;

use iterlab_core::{ConfigError, Trace};

use crate::EvalError;

/// Errors that can occur during a solver run.
///
/// `R` is the solver's record type. An evaluation failure carries the trace
/// recorded before the failing sample, which is empty when the failure happens
/// while probing the interval endpoints.
#[derive(Debug, Error)]
pub enum Error<R> {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("non-finite starting value: {value}")]
    NonFiniteBound { value: f64 },

    #[error("f(a) and f(b) must have opposite signs: f({a}) = {fa}, f({b}) = {fb}")]
    InvalidInterval { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("evaluation failed: {source}")]
    Evaluation {
        #[source]
        source: EvalError,
        trace: Trace<R>,
    },
}

impl<R> Error<R> {
    /// Returns the partial trace of a failed evaluation, if any.
    #[must_use]
    pub fn trace(&self) -> Option<&Trace<R>> {
        match self {
            Self::Evaluation { trace, .. } => Some(trace),
            _ => None,
        }
    }
}

/// Validates interval bounds and returns them in `(left, right)` order.
pub(crate) fn ordered<R>(interval: [f64; 2]) -> Result<(f64, f64), Error<R>> {
    let [a, b] = interval;

    for value in [a, b] {
        if !value.is_finite() {
            return Err(Error::NonFiniteBound { value });
        }
    }

    if a <= b { Ok((a, b)) } else { Ok((b, a)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_swaps_reversed_bounds() {
        let (a, b) = ordered::<()>([3.0, 1.0]).unwrap();
        assert_eq!((a, b), (1.0, 3.0));
    }

    #[test]
    fn ordered_rejects_non_finite() {
        assert!(matches!(
            ordered::<()>([f64::NAN, 1.0]),
            Err(Error::NonFiniteBound { .. })
        ));
        assert!(matches!(
            ordered::<()>([0.0, f64::NEG_INFINITY]),
            Err(Error::NonFiniteBound { .. })
        ));
    }
}
