//! Fixed-point iteration for root finding.
//!
//! # Algorithm
//!
//! The caller supplies `f` as a root-finding problem `f(x) = 0`. The solver
//! turns it into the damped map
//!
//! ```text
//! g(x) = x - λ·f(x)
//! ```
//!
//! whose fixed points are the roots of `f`, and iterates `p ← g(p)` from the
//! initial guess. The convergence metric is `|g(p) - p|`. The run stops once
//! the configured [`Termination`] policy is met or the iteration cap is
//! reached. The approximation is the most recently accepted iterate: on a
//! policy stop that is the `p` of the final record, otherwise the last `g(p)`.
//!
//! # Limitations
//!
//! The damping `λ` (0.1 by default) is a heuristic. The map only contracts
//! near a root where `|1 - λ·f'(x)| < 1`, so the iteration can diverge or
//! oscillate for other functions and starting points.
//!
//! [`Termination`]: iterlab_core::Termination

mod config;
mod damped;
mod record;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError, DEFAULT_DAMPING};
pub use damped::Damped;
pub use record::Record;

use iterlab_core::{Action, Function, Observer, Status, Trace};
use tracing::{debug, trace};

use crate::evaluate::sample;

/// Errors returned by [`iterate`].
pub type Error = crate::Error<Record>;

/// The result of a fixed-point run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The most recently accepted iterate.
    pub approximation: f64,

    /// Every iteration the solver recorded, in order.
    pub trace: Trace<Record>,

    /// Text of the synthesized map, e.g. `x - 0.1*(x^2 - 4)`.
    pub iteration_function: String,
}

impl Solution {
    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.trace.len()
    }

    /// Returns true if the run ended because the termination policy was met.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

/// Iterates the damped map of `f` starting from `p0`.
///
/// The observer receives each [`Record`] as it is appended.
///
/// # Errors
///
/// Returns an error if `p0` is non-finite, or if `f` fails or `g(p)` is
/// non-finite at an iterate.
pub fn iterate<F, Obs>(
    f: &F,
    p0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Record, Action>,
{
    if !p0.is_finite() {
        return Err(Error::NonFiniteBound { value: p0 });
    }

    let base = config.base();
    let g = Damped::new(f, config.damping());
    let iteration_function = g.describe();
    let mut trace = Trace::new();
    let mut tracker = base.termination().tracker();
    let mut p = p0;

    debug!(p0, map = %iteration_function, tolerance = base.tolerance(), "fixed-point iteration started");

    for index in 0..base.max_iters() {
        let p_next = sample(&g, p, &mut trace)?;

        let record = Record::new(index, p, p_next, base);
        trace!(index, p, p_next, within = record.within_tolerance, "fixed-point step");

        let action = observer.observe(&record);
        let stop = tracker.observe(record.within_tolerance);
        trace.push(record);

        if stop {
            debug!(iters = trace.len(), fixed_point = p, "fixed-point iteration converged");
            return Ok(Solution {
                status: Status::Converged,
                approximation: p,
                trace,
                iteration_function,
            });
        }

        p = p_next;

        if action == Some(Action::StopEarly) {
            debug!(iters = trace.len(), "fixed-point iteration stopped by observer");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                approximation: p,
                trace,
                iteration_function,
            });
        }
    }

    debug!(iters = trace.len(), fixed_point = p, "fixed-point iteration hit the iteration limit");
    Ok(Solution {
        status: Status::MaxIters,
        approximation: p,
        trace,
        iteration_function,
    })
}

/// Runs fixed-point iteration without observation.
///
/// # Errors
///
/// See [`iterate`].
pub fn iterate_unobserved<F: Function>(f: &F, p0: f64, config: &Config) -> Result<Solution, Error> {
    iterate(f, p0, config, ())
}
