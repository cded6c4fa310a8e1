//! Interval halving for single-variable minimization.
//!
//! # Algorithm
//!
//! Each iteration evaluates `f(a)`, `f(b)` and `f(c)` at the midpoint
//! `c = (a + b) / 2`, records them, and keeps one half of the interval. The
//! convergence metric is the width `|b - a|`, so the metric halves every
//! iteration. The approximation is the midpoint of the final interval.
//!
//! Which half survives is decided by a [`Rule`]:
//!
//! - [`Rule::EndpointComparison`] (default) keeps the half whose endpoint has
//!   the lower function value. This is a heuristic; it finds the minimizer of
//!   functions that are unimodal and roughly symmetric around it.
//! - [`Rule::QuarterPoints`] is the textbook three-point method, which also
//!   samples the quarter points `a + L/4` and `b - L/4`.
//!
//! The run stops once the configured [`Termination`] policy is met or the
//! iteration cap is reached.
//!
//! [`Termination`]: iterlab_core::Termination

mod config;
mod record;

#[cfg(test)]
mod tests;

pub use config::{Config, Rule};
pub use record::Record;

use iterlab_core::{Action, Function, Observer, Solution, Status, Trace};
use tracing::{debug, trace};

use crate::{error::ordered, evaluate::sample};

/// Errors returned by [`minimize`].
pub type Error = crate::Error<Record>;

/// Finds the minimizer of `f` on `interval` by interval halving.
///
/// The observer receives each [`Record`] as it is appended.
///
/// # Errors
///
/// Returns an error if a bound is non-finite, or if `f` fails or returns a
/// non-finite value at a sample point.
pub fn minimize<F, Obs>(
    f: &F,
    interval: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Record>, Error>
where
    F: Function,
    Obs: Observer<Record, Action>,
{
    let (mut a, mut b) = ordered(interval)?;
    let base = config.base();
    let mut trace = Trace::new();
    let mut tracker = base.termination().tracker();

    debug!(a, b, tolerance = base.tolerance(), rule = ?config.rule(), "interval halving started");

    for index in 0..base.max_iters() {
        let c = 0.5 * (a + b);
        let fa = sample(f, a, &mut trace)?;
        let fb = sample(f, b, &mut trace)?;
        let fc = sample(f, c, &mut trace)?;

        let record = Record::new(index, [a, b, c], [fa, fb, fc], base);
        trace!(index, a, b, fc, within = record.within_tolerance, "interval halving step");

        let action = observer.observe(&record);
        let stop = tracker.observe(record.within_tolerance);
        trace.push(record);

        if stop {
            debug!(iters = trace.len(), minimizer = c, "interval halving converged");
            return Ok(Solution {
                status: Status::Converged,
                approximation: c,
                trace,
            });
        }
        if action == Some(Action::StopEarly) {
            debug!(iters = trace.len(), "interval halving stopped by observer");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                approximation: c,
                trace,
            });
        }

        match config.rule() {
            Rule::EndpointComparison => {
                if fa < fb {
                    b = c;
                } else {
                    a = c;
                }
            }
            Rule::QuarterPoints => {
                let quarter = 0.25 * (b - a);
                let (x1, x2) = (a + quarter, b - quarter);
                let f1 = sample(f, x1, &mut trace)?;
                if f1 < fc {
                    b = c;
                } else {
                    let f2 = sample(f, x2, &mut trace)?;
                    if f2 < fc {
                        a = c;
                    } else {
                        a = x1;
                        b = x2;
                    }
                }
            }
        }
    }

    let minimizer = 0.5 * (a + b);
    debug!(iters = trace.len(), minimizer, "interval halving hit the iteration limit");
    Ok(Solution {
        status: Status::MaxIters,
        approximation: minimizer,
        trace,
    })
}

/// Runs interval halving without observation.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unobserved<F: Function>(
    f: &F,
    interval: [f64; 2],
    config: &Config,
) -> Result<Solution<Record>, Error> {
    minimize(f, interval, config, ())
}
