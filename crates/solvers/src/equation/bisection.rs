//! Bisection root finding.
//!
//! # Algorithm
//!
//! Bisection starts from an interval `[a, b]` where `f(a)` and `f(b)` differ
//! in sign (or one is zero) and repeatedly evaluates the midpoint
//! `c = (a + b) / 2`. The half that still brackets the root becomes the next
//! interval. The convergence metric is `|f(c)|`.
//!
//! A record is appended on every iteration, including the ones that satisfy
//! the tolerance. The run stops once the configured [`Termination`] policy is
//! met or the iteration cap is reached. The approximation is the last midpoint.
//!
//! When `f(c)` is exactly zero the interval collapses onto `c` from the right,
//! so an exact root found on the way is never thrown away.
//!
//! [`Termination`]: iterlab_core::Termination

mod record;


pub use record::Record;

use iterlab_core::{Action, Config, Function, Observer, Solution, Status, Trace};
use tracing::{debug, trace};

use crate::{error::ordered, evaluate::sample};

/// Errors returned by [`find_root`].
pub type Error = crate::Error<Record>;

/// Finds a root of `f` in `interval` using bisection.
///
/// The observer receives each [`Record`] as it is appended.
///
/// After each midpoint `c`, the interval becomes `[a, c]` when `f(a)` and
/// `f(c)` change sign or either is zero, and `[c, b]` otherwise. Sending a
/// zero to the left half keeps an exact root at `c` inside the bracket.
///
/// # Errors
///
/// Returns an error if a bound is non-finite, if `f(a)` and `f(b)` have the
/// same sign, or if `f` fails or returns a non-finite value at a sample point.
pub fn find_root<F, Obs>(
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
    let mut trace = Trace::new();

    let mut fa = sample(f, a, &mut trace)?;
    let fb = sample(f, b, &mut trace)?;
    if !changes_sign(fa, fb) {
        return Err(Error::InvalidInterval { a, b, fa, fb });
    }

    debug!(a, b, tolerance = config.tolerance(), "bisection started");

    let mut tracker = config.termination().tracker();
    let mut c = 0.5 * (a + b);

    for index in 0..config.max_iters() {
        c = 0.5 * (a + b);
        let fc = sample(f, c, &mut trace)?;

        let record = Record::new(index, a, b, c, fc, config);
        trace!(index, c, fc, within = record.within_tolerance, "bisection step");

        let action = observer.observe(&record);
        let stop = tracker.observe(record.within_tolerance);
        trace.push(record);

        if stop {
            debug!(iters = trace.len(), root = c, "bisection converged");
            return Ok(Solution {
                status: Status::Converged,
                approximation: c,
                trace,
            });
        }
        if action == Some(Action::StopEarly) {
            debug!(iters = trace.len(), "bisection stopped by observer");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                approximation: c,
                trace,
            });
        }

        if changes_sign(fa, fc) {
            b = c;
        } else {
            a = c;
            fa = fc;
        }
    }

    debug!(iters = trace.len(), root = c, "bisection hit the iteration limit");
    Ok(Solution {
        status: Status::MaxIters,
        approximation: c,
        trace,
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`find_root`].
pub fn find_root_unobserved<F: Function>(
    f: &F,
    interval: [f64; 2],
    config: &Config,
) -> Result<Solution<Record>, Error> {
    find_root(f, interval, config, ())
}

/// Returns `true` when `fa` and `fb` differ in sign or either one is zero.
///
/// Signs are compared directly, so tiny values never underflow a product.
#[must_use]
pub fn changes_sign(fa: f64, fb: f64) -> bool {
    fa == 0.0 || fb == 0.0 || (fa < 0.0) != (fb < 0.0)
}
