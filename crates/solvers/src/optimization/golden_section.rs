//! Golden section search for single-variable minimization.
//!
//! # Algorithm
//!
//! Golden section search maintains an interval `[a, b]` and two interior
//! points placed by the golden ratio:
//!
//! ```text
//! a' = a + ρ(b - a)        b' = a + (1 - ρ)(b - a)        ρ = (3 - √5) / 2
//! ```
//!
//! If `f(a') < f(b')` the minimizer lies in `[a, b']`, otherwise in `[a', b]`.
//! Both interior points are evaluated afresh every iteration.
//!
//! # Termination
//!
//! Unlike the other solvers, the width test runs *before* each iteration:
//! the loop continues while `|b - a| > tol` and the cap is not reached. The
//! iteration that would start with a small enough interval is never recorded,
//! and the [`Termination`] policy in the config is not consulted. The status
//! is [`Status::Converged`] when the loop ends on width.
//!
//! The approximation is the midpoint of the final interval.
//!
//! # Limitations
//!
//! - **Unimodal assumption**: may settle on a local minimum if `f` has several
//! - **Derivative-free**: slower than gradient-based methods
//!
//! [`Termination`]: iterlab_core::Termination

mod record;
mod section;


pub use record::Record;
pub use section::{INV_PHI, PHI, RHO};

use iterlab_core::{Action, Config, Function, Observer, Solution, Status, Trace};
use tracing::{debug, trace};

use crate::{error::ordered, evaluate::sample};

use section::Section;

/// Errors returned by [`minimize`].
pub type Error = crate::Error<Record>;

/// Finds the minimizer of `f` on `interval` using golden section search.
///
/// The observer receives each [`Record`] as it is appended.
///
/// # Errors
///
/// Returns an error if a bound is non-finite, or if `f` fails or returns a
/// non-finite value at an interior point.
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
    let (a, b) = ordered(interval)?;
    let mut section = Section::new(a, b);
    let mut trace = Trace::new();

    debug!(a, b, tolerance = config.tolerance(), "golden section started");

    while trace.len() < config.max_iters() && section.width() > config.tolerance() {
        let fa1 = sample(f, section.inner_left, &mut trace)?;
        let fb1 = sample(f, section.inner_right, &mut trace)?;

        let record = Record::new(trace.next_index(), &section, fa1, fb1, config);
        trace!(
            index = record.index,
            width = section.width(),
            fa1,
            fb1,
            "golden section step"
        );

        let action = observer.observe(&record);
        trace.push(record);

        if fa1 < fb1 {
            section.shrink_right();
        } else {
            section.shrink_left();
        }

        if action == Some(Action::StopEarly) {
            debug!(iters = trace.len(), "golden section stopped by observer");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                approximation: section.midpoint(),
                trace,
            });
        }
    }

    let status = if section.width() > config.tolerance() {
        Status::MaxIters
    } else {
        Status::Converged
    };
    debug!(iters = trace.len(), minimizer = section.midpoint(), ?status, "golden section finished");

    Ok(Solution {
        status,
        approximation: section.midpoint(),
        trace,
    })
}

/// Runs golden section search without observation.
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
