//! The iterlab calculator.
//!
//! A [`Session`] names a function of `x`, a [`Method`], the starting values,
//! and the solver settings. [`calculate`] parses the function, runs the
//! method, and returns a [`Report`] with the final answer, the symbolic
//! derivative, and the full iteration trace ready for display or export.
//!
//! Root finding needs `f(a)` and `f(b)` to differ in sign. When they do not,
//! the calculator logs a warning and minimizes by interval halving instead.
//!
//! ```
//! use iterlab::{Method, Session, calculate};
//!
//! let session = Session {
//!     function: "x^2 - 4".into(),
//!     method: Method::RootFinding,
//!     a: 1.0,
//!     b: 3.0,
//!     ..Session::default()
//! };
//!
//! let report = calculate(&session).unwrap();
//! assert!((report.outcome.value() - 2.0).abs() < 1e-4);
//! ```

mod error;
mod method;
mod report;
mod session;

pub use error::Error;
pub use method::{Method, UnknownMethod};
pub use report::{DISPLAY_PRECISION, Outcome, Report, Run};
pub use session::Session;

use std::sync::atomic::{AtomicBool, Ordering};

use iterlab_core::{Action, Status};
use iterlab_expr::Expression;
use iterlab_solvers::{
    equation::bisection,
    evaluate, fixed_point,
    optimization::{golden_section, interval_halving},
};
use tracing::{info, warn};

/// Runs the calculation described by `session`.
///
/// # Errors
///
/// Returns an error if the session is invalid, the function does not parse,
/// or the solver fails.
pub fn calculate(session: &Session) -> Result<Report, Error> {
    calculate_until(session, &AtomicBool::new(false))
}

/// Runs the calculation, stopping early once `cancel` is set.
///
/// The flag is checked after every recorded iteration. A cancelled run is not
/// an error: the report has [`Status::StoppedByObserver`] and the partial
/// trace.
///
/// # Errors
///
/// See [`calculate`].
pub fn calculate_until(session: &Session, cancel: &AtomicBool) -> Result<Report, Error> {
    session.validate()?;
    let f = Expression::parse(&session.function)?;
    let method = select_method(session, &f)?;

    info!(function = %f, method = method.tag(), "calculating");

    let interval = [session.a, session.b];
    let (status, outcome, run) = match method {
        Method::RootFinding => {
            let config = session.config()?;
            let solution = bisection::find_root(&f, interval, &config, stop_when(cancel))
                .map_err(|e| Error::solve(method, e))?;
            let outcome = Outcome::Root {
                x: solution.approximation,
            };
            (solution.status, outcome, Run::Bisection(solution.trace))
        }
        Method::IntervalHalving => {
            let config = session.interval_halving_config()?;
            let solution = interval_halving::minimize(&f, interval, &config, stop_when(cancel))
                .map_err(|e| Error::solve(method, e))?;
            let outcome = minimizer(&f, solution.approximation);
            (solution.status, outcome, Run::IntervalHalving(solution.trace))
        }
        Method::GoldenSection => {
            let config = session.config()?;
            let solution = golden_section::minimize(&f, interval, &config, stop_when(cancel))
                .map_err(|e| Error::solve(method, e))?;
            let outcome = minimizer(&f, solution.approximation);
            (solution.status, outcome, Run::GoldenSection(solution.trace))
        }
        Method::FixedPoint => {
            let config = session.fixed_point_config()?;
            let solution = fixed_point::iterate(&f, session.a, &config, stop_when(cancel))
                .map_err(|e| Error::solve(method, e))?;
            let outcome = Outcome::FixedPoint {
                p: solution.approximation,
            };
            return Ok(finish(
                session,
                method,
                None,
                Some(solution.iteration_function),
                solution.status,
                outcome,
                Run::FixedPoint(solution.trace),
            ));
        }
    };

    let derivative = Some(f.derivative().to_string());
    Ok(finish(session, method, derivative, None, status, outcome, run))
}

fn finish(
    session: &Session,
    method: Method,
    derivative: Option<String>,
    iteration_function: Option<String>,
    status: Status,
    outcome: Outcome,
    run: Run,
) -> Report {
    info!(
        method = method.tag(),
        ?status,
        iters = run.len(),
        value = outcome.value(),
        "calculation finished"
    );

    Report {
        session: session.clone(),
        method,
        derivative,
        iteration_function,
        status,
        outcome,
        run,
    }
}

/// Picks the method to run, probing the sign change for root finding.
fn select_method(session: &Session, f: &Expression) -> Result<Method, Error> {
    if session.method != Method::RootFinding {
        return Ok(session.method);
    }

    let probe = |x: f64| evaluate(f, x).map_err(|source| Error::Probe { x, source });
    let fa = probe(session.a)?;
    let fb = probe(session.b)?;

    if !bisection::changes_sign(fa, fb) {
        warn!(
            a = session.a,
            b = session.b,
            fa,
            fb,
            "no sign change on the interval, minimizing by interval halving instead"
        );
        return Ok(Method::IntervalHalving);
    }
    Ok(Method::RootFinding)
}

fn minimizer(f: &Expression, x: f64) -> Outcome {
    Outcome::Minimizer {
        x,
        fx: f.eval(x).ok().filter(|fx| fx.is_finite()),
    }
}

/// An observer that requests a stop once `cancel` is set.
fn stop_when<R>(cancel: &AtomicBool) -> impl FnMut(&R) -> Option<Action> + '_ {
    move |_record| cancel.load(Ordering::Relaxed).then_some(Action::StopEarly)
}
