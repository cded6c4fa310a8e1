//! The iteration engine: four single-variable solvers that record a trace.
//!
//! Every solver samples a [`Function`], appends one record per iteration to a
//! [`Trace`], and stops on its termination policy or the iteration cap.
//!
//! - [`equation::bisection`]: root finding on a sign-changing interval
//! - [`optimization::interval_halving`]: minimization by halving the interval
//! - [`optimization::golden_section`]: minimization by golden-ratio sections
//! - [`fixed_point`]: root finding through a damped fixed-point map
//!
//! Observers receive each record as it is appended and may return
//! [`Action::StopEarly`] to end the run cooperatively.
//!
//! [`Function`]: iterlab_core::Function
//! [`Trace`]: iterlab_core::Trace
//! [`Action::StopEarly`]: iterlab_core::Action::StopEarly

mod error;
mod evaluate;

pub use error::Error;
pub use evaluate::{EvalError, evaluate};

pub mod equation;
pub mod fixed_point;
pub mod optimization;
