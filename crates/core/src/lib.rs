//! Core traits and types for iterlab.
//!
//! This crate defines the shared abstractions that the solvers, the export
//! adapter, and the calculator build on:
//!
//! - [`Function`]: a single-variable function that may fail to evaluate
//! - [`Observer`]: receives per-iteration records and optionally returns an [`Action`]
//! - [`Value`]: a numeric trace field with an optional formula annotation
//! - [`Record`] and [`Trace`]: the append-only per-iteration history of a run
//! - [`Termination`] and [`Hysteresis`]: the shared stopping policy
//! - [`Config`]: validated tolerance, iteration cap, and termination policy
//! - [`Solution`] and [`Status`]: what a finished run hands back to the caller

mod config;
mod function;
mod observer;
mod solution;
mod termination;
mod trace;
mod value;

pub use config::{Config, ConfigError};
pub use function::{FromFn, Function, from_fn};
pub use observer::{Action, Observer};
pub use solution::{Solution, Status};
pub use termination::{Hysteresis, Termination};
pub use trace::{Record, Trace};
pub use value::Value;
