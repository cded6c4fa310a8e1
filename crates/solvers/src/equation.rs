//! Solvers for equation problems: finding `x` such that `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on an interval where `f` changes sign
//!
//! Fixed-point iteration also targets `f(x) = 0` but needs no bracket; it lives
//! in [`crate::fixed_point`].

pub mod bisection;
