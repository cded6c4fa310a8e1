//! Solvers for optimization problems: minimizing `f` over an interval.
//!
//! Both solvers assume `f` is unimodal on the interval. Neither checks it.
//!
//! # Solvers
//!
//! - [`interval_halving`]: halves the interval each iteration, choosing the
//!   half by comparing function values
//! - [`golden_section`]: shrinks the interval by golden-ratio interior points

pub mod golden_section;
pub mod interval_halving;
