//! Spreadsheet export for solver traces.
//!
//! A [`Sheet`] is a header row plus one row of [`Cell`]s per trace record.
//! Each record type implements [`Tabular`], which fixes its column layout and
//! decides how every field is written under a given [`Mode`]:
//!
//! - [`Mode::Values`] writes every number as a literal.
//! - [`Mode::Formulas`] writes annotated, derived columns (midpoints, widths,
//!   golden-section interior points, fixed-point steps) as formulas that
//!   reference other cells of the same or the previous row. Literal values and
//!   function samples stay numbers.
//!
//! Sheets render as CSV, where formulas are prefixed with `=`, or as an
//! aligned text table through [`Display`](std::fmt::Display).

mod cell;
mod sheet;
mod table;
mod tabular;

pub use cell::{Cell, Mode};
pub use sheet::{Error, Sheet};
pub use table::Table;
pub use tabular::Tabular;
