use std::fmt;

use iterlab_core::Value;

/// How derived columns are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Every number is written as a literal.
    #[default]
    Values,

    /// Annotated columns are written as cell formulas.
    Formulas,
}

/// One spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),

    /// A formula body without the leading `=`, e.g. `ABS(C2-B2)`.
    Formula(String),
}

impl Cell {
    /// The tolerance flag as spreadsheet text.
    pub(crate) fn flag(value: bool) -> Self {
        Self::Text(if value { "TRUE" } else { "FALSE" }.to_owned())
    }

    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn index(index: usize) -> Self {
        Self::Number(index as f64)
    }

    /// Writes a formula only for annotated values in formula mode.
    pub(crate) fn derived(value: Value, mode: Mode, formula: impl FnOnce() -> String) -> Self {
        match (mode, value) {
            (Mode::Formulas, Value::Annotated(..)) => Self::Formula(formula()),
            _ => Self::Number(value.get()),
        }
    }

    /// Returns the text written to a CSV field.
    #[must_use]
    pub fn to_csv_field(&self) -> String {
        match self {
            Self::Formula(body) => format!("={body}"),
            other => other.to_string(),
        }
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        Self::Number(value.get())
    }
}

/// Shows formulas without the `=` prefix.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) | Self::Formula(text) => f.pad(text),
            Self::Number(n) => fmt::Display::fmt(n, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_never_become_formulas() {
        let cell = Cell::derived(Value::Literal(1.5), Mode::Formulas, || "B2".into());
        assert_eq!(cell, Cell::Number(1.5));
    }

    #[test]
    fn annotated_values_follow_mode() {
        let value = Value::annotated(2.0, "(a+b)/2");
        assert_eq!(Cell::derived(value, Mode::Values, || "(B2+C2)/2".into()), Cell::Number(2.0));
        assert_eq!(
            Cell::derived(value, Mode::Formulas, || "(B2+C2)/2".into()),
            Cell::Formula("(B2+C2)/2".into())
        );
    }

    #[test]
    fn csv_fields() {
        assert_eq!(Cell::Formula("ABS(C2-B2)".into()).to_csv_field(), "=ABS(C2-B2)");
        assert_eq!(Cell::flag(true).to_csv_field(), "TRUE");
        assert_eq!(Cell::index(3).to_csv_field(), "3");
        assert_eq!(Cell::Number(0.25).to_csv_field(), "0.25");
    }
}
