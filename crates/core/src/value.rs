use std::fmt;

/// A numeric trace field, optionally annotated with its symbolic provenance.
///
/// The annotation (for example `"(a+b)/2"`) is presentational only. Solvers
/// never branch on it; display and export decide what to do with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A plain number.
    Literal(f64),

    /// A number together with a description of how it was computed.
    Annotated(f64, &'static str),
}

impl Value {
    /// Creates an annotated value.
    #[must_use]
    pub fn annotated(value: f64, formula: &'static str) -> Self {
        Self::Annotated(value, formula)
    }

    /// Returns the numeric value, ignoring any annotation.
    #[must_use]
    pub fn get(&self) -> f64 {
        match self {
            Self::Literal(value) | Self::Annotated(value, _) => *value,
        }
    }

    /// Returns the annotation, if any.
    #[must_use]
    pub fn annotation(&self) -> Option<&'static str> {
        match self {
            Self::Literal(_) => None,
            Self::Annotated(_, formula) => Some(formula),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Literal(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}
