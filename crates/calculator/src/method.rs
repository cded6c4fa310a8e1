use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The calculation a session runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Method {
    /// Bisection on a sign-changing interval.
    #[serde(rename = "root")]
    RootFinding,

    /// Interval halving minimization.
    #[default]
    #[serde(rename = "optimal")]
    IntervalHalving,

    /// Golden section search minimization.
    #[serde(rename = "gss")]
    GoldenSection,

    /// Damped fixed-point iteration.
    #[serde(rename = "fixed")]
    FixedPoint,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown method '{0}', expected one of: root, optimal, gss, fixed")]
pub struct UnknownMethod(pub String);

impl Method {
    pub const ALL: [Method; 4] = [
        Self::RootFinding,
        Self::IntervalHalving,
        Self::GoldenSection,
        Self::FixedPoint,
    ];

    /// The short tag used in session files and on the command line.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::RootFinding => "root",
            Self::IntervalHalving => "optimal",
            Self::GoldenSection => "gss",
            Self::FixedPoint => "fixed",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::RootFinding => "Root Finding (Bisection Method)",
            Self::IntervalHalving => "Optimization (Bisection Method)",
            Self::GoldenSection => "Optimization (Golden Section Search)",
            Self::FixedPoint => "Fixed Point Iteration",
        }
    }

    /// Label for the final answer, e.g. `Minimizer (x)`.
    #[must_use]
    pub fn result_label(self) -> &'static str {
        match self {
            Self::RootFinding => "Approximate Root (x)",
            Self::IntervalHalving | Self::GoldenSection => "Minimizer (x)",
            Self::FixedPoint => "Converged Fixed Point (p)",
        }
    }

    /// Returns true for methods that search an interval `[a, b]`.
    #[must_use]
    pub fn uses_interval(self) -> bool {
        self != Self::FixedPoint
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMethod(s.to_owned()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags() {
        assert_eq!("root".parse(), Ok(Method::RootFinding));
        assert_eq!("optimal".parse(), Ok(Method::IntervalHalving));
        assert_eq!(" GSS ".parse(), Ok(Method::GoldenSection));
        assert_eq!("fixed".parse(), Ok(Method::FixedPoint));
        assert!("newton".parse::<Method>().is_err());
    }

    #[test]
    fn tags_round_trip() {
        for method in Method::ALL {
            assert_eq!(method.tag().parse(), Ok(method));
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Method::default(), Method::IntervalHalving);
        assert_eq!(Method::GoldenSection.result_label(), "Minimizer (x)");
        assert_eq!(Method::FixedPoint.to_string(), "Fixed Point Iteration");
    }
}
