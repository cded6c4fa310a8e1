use std::fmt;

use iterlab_core::{Status, Trace};
use iterlab_export::{Mode, Sheet};
use iterlab_solvers::{
    equation::bisection,
    fixed_point,
    optimization::{golden_section, interval_halving},
};

use crate::{Method, Session};

/// Decimal places used for the final answer.
pub const DISPLAY_PRECISION: usize = 4;

/// The trace of whichever solver ran.
#[derive(Debug, Clone, PartialEq)]
pub enum Run {
    Bisection(Trace<bisection::Record>),
    IntervalHalving(Trace<interval_halving::Record>),
    GoldenSection(Trace<golden_section::Record>),
    FixedPoint(Trace<fixed_point::Record>),
}

impl Run {
    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bisection(trace) => trace.len(),
            Self::IntervalHalving(trace) => trace.len(),
            Self::GoldenSection(trace) => trace.len(),
            Self::FixedPoint(trace) => trace.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lays the trace out as a spreadsheet.
    #[must_use]
    pub fn sheet(&self, mode: Mode) -> Sheet {
        match self {
            Self::Bisection(trace) => Sheet::from_trace(trace, mode),
            Self::IntervalHalving(trace) => Sheet::from_trace(trace, mode),
            Self::GoldenSection(trace) => Sheet::from_trace(trace, mode),
            Self::FixedPoint(trace) => Sheet::from_trace(trace, mode),
        }
    }
}

/// The final answer of a calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Root { x: f64 },

    /// `fx` is `None` when the function cannot be evaluated at `x`.
    Minimizer { x: f64, fx: Option<f64> },

    FixedPoint { p: f64 },
}

impl Outcome {
    /// Returns the root, minimizer, or fixed point.
    #[must_use]
    pub fn value(&self) -> f64 {
        match *self {
            Self::Root { x } | Self::Minimizer { x, .. } => x,
            Self::FixedPoint { p } => p,
        }
    }
}

/// Everything a finished calculation hands back.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The inputs that produced this report.
    pub session: Session,

    /// The method that actually ran, which differs from `session.method` when
    /// root finding fell back to minimization.
    pub method: Method,

    /// The printed derivative, for every method but fixed-point iteration.
    pub derivative: Option<String>,

    /// The synthesized map `g(x)`, for fixed-point iteration only.
    pub iteration_function: Option<String>,

    pub status: Status,
    pub outcome: Outcome,
    pub run: Run,
}

impl Report {
    #[must_use]
    pub fn iters(&self) -> usize {
        self.run.len()
    }

    #[must_use]
    pub fn fell_back(&self) -> bool {
        self.method != self.session.method
    }

    #[must_use]
    pub fn sheet(&self, mode: Mode) -> Sheet {
        self.run.sheet(mode)
    }

    fn conclusion(&self) -> String {
        let p = DISPLAY_PRECISION;
        let session = &self.session;
        let value = self.outcome.value();

        let start = if self.method.uses_interval() {
            format!("the initial interval [{}, {}]", session.a, session.b)
        } else {
            format!("the initial guess {}", session.a)
        };

        let ending = match self.status {
            Status::Converged => format!("converged in {} iterations", self.iters()),
            Status::MaxIters => format!(
                "stopped at the {}-iteration limit without meeting the tolerance",
                self.iters()
            ),
            Status::StoppedByObserver => format!("was cancelled after {} iterations", self.iters()),
        };

        format!(
            "Using the {} with a tolerance of {} and {start}, the algorithm {ending}. \
             The resulting {} is approximately {value:.p$}.",
            self.method,
            session.tolerance,
            self.method.result_label().to_lowercase(),
        )
    }
}

/// The calculation summary: inputs, answer, and conclusion.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = DISPLAY_PRECISION;
        let session = &self.session;

        writeln!(f, "Function Used: {}", session.function)?;
        writeln!(f, "Method: {}", self.method)?;
        if self.fell_back() {
            writeln!(f, "  (f(a) and f(b) have the same sign, so {} was used instead)", self.method)?;
        }
        if self.method.uses_interval() {
            writeln!(f, "Initial Interval [a, b]: [{}, {}]", session.a, session.b)?;
        } else {
            writeln!(f, "Initial Guess p0: {}", session.a)?;
        }
        writeln!(f, "Tolerance: {}", session.tolerance)?;
        if let Some(derivative) = &self.derivative {
            writeln!(f, "Derivative f'(x): {derivative}")?;
        }
        if let Some(map) = &self.iteration_function {
            writeln!(f, "Iteration Function g(x): {map}")?;
        }

        writeln!(f)?;
        writeln!(f, "{}: {:.p$}", self.method.result_label(), self.outcome.value())?;
        match self.outcome {
            Outcome::Minimizer { fx: Some(fx), .. } => writeln!(f, "f(x*): {fx:.p$}")?,
            Outcome::Minimizer { fx: None, .. } => writeln!(f, "f(x*): N/A")?,
            _ => {}
        }
        writeln!(f, "Found after {} iterations.", self.iters())?;

        writeln!(f)?;
        write!(f, "Conclusion: {}", self.conclusion())
    }
}
