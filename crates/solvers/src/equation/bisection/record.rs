use iterlab_core::{Config, Value};

/// One bisection iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Iteration index, starting at 0.
    pub index: usize,

    /// Left end of the interval at the start of the iteration.
    pub a: Value,

    /// Right end of the interval at the start of the iteration.
    pub b: Value,

    /// Midpoint `(a+b)/2`.
    pub c: Value,

    /// Function value at the midpoint.
    pub fc: Value,

    /// Interval width `|b-a|`.
    pub width: Value,

    /// Whether `|f(c)|` was below the tolerance.
    pub within_tolerance: bool,
}

impl Record {
    pub(super) fn new(index: usize, a: f64, b: f64, c: f64, fc: f64, config: &Config) -> Self {
        Self {
            index,
            a: Value::Literal(a),
            b: Value::Literal(b),
            c: Value::annotated(c, "(a+b)/2"),
            fc: Value::annotated(fc, "f(c)"),
            width: Value::annotated((b - a).abs(), "|b-a|"),
            within_tolerance: config.is_within(fc.abs()),
        }
    }
}

impl iterlab_core::Record for Record {
    fn index(&self) -> usize {
        self.index
    }

    fn metric(&self) -> f64 {
        self.fc.get().abs()
    }

    fn within_tolerance(&self) -> bool {
        self.within_tolerance
    }
}
