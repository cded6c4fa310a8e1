use iterlab_core::{Config, Value};

/// One fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub index: usize,

    /// The current iterate `p(i)`.
    pub pi: Value,

    /// The next iterate `g(p(i))`.
    pub gpi: Value,

    /// Step size `|g(p(i)) - p(i)|`, the convergence metric.
    pub diff: Value,

    pub within_tolerance: bool,
}

impl Record {
    pub(super) fn new(index: usize, p: f64, p_next: f64, config: &Config) -> Self {
        let diff = (p_next - p).abs();

        // Every iterate after the first is the previous record's g(p).
        let pi = if index == 0 {
            Value::Literal(p)
        } else {
            Value::annotated(p, "g(p(i-1))")
        };

        Self {
            index,
            pi,
            gpi: Value::annotated(p_next, "p-λf(p)"),
            diff: Value::annotated(diff, "|g(p)-p|"),
            within_tolerance: config.is_within(diff),
        }
    }
}

impl iterlab_core::Record for Record {
    fn index(&self) -> usize {
        self.index
    }

    fn metric(&self) -> f64 {
        self.diff.get()
    }

    fn within_tolerance(&self) -> bool {
        self.within_tolerance
    }
}
