use iterlab_core::{Config, Value};

/// One interval halving iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub index: usize,
    pub a: Value,
    pub b: Value,
    pub c: Value,
    pub fa: Value,
    pub fb: Value,
    pub fc: Value,

    /// Interval width `|b-a|`, the convergence metric.
    pub width: Value,

    pub within_tolerance: bool,
}

impl Record {
    pub(super) fn new(index: usize, x: [f64; 3], fx: [f64; 3], config: &Config) -> Self {
        let [a, b, c] = x;
        let [fa, fb, fc] = fx;
        let width = (b - a).abs();

        Self {
            index,
            a: Value::Literal(a),
            b: Value::Literal(b),
            c: Value::annotated(c, "(a+b)/2"),
            fa: Value::annotated(fa, "f(a)"),
            fb: Value::annotated(fb, "f(b)"),
            fc: Value::annotated(fc, "f(c)"),
            width: Value::annotated(width, "|b-a|"),
            within_tolerance: config.is_within(width),
        }
    }
}

impl iterlab_core::Record for Record {
    fn index(&self) -> usize {
        self.index
    }

    fn metric(&self) -> f64 {
        self.width.get()
    }

    fn within_tolerance(&self) -> bool {
        self.within_tolerance
    }
}
