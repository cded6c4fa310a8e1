use iterlab_core::{Config, Value};

use super::section::Section;

/// One golden section iteration.
///
/// The search only iterates while `|b-a|` exceeds the tolerance, so
/// `within_tolerance` is false on every record and
/// [`Trace::ends_within_tolerance`](iterlab_core::Trace::ends_within_tolerance)
/// never reports convergence. Check [`Solution::status`](iterlab_core::Solution)
/// instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub index: usize,
    pub a: Value,
    pub b: Value,

    /// Inner left point `a'`.
    pub a1: Value,

    /// Inner right point `b'`.
    pub b1: Value,

    /// `f(a')`.
    pub fa1: Value,

    /// `f(b')`.
    pub fb1: Value,

    /// Width `|b-a|` at the start of the iteration.
    pub width: Value,

    pub within_tolerance: bool,
}

impl Record {
    pub(super) fn new(
        index: usize,
        section: &Section,
        fa1: f64,
        fb1: f64,
        config: &Config,
    ) -> Self {
        let width = section.width();
        Self {
            index,
            a: Value::Literal(section.left),
            b: Value::Literal(section.right),
            a1: Value::annotated(section.inner_left, "a+ρ(b-a)"),
            b1: Value::annotated(section.inner_right, "a+(1-ρ)(b-a)"),
            fa1: Value::annotated(fa1, "f(a')"),
            fb1: Value::annotated(fb1, "f(b')"),
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
