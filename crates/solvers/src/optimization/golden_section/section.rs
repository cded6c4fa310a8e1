/// The golden ratio: φ = (1 + √5) / 2
pub const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio: 1/φ
///
/// This equals φ - 1 due to the golden ratio's unique property.
pub const INV_PHI: f64 = PHI - 1.0;

/// Fraction of the width between `a` and `a'`: ρ = 1 - 1/φ = (3 - √5) / 2.
pub const RHO: f64 = 1.0 - INV_PHI;

/// Golden section interval.
///
/// Maintains the outer interval `[left, right]` and the two interior points
/// positioned according to the golden ratio.
#[derive(Debug, Clone, Copy)]
pub(super) struct Section {
    /// Outer left bound `a`.
    pub(super) left: f64,

    /// Outer right bound `b`.
    pub(super) right: f64,

    /// Inner left point `a' = a + ρ(b - a)`.
    pub(super) inner_left: f64,

    /// Inner right point `b' = a + (1 - ρ)(b - a)`.
    pub(super) inner_right: f64,
}

impl Section {
    /// Creates a section over ordered bounds.
    pub(super) fn new(left: f64, right: f64) -> Self {
        let width = right - left;
        Self {
            left,
            right,
            inner_left: left + RHO * width,
            inner_right: left + INV_PHI * width,
        }
    }

    /// Returns the width `|b - a|`.
    pub(super) fn width(&self) -> f64 {
        (self.right - self.left).abs()
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Discards `(b', b]`, keeping `[a, b']`.
    pub(super) fn shrink_right(&mut self) {
        *self = Self::new(self.left, self.inner_right);
    }

    /// Discards `[a, a')`, keeping `[a', b]`.
    pub(super) fn shrink_left(&mut self) {
        *self = Self::new(self.inner_left, self.right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rho_matches_closed_form() {
        assert_relative_eq!(RHO, (3.0 - 5.0_f64.sqrt()) / 2.0, epsilon = 1e-15);
        assert_relative_eq!(RHO, 0.381_966, epsilon = 1e-6);
    }

    #[test]
    fn section_initialized_with_golden_ratio_points() {
        let section = Section::new(0.0, 1.0);

        assert_relative_eq!(section.width(), 1.0);
        assert_relative_eq!(section.inner_left, RHO);
        assert_relative_eq!(section.inner_right, INV_PHI);

        // They should divide the interval in golden ratio
        assert_relative_eq!(section.inner_left / (1.0 - section.inner_left), INV_PHI);
    }

    #[test]
    fn shrink_left_moves_lower_bound_to_inner_left() {
        let mut section = Section::new(0.0, 1.0);
        let old_inner_right = section.inner_right;

        section.shrink_left();

        assert_relative_eq!(section.left, RHO);
        assert_relative_eq!(section.right, 1.0);

        // The old inner_right lands on the new inner_left
        assert_relative_eq!(section.inner_left, old_inner_right, epsilon = 1e-12);
    }

    #[test]
    fn shrink_right_moves_upper_bound_to_inner_right() {
        let mut section = Section::new(0.0, 1.0);
        let old_inner_left = section.inner_left;

        section.shrink_right();

        assert_relative_eq!(section.left, 0.0);
        assert_relative_eq!(section.right, INV_PHI);

        // The old inner_left lands on the new inner_right
        assert_relative_eq!(section.inner_right, old_inner_left, epsilon = 1e-12);
    }
}
