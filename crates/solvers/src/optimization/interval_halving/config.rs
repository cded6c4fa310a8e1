/// How interval halving picks the half that keeps the minimizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rule {
    /// If `f(a) < f(b)` keep `[a, c]`, otherwise keep `[c, b]`.
    #[default]
    EndpointComparison,

    /// Textbook three-point interval halving.
    ///
    /// With `x1 = a + L/4` and `x2 = b - L/4`: if `f(x1) < f(c)` keep `[a, c]`,
    /// else if `f(x2) < f(c)` keep `[c, b]`, otherwise keep `[x1, x2]`.
    QuarterPoints,
}

/// Configuration for the interval halving solver.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Config {
    base: iterlab_core::Config,
    rule: Rule,
}

impl Config {
    /// Creates a config with the default [`Rule`].
    #[must_use]
    pub fn new(base: iterlab_core::Config) -> Self {
        Self {
            base,
            rule: Rule::default(),
        }
    }

    /// Returns a copy of this config using `rule`.
    #[must_use]
    pub fn with_rule(self, rule: Rule) -> Self {
        Self { rule, ..self }
    }

    /// Returns the shared tolerance, iteration cap, and termination policy.
    #[must_use]
    pub fn base(&self) -> &iterlab_core::Config {
        &self.base
    }

    /// Returns the half-selection rule.
    #[must_use]
    pub fn rule(&self) -> Rule {
        self.rule
    }
}

impl From<iterlab_core::Config> for Config {
    fn from(base: iterlab_core::Config) -> Self {
        Self::new(base)
    }
}
