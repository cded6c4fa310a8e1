/// Policy deciding when within-tolerance observations end a run.
///
/// Numerically noisy metrics can dip below the tolerance once and then climb
/// back out. [`Termination::Hysteresis`] asks for several within-tolerance
/// observations before stopping; [`Termination::FirstWithin`] stops on the
/// first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Termination {
    /// Stop on the first within-tolerance observation.
    FirstWithin,

    /// Stop once `required` within-tolerance observations have been counted.
    ///
    /// The count only grows: an observation outside the tolerance does not
    /// reset or decrement it.
    Hysteresis { required: usize },
}

impl Termination {
    /// Observation count used by [`Termination::default`].
    pub const DEFAULT_REQUIRED: usize = 5;

    /// Returns the number of within-tolerance observations needed to stop.
    #[must_use]
    pub fn required(&self) -> usize {
        match self {
            Self::FirstWithin => 1,
            Self::Hysteresis { required } => *required,
        }
    }

    /// Creates a fresh tracker for one run.
    #[must_use]
    pub fn tracker(&self) -> Hysteresis {
        Hysteresis {
            required: self.required(),
            count: 0,
        }
    }
}

impl Default for Termination {
    fn default() -> Self {
        Self::Hysteresis {
            required: Self::DEFAULT_REQUIRED,
        }
    }
}

/// Per-run counter for a [`Termination`] policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hysteresis {
    required: usize,
    count: usize,
}

impl Hysteresis {
    /// Records one observation and returns true if the run should stop.
    pub fn observe(&mut self, within_tolerance: bool) -> bool {
        if within_tolerance {
            self.count += 1;
        }
        within_tolerance && self.count >= self.required
    }

    /// Returns how many within-tolerance observations have been counted.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }
}
