use crate::{Record, Trace};

/// How a solver run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The termination policy was satisfied.
    Converged,

    /// Reached the iteration limit without satisfying the termination policy.
    ///
    /// This is not an error: the solution still carries the full trace and a
    /// best-effort approximation.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a solver run: the final approximation plus its trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<R> {
    /// Final solver status.
    pub status: Status,

    /// Final approximation of the root or minimizer.
    pub approximation: f64,

    /// Every iteration the solver recorded, in order.
    pub trace: Trace<R>,
}

impl<R: Record> Solution<R> {
    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.trace.len()
    }

    /// Returns true if the run ended because the termination policy was met.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
