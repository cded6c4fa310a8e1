/// Receives solver events and decides how the iteration should proceed.
///
/// Every solver in iterlab calls its observer once per appended trace record.
/// Observers let callers monitor or steer a run without changing the solver
/// API: logging, progress display, or cooperative cancellation.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

/// Control actions an observer can request between iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver after the current record and return what it has.
    StopEarly,
}
