/// A single per-iteration record produced by a solver.
///
/// Each algorithm defines its own record type with algorithm-specific fields;
/// this trait exposes the shape they all share.
pub trait Record {
    /// Ordinal position of the record in its trace, starting at 0.
    fn index(&self) -> usize;

    /// The algorithm's convergence metric for this iteration.
    fn metric(&self) -> f64;

    /// Whether the metric was strictly below the tolerance.
    fn within_tolerance(&self) -> bool;
}

/// The ordered, append-only history of a solver run.
///
/// Record indices are contiguous starting at 0 and match insertion order.
/// A trace can only grow; once the owning run returns it is never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<R> {
    records: Vec<R>,
}

impl<R> Trace<R> {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Returns the index the next appended record must carry.
    #[must_use]
    pub fn next_index(&self) -> usize {
        self.records.len()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no iteration was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    /// Returns the most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&R> {
        self.records.last()
    }

    /// Returns the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    /// Iterates over the records in iteration order.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }
}

impl<R: Record> Trace<R> {
    /// Appends a record.
    ///
    /// # Panics
    ///
    /// Panics if the record's index is not [`next_index`](Self::next_index),
    /// which would break index contiguity.
    pub fn push(&mut self, record: R) {
        assert_eq!(
            record.index(),
            self.next_index(),
            "trace records must be appended in index order"
        );
        self.records.push(record);
    }

    /// Returns true if the final record is within tolerance.
    ///
    /// An empty trace is never converged. Solvers that stop on something
    /// other than the record metric, such as golden section search, can
    /// converge with this returning false; `Solution::status` is the
    /// authoritative signal.
    #[must_use]
    pub fn ends_within_tolerance(&self) -> bool {
        self.last().is_some_and(Record::within_tolerance)
    }
}

impl<R> Default for Trace<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R> IntoIterator for &'a Trace<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
