use sweep_core::Snapshot;

/// Indicates how the scan finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every candidate was visited.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an exhaustive scan.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final scan status.
    pub status: Status,

    /// The first candidate that reached the extreme objective.
    pub x: f64,

    /// Objective value at the reported x.
    pub objective: f64,

    /// Snapshot at the reported x.
    pub snapshot: Snapshot<I, O>,

    /// Number of candidates visited, including failed and skipped ones.
    pub evaluations: usize,
}

impl<I, O> Solution<I, O> {
    /// Returns the `(x, objective)` pair.
    #[must_use]
    pub fn pair(&self) -> (f64, f64) {
        (self.x, self.objective)
    }
}
