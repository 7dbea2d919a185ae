use sweep_core::Snapshot;

use crate::optimization::scan;

/// Indicates how the refiner finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every configured round ran.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of grid refinement.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final refiner status.
    pub status: Status,

    /// Best x from the last completed round.
    pub x: f64,

    /// Objective value at the reported x.
    pub objective: f64,

    /// Snapshot at the reported x.
    pub snapshot: Snapshot<I, O>,

    /// Number of rounds completed.
    pub rounds: usize,

    /// Interval scanned in the last completed round.
    pub interval: [f64; 2],

    /// Grid spacing used in the last completed round.
    pub step: f64,

    /// Total candidates visited across all rounds.
    pub evaluations: usize,
}

impl<I, O> Solution<I, O> {
    /// Returns the `(x, objective)` pair.
    #[must_use]
    pub fn pair(&self) -> (f64, f64) {
        (self.x, self.objective)
    }

    /// Builds a solution from the last round's scan.
    pub(super) fn from_round(
        found: scan::Solution<I, O>,
        status: Status,
        rounds: usize,
        interval: [f64; 2],
        step: f64,
        evaluations: usize,
    ) -> Self {
        Self {
            status,
            x: found.x,
            objective: found.objective,
            snapshot: found.snapshot,
            rounds,
            interval,
            step,
            evaluations,
        }
    }
}
