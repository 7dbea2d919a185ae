use sweep_core::Snapshot;

use crate::optimization::{refine, scan};

/// The result of a dispatched search.
#[derive(Debug, Clone)]
pub enum Solution<I, O> {
    Discrete(scan::Solution<I, O>),
    Continuous(refine::Solution<I, O>),
}

impl<I, O> Solution<I, O> {
    /// Returns the best x.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Discrete(solution) => solution.x,
            Self::Continuous(solution) => solution.x,
        }
    }

    /// Returns the objective at the best x.
    #[must_use]
    pub fn objective(&self) -> f64 {
        match self {
            Self::Discrete(solution) => solution.objective,
            Self::Continuous(solution) => solution.objective,
        }
    }

    /// Returns the model snapshot at the best x.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot<I, O> {
        match self {
            Self::Discrete(solution) => &solution.snapshot,
            Self::Continuous(solution) => &solution.snapshot,
        }
    }

    /// Returns the total number of candidates evaluated.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        match self {
            Self::Discrete(solution) => solution.evaluations,
            Self::Continuous(solution) => solution.evaluations,
        }
    }

    /// Returns the `(x, objective)` pair.
    #[must_use]
    pub fn pair(&self) -> (f64, f64) {
        (self.x(), self.objective())
    }
}

impl<I, O> From<scan::Solution<I, O>> for Solution<I, O> {
    fn from(solution: scan::Solution<I, O>) -> Self {
        Self::Discrete(solution)
    }
}

impl<I, O> From<refine::Solution<I, O>> for Solution<I, O> {
    fn from(solution: refine::Solution<I, O>) -> Self {
        Self::Continuous(solution)
    }
}
