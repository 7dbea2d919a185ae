use crate::optimization::{Direction, Evaluation, Point};

use super::{Error, Solution, Status};

/// Tracks the best evaluation encountered so far.
///
/// The running best starts at the direction's infinite sentinel with no
/// evaluation attached. An evaluation replaces it only if it strictly
/// improves on the running objective.
pub(super) struct Best<I, O> {
    direction: Direction,
    objective: f64,
    eval: Option<Evaluation<I, O>>,
}

impl<I, O> Best<I, O> {
    /// Creates an empty tracker holding the sentinel objective.
    pub(super) fn empty(direction: Direction) -> Self {
        Self {
            direction,
            objective: direction.sentinel(),
            eval: None,
        }
    }

    /// Replaces the best evaluation if the objective strictly improves.
    ///
    /// Returns true if the evaluation became the new best.
    pub(super) fn update(&mut self, eval: Evaluation<I, O>) -> bool {
        if !self.direction.improves(eval.objective, self.objective) {
            return false;
        }
        self.objective = eval.objective;
        self.eval = Some(eval);
        true
    }

    /// Returns the current best point, if any evaluation has been kept.
    pub(super) fn point(&self) -> Option<Point> {
        self.eval.as_ref().map(Point::from)
    }

    /// Finalizes the scan using the best available evaluation.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoCandidates` if nothing was visited, or
    /// `Error::NoImprovement` if candidates were visited but none beat the
    /// sentinel.
    pub(super) fn finish(self, status: Status, evaluations: usize) -> Result<Solution<I, O>, Error> {
        let Some(eval) = self.eval else {
            return Err(if evaluations == 0 {
                Error::NoCandidates
            } else {
                Error::NoImprovement { evaluations }
            });
        };

        Ok(Solution {
            status,
            x: eval.x,
            objective: eval.objective,
            snapshot: eval.snapshot,
            evaluations,
        })
    }
}
