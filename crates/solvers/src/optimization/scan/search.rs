use sweep_core::{Model, Observer, OptimizationProblem};

use crate::optimization::{Direction, Point, evaluate};

use super::{Action, Error, Event, Solution, Status, best::Best};

/// Core exhaustive scan.
///
/// Visits each candidate once, in order, and keeps the first one whose
/// objective strictly improves on the running best for `direction`.
pub(super) fn search<M, P, C, Obs>(
    model: &M,
    problem: &P,
    candidates: C,
    direction: Direction,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    C: IntoIterator<Item = f64>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let mut best = Best::empty(direction);
    let mut evaluations = 0;

    for x in candidates {
        evaluations += 1;
        let prior = best.point();

        match evaluate(model, problem, x) {
            Ok(eval) => {
                let point = Point::from(&eval);
                tracing::trace!(x, objective = point.objective, "evaluated candidate");

                let event = Event::Evaluated {
                    point,
                    input: &eval.snapshot.input,
                    output: &eval.snapshot.output,
                    best: prior,
                };
                match observer.observe(&event) {
                    Some(Action::StopEarly) => {
                        best.update(eval);
                        tracing::debug!(evaluations, "scan stopped by observer");
                        return best.finish(Status::StoppedByObserver, evaluations);
                    }
                    Some(Action::Skip) => {}
                    None => {
                        best.update(eval);
                    }
                }
            }
            Err(err) => match Event::<M, P>::emit_failure(x, prior, &err, &mut observer) {
                Some(Action::StopEarly) => {
                    tracing::debug!(evaluations, "scan stopped by observer");
                    return best.finish(Status::StoppedByObserver, evaluations);
                }
                Some(Action::Skip) => {
                    tracing::trace!(x, "skipped failed candidate");
                }
                None => return Err(err.into()),
            },
        }
    }

    tracing::debug!(evaluations, best = ?best.point(), "scan complete");
    best.finish(Status::Completed, evaluations)
}
