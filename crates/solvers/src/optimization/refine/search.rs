use sweep_core::{Model, Observer, OptimizationProblem};

use crate::optimization::{Direction, Point, scan};

use super::{Action, Config, Error, Event, Grid, Solution, Status};

/// Core refinement loop.
///
/// Each round scans the grid over the current interval. With refinement on,
/// the interval then shrinks to one step either side of the round's best
/// (clamped to the current interval) and the step halves.
pub(super) fn search<M, P, Obs>(
    model: &M,
    problem: &P,
    interval: [f64; 2],
    config: &Config,
    direction: Direction,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: Observer<Event, Action>,
{
    let [mut lower, mut upper] = validate_interval(interval)?;
    let mut step = config.step();
    let mut evaluations = 0;
    let mut round = 1;

    loop {
        let grid = Grid::new([lower, upper], step);
        let found = scan::search_unobserved(model, problem, grid, direction)
            .map_err(|source| Error::Scan { round, source })?;
        evaluations += found.evaluations;

        let point = Point::new(found.x, found.objective);
        tracing::debug!(
            round,
            lower,
            upper,
            step,
            x = point.x,
            objective = point.objective,
            "refinement round complete"
        );

        let event = Event {
            round,
            interval: [lower, upper],
            step,
            candidates: grid.len(),
            point,
        };
        let stop = matches!(observer.observe(&event), Some(Action::StopEarly));

        if stop || round == config.rounds() {
            let status = if stop {
                Status::StoppedByObserver
            } else {
                Status::Completed
            };
            return Ok(Solution::from_round(
                found,
                status,
                round,
                [lower, upper],
                step,
                evaluations,
            ));
        }

        if config.refine() {
            lower = lower.max(point.x - step);
            upper = upper.min(point.x + step);
            step /= 2.0;
        }
        round += 1;
    }
}

/// Validates interval bounds and returns them as `[lower, upper]`.
fn validate_interval(interval: [f64; 2]) -> Result<[f64; 2], Error> {
    let [lower, upper] = interval;

    if !lower.is_finite() {
        return Err(Error::NonFiniteBound { value: lower });
    }

    if !upper.is_finite() {
        return Err(Error::NonFiniteBound { value: upper });
    }

    if lower > upper {
        return Err(Error::InvertedInterval { lower, upper });
    }

    Ok(interval)
}
