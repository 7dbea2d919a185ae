//! Grid refinement for optimization over a bounded interval.
//!
//! # Algorithm
//!
//! Each round discretizes the current interval `[a, b]` into a [`Grid`] with
//! spacing `δ` (`a`, `a + δ`, … up to the first value that reaches `b`) and
//! runs an exhaustive [scan](crate::optimization::scan) over it. With
//! refinement enabled, the next round searches `[max(a, x − δ), min(b, x + δ)]`
//! around the round's best `x` with half the step. The interval is clamped,
//! never slid, so it cannot leave the original bounds.
//!
//! Without refinement nothing changes between rounds: every round scans the
//! same grid and returns the same point. The extra rounds are still run.
//!
//! The result is the best point of the last completed round.
//!
//! # When to Use
//!
//! Grid refinement is a pedagogical baseline. It makes no assumptions about
//! smoothness, but with refinement enabled it only narrows in on one region
//! and can lose a global optimum that the coarse first grid misses.
//! Each round costs one evaluation per grid point.
//!
//! # Observer Events
//!
//! The refiner emits one [`Event`] after each completed round. Observers can
//! return [`Action::StopEarly`] to keep that round's result and stop.

mod config;
mod error;
mod event;
mod grid;
mod search;
mod solution;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};
pub use grid::{Grid, Iter};
pub use solution::{Solution, Status};

use sweep_core::{Model, Objective, Observer, OptimizationProblem};

use super::Direction;

/// Searches `interval` by repeated grid scans.
///
/// The observer receives an [`Event`] after each round.
///
/// # Errors
///
/// Returns an error if the interval is invalid or a round's scan fails.
pub fn search<M, P, Obs>(
    model: &M,
    problem: &P,
    interval: [f64; 2],
    config: &Config,
    direction: Direction,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: Observer<Event, Action>,
{
    search::search(model, problem, interval, config, direction, observer)
}

/// Searches `interval` by repeated grid scans without observer support.
///
/// # Errors
///
/// Returns an error if the interval is invalid or a round's scan fails.
pub fn search_unobserved<M, P>(
    model: &M,
    problem: &P,
    interval: [f64; 2],
    config: &Config,
    direction: Direction,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    search(model, problem, interval, config, direction, ())
}

/// Approximates the optimum of a plain function on `[a, b]`.
///
/// ```
/// let (x, fx) = sweep_solvers::continuous_optimize(
///     |x| -x * x + 4.0 * x,
///     0.0,
///     4.0,
///     0.1,
///     true,
///     true,
///     3,
/// )
/// .unwrap();
///
/// assert!((x - 2.0).abs() < 0.025);
/// assert!((fx - 4.0).abs() < 1e-3);
/// ```
///
/// # Errors
///
/// Returns an error if `step` or `iterations` is invalid, the interval is not
/// finite and ordered, or a round finds no comparable objective.
pub fn continuous_optimize<F>(
    f: F,
    a: f64,
    b: f64,
    step: f64,
    maximize: bool,
    refine: bool,
    iterations: usize,
) -> Result<(f64, f64), Error>
where
    F: Fn(f64) -> f64,
{
    let config = Config::new(step, refine, iterations)?;
    let objective = Objective::new(f);
    let direction = Direction::from_maximize(maximize);
    search_unobserved(&objective, &objective, [a, b], &config, direction)
        .map(|solution| solution.pair())
}
