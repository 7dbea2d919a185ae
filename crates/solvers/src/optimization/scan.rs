//! Exhaustive scan over a finite sequence of candidates.
//!
//! # Algorithm
//!
//! The scan evaluates the objective at every candidate exactly once, in the
//! order given, and keeps the candidate with the extreme objective. The
//! running best starts at an infinite sentinel (`-∞` when maximizing, `+∞`
//! when minimizing) and is replaced only on strict improvement, so the first
//! candidate to reach a tied extreme wins.
//!
//! Objectives that do not compare (NaN) never improve the running best and
//! are passed over without being selected.
//!
//! # Empty and degenerate domains
//!
//! A scan that keeps no candidate has no answer to report. An empty sequence
//! returns [`Error::NoCandidates`]; a sequence whose every objective failed to
//! beat the sentinel (all NaN, or all equal to the sentinel) returns
//! [`Error::NoImprovement`].
//!
//! # Observer Events
//!
//! The scan emits one [`Event`] per candidate:
//!
//! - [`Event::Evaluated`]: evaluation succeeded
//! - [`Event::ModelFailed`]: model returned an error
//! - [`Event::ProblemFailed`]: problem returned an error (input or objective)
//!
//! Each event includes `best`, the running best before this candidate.
//! Observers can return [`Action::StopEarly`] to halt, or [`Action::Skip`] to
//! leave the candidate out of best tracking (which also recovers from a failed
//! evaluation).

mod action;
mod best;
mod error;
mod event;
mod search;
mod solution;


pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use sweep_core::{Model, Objective, Observer, OptimizationProblem};

use super::Direction;

/// Scans `candidates` in order for the extreme objective in `direction`.
///
/// The observer receives an [`Event`] for each candidate.
/// See the [module docs](self) for details on observer actions.
///
/// # Errors
///
/// Returns an error if no candidate is kept, or if the model or problem fails
/// and the observer does not return [`Action::Skip`] to recover.
pub fn search<M, P, C, Obs>(
    model: &M,
    problem: &P,
    candidates: C,
    direction: Direction,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    C: IntoIterator<Item = f64>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search::search(model, problem, candidates, direction, observer)
}

/// Scans `candidates` without observer support.
///
/// # Errors
///
/// Returns an error if no candidate is kept, or if the model or problem fails.
pub fn search_unobserved<M, P, C>(
    model: &M,
    problem: &P,
    candidates: C,
    direction: Direction,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    C: IntoIterator<Item = f64>,
{
    search(model, problem, candidates, direction, ())
}

/// Finds the candidate with the largest objective.
///
/// # Errors
///
/// Returns an error if no candidate is kept, or if the model or problem fails
/// and the observer does not return [`Action::Skip`] to recover.
pub fn maximize<M, P, C, Obs>(
    model: &M,
    problem: &P,
    candidates: C,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    C: IntoIterator<Item = f64>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, candidates, Direction::Maximize, observer)
}

/// Finds the candidate with the largest objective without observer support.
///
/// # Errors
///
/// Returns an error if no candidate is kept, or if the model or problem fails.
pub fn maximize_unobserved<M, P, C>(
    model: &M,
    problem: &P,
    candidates: C,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    C: IntoIterator<Item = f64>,
{
    maximize(model, problem, candidates, ())
}

/// Finds the candidate with the smallest objective.
///
/// # Errors
///
/// Returns an error if no candidate is kept, or if the model or problem fails
/// and the observer does not return [`Action::Skip`] to recover.
pub fn minimize<M, P, C, Obs>(
    model: &M,
    problem: &P,
    candidates: C,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    C: IntoIterator<Item = f64>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    search(model, problem, candidates, Direction::Minimize, observer)
}

/// Finds the candidate with the smallest objective without observer support.
///
/// # Errors
///
/// Returns an error if no candidate is kept, or if the model or problem fails.
pub fn minimize_unobserved<M, P, C>(
    model: &M,
    problem: &P,
    candidates: C,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    C: IntoIterator<Item = f64>,
{
    minimize(model, problem, candidates, ())
}

/// Scans a plain function over `domain` and returns `(x, f(x))`.
///
/// ```
/// let (x, fx) = sweep_solvers::discrete_optimize(
///     |x| -x * x + 4.0 * x,
///     (-10..=10).map(f64::from),
///     true,
/// )
/// .unwrap();
///
/// assert_eq!((x, fx), (2.0, 4.0));
/// ```
///
/// # Errors
///
/// Returns [`Error::NoCandidates`] for an empty domain and
/// [`Error::NoImprovement`] if no objective beat the sentinel.
pub fn discrete_optimize<F, C>(f: F, domain: C, maximize: bool) -> Result<(f64, f64), Error>
where
    F: Fn(f64) -> f64,
    C: IntoIterator<Item = f64>,
{
    let objective = Objective::new(f);
    let direction = Direction::from_maximize(maximize);
    search_unobserved(&objective, &objective, domain, direction).map(|solution| solution.pair())
}
