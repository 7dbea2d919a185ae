//! Runtime selection between the discrete scanner and the grid refiner.
//!
//! A dispatched search is described by a [`Domain`], a [`Mode`] and a bag of
//! [`Options`]:
//!
//! - [`Mode::Discrete`] scans the domain's points in order. An interval
//!   domain is scanned as its two bounds. Only [`Options::maximize`] is read.
//! - [`Mode::Continuous`] refines a grid over an interval domain, using every
//!   option. A points domain is rejected.
//!
//! Arguments are validated before any objective call, and those failures are
//! reported through [`Error::is_invalid_argument`].

mod domain;
mod error;
mod mode;
mod options;
mod solution;

#[cfg(test)]
mod tests;

pub use domain::{Domain, DomainError};
pub use error::Error;
pub use mode::Mode;
pub use options::Options;
pub use solution::Solution;

use sweep_core::{Model, Objective, OptimizationProblem};

use super::{refine, scan};

/// Runs the solver selected by `mode`.
///
/// # Errors
///
/// Returns an error if the domain does not suit the mode, the options are
/// invalid for a continuous search, or the selected solver fails.
pub fn dispatch<M, P>(
    model: &M,
    problem: &P,
    domain: &Domain,
    mode: Mode,
    options: &Options,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    let direction = options.direction();

    match mode {
        Mode::Discrete => {
            let points = domain.points();
            tracing::debug!(%mode, ?direction, candidates = points.len(), "dispatching");

            let solution =
                scan::search_unobserved(model, problem, points.iter().copied(), direction)?;
            Ok(solution.into())
        }
        Mode::Continuous => {
            let interval = domain.interval()?;
            let config = options.config()?;
            tracing::debug!(%mode, ?direction, ?interval, ?config, "dispatching");

            let solution =
                refine::search_unobserved(model, problem, interval, &config, direction)?;
            Ok(solution.into())
        }
    }
}

/// Optimizes a plain function, selecting the solver from a mode name.
///
/// ```
/// use sweep_solvers::{Domain, Options, optimize};
///
/// let domain: Domain = "-10..=10".parse().unwrap();
/// let (x, fx) = optimize(|x| -x * x + 4.0 * x, &domain, "discrete", &Options::default())
///     .unwrap();
/// assert_eq!((x, fx), (2.0, 4.0));
///
/// let err = optimize(|x| x, &domain, "bogus", &Options::default()).unwrap_err();
/// assert!(err.is_invalid_argument());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidMode`] if `mode` is not `"discrete"` or
/// `"continuous"`, and otherwise fails as [`dispatch`] does.
pub fn optimize<F>(
    f: F,
    domain: &Domain,
    mode: &str,
    options: &Options,
) -> Result<(f64, f64), Error>
where
    F: Fn(f64) -> f64,
{
    let mode: Mode = mode.parse()?;
    let objective = Objective::new(f);
    dispatch(&objective, &objective, domain, mode, options).map(|solution| solution.pair())
}
