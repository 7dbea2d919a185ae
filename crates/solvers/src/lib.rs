//! Brute-force solvers for one-dimensional optimization.
//!
//! Most callers want one of the plain-function entry points:
//!
//! ```
//! use sweep_solvers::{Domain, Options, discrete_optimize, optimize};
//!
//! let f = |x: f64| -x * x + 4.0 * x;
//!
//! let (x, fx) = discrete_optimize(f, (-10..=10).map(f64::from), true).unwrap();
//! assert_eq!((x, fx), (2.0, 4.0));
//!
//! let options = Options::default().refine(true).rounds(3);
//! let (x, _) = optimize(f, &Domain::Interval([0.0, 4.0]), "continuous", &options).unwrap();
//! assert!((x - 2.0).abs() < 1e-9);
//! ```
//!
//! The [`optimization`] module exposes the underlying solvers, which work with
//! any [`Model`](sweep_core::Model) and
//! [`OptimizationProblem`](sweep_core::OptimizationProblem) and report
//! progress to an [`Observer`](sweep_core::Observer).

pub mod optimization;

pub use optimization::Direction;
pub use optimization::dispatch::{Domain, Mode, Options, optimize};
pub use optimization::refine::continuous_optimize;
pub use optimization::scan::discrete_optimize;
