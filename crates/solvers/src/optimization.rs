//! Solvers for optimization problems: minimizing or maximizing an objective.
//!
//! An [`OptimizationProblem`] maps the solver variable `x: [f64; 1]` to a model
//! input, calls the model, and extracts a scalar objective. Solvers in this
//! module search for the `x` that minimizes or maximizes that objective by
//! brute force.
//!
//! # Solvers
//!
//! - [`scan`]: exhaustive search over a finite sequence of candidates
//! - [`refine`]: repeated grid scans over a bounded interval, optionally
//!   narrowing around the best point each round
//!
//! [`dispatch`] selects between them from a mode string, for callers that
//! configure a search at runtime.
//!
//! [`OptimizationProblem`]: sweep_core::OptimizationProblem

mod direction;
mod evaluate;
mod point;

pub use direction::Direction;
pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use point::Point;

pub mod dispatch;
pub mod refine;
pub mod scan;
