//! Core traits and types for brute-force one-dimensional optimization.
//!
//! This crate defines the shared abstractions the solvers build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`OptimizationProblem`]: adapts solver variables to model inputs and
//!   extracts a scalar objective from outputs
//! - [`Objective`]: wraps a plain `Fn(f64) -> f64` as both model and problem

mod model;
mod objective;
mod observer;
mod problem;

pub use objective::Objective;
pub use observer::Observer;
pub use problem::OptimizationProblem;
pub use {model::Model, model::Snapshot};
