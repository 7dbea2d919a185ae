use std::convert::Infallible;

use crate::{Model, OptimizationProblem};

/// Adapts a plain scalar function so solvers can search it directly.
///
/// `Objective` is both the [`Model`] and the [`OptimizationProblem`]: the
/// solver variable is passed straight through as the model input, and the
/// model output is the objective.
///
/// ```
/// use sweep_core::{Model, Objective, OptimizationProblem};
///
/// let parabola = Objective::new(|x: f64| -x * x + 4.0 * x);
///
/// let input = parabola.input(&[2.0]).unwrap();
/// let output = parabola.call(&input).unwrap();
/// assert_eq!(parabola.objective(&input, &output).unwrap(), 4.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Objective<F> {
    function: F,
}

impl<F> Objective<F>
where
    F: Fn(f64) -> f64,
{
    /// Wraps a scalar function.
    #[must_use]
    pub const fn new(function: F) -> Self {
        Self { function }
    }

    /// Evaluates the wrapped function at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        (self.function)(x)
    }
}

impl<F> From<F> for Objective<F>
where
    F: Fn(f64) -> f64,
{
    fn from(function: F) -> Self {
        Objective::new(function)
    }
}

impl<F> Model for Objective<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok(self.eval(*input))
    }
}

impl<F> OptimizationProblem<1> for Objective<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn passes_x_through_as_input() {
        let objective = Objective::new(f64::sin);
        assert_relative_eq!(objective.input(&[1.25]).unwrap(), 1.25);
    }

    #[test]
    fn output_is_the_objective() {
        let objective = Objective::new(|x: f64| x.powi(3) - 4.0 * x);

        let output = objective.call(&2.0).unwrap();
        assert_relative_eq!(output, 0.0);
        assert_relative_eq!(objective.objective(&2.0, &output).unwrap(), 0.0);

        let output = objective.call(&-1.0).unwrap();
        assert_relative_eq!(objective.objective(&-1.0, &output).unwrap(), 3.0);
    }

    #[test]
    fn nan_output_passes_through() {
        let objective = Objective::from(|_: f64| f64::NAN);
        assert!(objective.call(&0.0).unwrap().is_nan());
    }
}
