use thiserror::Error;

use sweep_core::{Model, OptimizationProblem, Snapshot};

/// A candidate `x` carried through a model and problem.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O> {
    pub x: f64,

    pub objective: f64,

    pub snapshot: Snapshot<I, O>,
}

/// The stage at which evaluating a candidate failed.
///
/// Input and objective failures both carry the problem's error type.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    #[error("failed to build model input")]
    Input(#[source] PE),

    #[error("model call failed")]
    Model(#[source] ME),

    #[error("failed to compute objective")]
    Objective(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output>,
    EvalError<<M as Model>::Error, <P as OptimizationProblem<1>>::Error>,
>;

/// Evaluates one candidate: builds the model input from `x`, calls the model,
/// then computes the objective from the input and output.
///
/// # Errors
///
/// Returns an error tagged with the stage that failed.
pub fn evaluate<M, P>(model: &M, problem: &P, x: f64) -> EvaluateResult<M, P>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&[x]).map_err(EvalError::Input)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let objective = problem
        .objective(&input, &output)
        .map_err(EvalError::Objective)?;

    Ok(Evaluation {
        x,
        objective,
        snapshot: Snapshot::new(input, output),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use sweep_core::Objective;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("negative input {0}")]
    struct NegativeInput(f64);

    struct SqrtModel;

    impl Model for SqrtModel {
        type Input = f64;
        type Output = f64;
        type Error = NegativeInput;

        fn call(&self, x: &f64) -> Result<f64, Self::Error> {
            if *x < 0.0 {
                Err(NegativeInput(*x))
            } else {
                Ok(x.sqrt())
            }
        }
    }

    #[test]
    fn captures_objective_and_snapshot() {
        let objective = Objective::new(|x: f64| -x * x + 4.0 * x);

        let eval = evaluate(&objective, &objective, 1.0).expect("infallible");

        assert_relative_eq!(eval.x, 1.0);
        assert_relative_eq!(eval.objective, 3.0);
        assert_relative_eq!(eval.snapshot.input, 1.0);
        assert_relative_eq!(eval.snapshot.output, 3.0);
    }

    #[test]
    fn model_failure_is_tagged() {
        let problem = Objective::new(|x: f64| x);

        let result = evaluate(&SqrtModel, &problem, -4.0);

        assert!(matches!(result, Err(EvalError::Model(NegativeInput(_)))));
    }

    #[test]
    fn problem_failures_name_their_stage() {
        let input = evaluate(&Objective::new(|x: f64| x), &RejectInput, 1.0);
        assert!(matches!(input, Err(EvalError::Input(Rejected))));

        let objective = evaluate(&Objective::new(|x: f64| x), &RejectObjective, 1.0);
        assert!(matches!(objective, Err(EvalError::Objective(Rejected))));
    }

    #[derive(Debug, Error)]
    #[error("rejected")]
    struct Rejected;

    struct RejectInput;

    impl OptimizationProblem<1> for RejectInput {
        type Input = f64;
        type Output = f64;
        type Error = Rejected;

        fn input(&self, _x: &[f64; 1]) -> Result<f64, Self::Error> {
            Err(Rejected)
        }

        fn objective(&self, _input: &f64, output: &f64) -> Result<f64, Self::Error> {
            Ok(*output)
        }
    }

    struct RejectObjective;

    impl OptimizationProblem<1> for RejectObjective {
        type Input = f64;
        type Output = f64;
        type Error = Rejected;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            Ok(x[0])
        }

        fn objective(&self, _input: &f64, _output: &f64) -> Result<f64, Self::Error> {
            Err(Rejected)
        }
    }
}
