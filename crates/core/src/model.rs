/// A deterministic computation evaluated at each candidate of a search.
///
/// The solvers treat a model as a black box: they hand it an input built by
/// an [`OptimizationProblem`](crate::OptimizationProblem) and read back its
/// output. A scan may call it once per grid point across many rounds, so
/// repeated calls with the same input must agree.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Runs the model on `input`.
    ///
    /// # Errors
    ///
    /// Returns the model's own error type when `input` cannot be evaluated.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// The model input and output recorded at a solver's best point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Records an input with the output the model produced for it.
    #[must_use]
    pub const fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
