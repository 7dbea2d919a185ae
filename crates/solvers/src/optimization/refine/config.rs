use thiserror::Error;

/// Configuration for the grid refiner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    step: f64,
    refine: bool,
    rounds: usize,
}

/// Errors that can occur when validating a refiner config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step must be finite and positive")]
    Step,

    #[error("rounds must be at least 1")]
    Rounds,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, false, 1).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated step and round count.
    ///
    /// With `refine` off every round scans the same grid, so extra rounds
    /// repeat the first one.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not finite and positive, or if `rounds`
    /// is zero.
    pub fn new(step: f64, refine: bool, rounds: usize) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }
        if rounds == 0 {
            return Err(ConfigError::Rounds);
        }

        Ok(Self {
            step,
            refine,
            rounds,
        })
    }

    /// Creates a config that narrows the interval over `rounds` rounds.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Config::new`].
    pub fn refined(step: f64, rounds: usize) -> Result<Self, ConfigError> {
        Self::new(step, true, rounds)
    }

    /// Returns the step size of the first round.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns whether the interval narrows between rounds.
    #[must_use]
    pub fn refine(&self) -> bool {
        self.refine
    }

    /// Returns the number of rounds.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}
