use crate::optimization::{
    Direction,
    refine::{Config, ConfigError},
};

/// Named options for a dispatched search.
///
/// Discrete mode reads only `maximize`. Continuous mode reads every field and
/// validates `step` and `rounds` into a refiner [`Config`].
///
/// With the `serde` feature, every field is optional when deserializing and
/// unknown keys are ignored. `delta_x`, `refinement` and `iterations` are
/// accepted as aliases of `step`, `refine` and `rounds`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Search for the largest objective when true, the smallest otherwise.
    pub maximize: bool,

    /// Grid spacing of the first continuous round.
    #[cfg_attr(feature = "serde", serde(alias = "delta_x"))]
    pub step: f64,

    /// Narrow the interval around the best point between rounds.
    #[cfg_attr(feature = "serde", serde(alias = "refinement"))]
    pub refine: bool,

    /// Number of continuous rounds.
    #[cfg_attr(feature = "serde", serde(alias = "iterations"))]
    pub rounds: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            maximize: true,
            step: 0.1,
            refine: false,
            rounds: 1,
        }
    }
}

impl Options {
    /// Sets the search direction.
    #[must_use]
    pub fn maximize(self, maximize: bool) -> Self {
        Self { maximize, ..self }
    }

    /// Sets the first-round grid spacing.
    #[must_use]
    pub fn step(self, step: f64) -> Self {
        Self { step, ..self }
    }

    /// Enables or disables refinement.
    #[must_use]
    pub fn refine(self, refine: bool) -> Self {
        Self { refine, ..self }
    }

    /// Sets the number of rounds.
    #[must_use]
    pub fn rounds(self, rounds: usize) -> Self {
        Self { rounds, ..self }
    }

    /// Returns the search direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        Direction::from_maximize(self.maximize)
    }

    /// Validates the continuous fields into a refiner config.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not finite and positive, or if `rounds`
    /// is zero.
    pub fn config(&self) -> Result<Config, ConfigError> {
        Config::new(self.step, self.refine, self.rounds)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn defaults() {
        let options = Options::default();

        assert!(options.maximize);
        assert_relative_eq!(options.step, 0.1);
        assert!(!options.refine);
        assert_eq!(options.rounds, 1);
        assert_eq!(options.config(), Ok(Config::default()));
    }

    #[test]
    fn builders_set_fields() {
        let options = Options::default()
            .maximize(false)
            .step(0.5)
            .refine(true)
            .rounds(4);

        assert_eq!(options.direction(), Direction::Minimize);
        assert_eq!(options.config(), Config::refined(0.5, 4));
    }

    #[test]
    fn config_rejects_bad_values() {
        assert_eq!(Options::default().step(-1.0).config(), Err(ConfigError::Step));
        assert_eq!(Options::default().rounds(0).config(), Err(ConfigError::Rounds));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_json() {
        let options: Options =
            serde_json::from_str(r#"{ "maximize": false, "rounds": 3, "colour": "blue" }"#)
                .unwrap();

        assert_eq!(options, Options::default().maximize(false).rounds(3));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn accepts_keyword_aliases() {
        let options: Options =
            serde_json::from_str(r#"{ "delta_x": 0.25, "refinement": true, "iterations": 5 }"#)
                .unwrap();

        assert_eq!(options, Options::default().step(0.25).refine(true).rounds(5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn empty_json_is_default() {
        let options: Options = serde_json::from_str("{}").unwrap();
        assert_eq!(options, Options::default());
    }
}
