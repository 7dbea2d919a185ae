use std::{fmt, str::FromStr};

use super::Error;

/// Which solver a dispatched search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Exhaustive scan over explicit candidates.
    Discrete,

    /// Grid refinement over an interval.
    Continuous,
}

impl Mode {
    /// Returns the name accepted by [`Mode::from_str`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Discrete => "discrete",
            Self::Continuous => "continuous",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts exactly `"discrete"` or `"continuous"`.
impl FromStr for Mode {
    type Err = Error;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "discrete" => Ok(Self::Discrete),
            "continuous" => Ok(Self::Continuous),
            _ => Err(Error::InvalidMode {
                mode: mode.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        for mode in [Mode::Discrete, Mode::Continuous] {
            assert_eq!(mode.as_str().parse::<Mode>().ok(), Some(mode));
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }

    #[test]
    fn names_are_exact() {
        for text in ["bogus", "Discrete", " continuous", ""] {
            let err = text.parse::<Mode>().unwrap_err();
            assert!(matches!(err, Error::InvalidMode { ref mode } if mode == text));
            assert!(err.is_invalid_argument());
        }
    }
}
