use std::{num::ParseIntError, str::FromStr};

use thiserror::Error;

/// The candidate inputs of a search.
#[derive(Debug, Clone, PartialEq)]
pub enum Domain {
    /// A finite sequence of candidates, scanned in order.
    Points(Vec<f64>),

    /// A closed interval `[lower, upper]`.
    Interval([f64; 2]),
}

/// Errors from parsing or interpreting a [`Domain`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("unrecognized domain {text:?}")]
    Unrecognized { text: String },

    #[error("invalid number {text:?} in domain")]
    InvalidNumber { text: String },

    #[error("invalid range bound in domain")]
    InvalidRange(#[from] ParseIntError),

    #[error("expected an interval (lower, upper), found {len} points")]
    NotAnInterval { len: usize },

    #[error("interval bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error("interval is inverted: lower {lower} is above upper {upper}")]
    InvertedInterval { lower: f64, upper: f64 },
}

impl Domain {
    /// Returns the candidates of a discrete scan.
    ///
    /// An interval is a sequence of its two bounds.
    #[must_use]
    pub fn points(&self) -> &[f64] {
        match self {
            Self::Points(points) => points,
            Self::Interval(bounds) => bounds,
        }
    }

    /// Returns the bounds of a continuous search.
    ///
    /// # Errors
    ///
    /// Returns an error for a points domain, or for an interval whose bounds
    /// are not finite or not ordered.
    pub fn interval(&self) -> Result<[f64; 2], DomainError> {
        let [lower, upper] = match self {
            Self::Interval(bounds) => *bounds,
            Self::Points(points) => {
                return Err(DomainError::NotAnInterval { len: points.len() });
            }
        };

        if let Some(value) = [lower, upper].into_iter().find(|v| !v.is_finite()) {
            return Err(DomainError::NonFiniteBound { value });
        }
        if lower > upper {
            return Err(DomainError::InvertedInterval { lower, upper });
        }

        Ok([lower, upper])
    }
}

impl From<Vec<f64>> for Domain {
    fn from(points: Vec<f64>) -> Self {
        Self::Points(points)
    }
}

impl From<[f64; 2]> for Domain {
    fn from(bounds: [f64; 2]) -> Self {
        Self::Interval(bounds)
    }
}

/// Parses the textual forms of a domain.
///
/// - `(a, b)`: an interval
/// - `[x, y, z]` or `x,y,z`: explicit points
/// - `lo..=hi` or `lo..hi`: the integers of a range
///
/// ```
/// use sweep_solvers::Domain;
///
/// assert_eq!("(0, 4)".parse(), Ok(Domain::Interval([0.0, 4.0])));
/// assert_eq!("-1..=1".parse(), Ok(Domain::Points(vec![-1.0, 0.0, 1.0])));
/// assert!("not-a-tuple".parse::<Domain>().is_err());
/// ```
impl FromStr for Domain {
    type Err = DomainError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();

        if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
            return match parse_list(inner)?.as_slice() {
                &[lower, upper] => Ok(Self::Interval([lower, upper])),
                _ => Err(unrecognized(text)),
            };
        }

        if let Some(inner) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            return parse_list(inner).map(Self::Points);
        }

        if let Some((lo, hi)) = text.split_once("..=") {
            let (lo, hi) = (parse_int(lo)?, parse_int(hi)?);
            return Ok(Self::Points((lo..=hi).map(f64::from).collect()));
        }

        if let Some((lo, hi)) = text.split_once("..") {
            let (lo, hi) = (parse_int(lo)?, parse_int(hi)?);
            return Ok(Self::Points((lo..hi).map(f64::from).collect()));
        }

        if text.is_empty() {
            return Err(unrecognized(text));
        }

        parse_list(text).map(Self::Points)
    }
}

fn unrecognized(text: &str) -> DomainError {
    DomainError::Unrecognized {
        text: text.to_owned(),
    }
}

/// Parses comma-separated numbers; blank input is an empty list.
fn parse_list(text: &str) -> Result<Vec<f64>, DomainError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(str::trim)
        .map(|item| {
            item.parse().map_err(|_| DomainError::InvalidNumber {
                text: item.to_owned(),
            })
        })
        .collect()
}

fn parse_int(text: &str) -> Result<i32, DomainError> {
    Ok(text.trim().parse()?)
}
