use thiserror::Error;

use crate::optimization::scan;

use super::ConfigError;

/// Errors that can occur during grid refinement.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("interval bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error("interval is inverted: lower {lower} is above upper {upper}")]
    InvertedInterval { lower: f64, upper: f64 },

    #[error("scan failed in round {round}")]
    Scan {
        round: usize,
        #[source]
        source: scan::Error,
    },
}
