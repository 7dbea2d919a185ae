use thiserror::Error;

use crate::optimization::{refine, scan};

use super::DomainError;

/// Errors that can occur when dispatching a search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid mode {mode:?}, expected \"discrete\" or \"continuous\"")]
    InvalidMode { mode: String },

    #[error("malformed domain: {0}")]
    MalformedDomain(#[from] DomainError),

    #[error("invalid options: {0}")]
    InvalidConfig(#[from] refine::ConfigError),

    #[error("discrete search failed")]
    Scan(#[from] scan::Error),

    #[error("continuous search failed")]
    Refine(#[from] refine::Error),
}

impl Error {
    /// Returns true if the arguments were rejected before any search ran.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidMode { .. } | Self::MalformedDomain(_) | Self::InvalidConfig(_)
        )
    }
}
