//! Error types for ecoprompt-impact

use thiserror::Error;

/// Impact estimation error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Enum value not recognized, or numeric field outside its allowed domain
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Error {
    pub(crate) fn invalid(field: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidParameter(format!("{field} {reason}"))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
