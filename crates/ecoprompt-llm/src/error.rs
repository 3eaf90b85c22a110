//! Error types for ecoprompt-llm

use thiserror::Error;

/// LLM error type
#[derive(Debug, Error)]
pub enum Error {
    /// Provider not configured
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    /// API error
    #[error("api error: {0}")]
    Api(String),

    /// Rate limit exceeded
    #[error("rate limit exceeded")]
    RateLimit,

    /// Server error (5xx, retryable)
    #[error("server error: {0}")]
    ServerError(String),

    /// Invalid response
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Network error
    #[error("network error: {0}")]
    Network(String),

    /// Timeout
    #[error("timeout after {0}ms")]
    Timeout(u64),

    /// Measured energy rejected by the impact model
    #[error(transparent)]
    Impact(#[from] ecoprompt_impact::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
