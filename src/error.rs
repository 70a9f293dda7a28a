use thiserror::Error;

/// Failure classification for a generation call.
///
/// The first three variants are the closed set a caller can observe from a
/// generation pass; `Config` only occurs while constructing a client. The
/// `Display` output of the call variants is the exact text the rendering
/// layer shows to the user.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The network exchange never completed: connection refused, timeout,
    /// DNS failure. Retried up to the configured budget.
    #[error("⚠️ API Request Error: {0}")]
    Network(String),

    /// The upstream answered with a non-success HTTP status. Terminal, not
    /// retried.
    #[error("⚠️ API Request Error: {0}")]
    UpstreamStatus(String),

    /// The upstream answered with a success status but the body is not
    /// valid JSON.
    #[error("⚠️ API Response is not valid JSON.")]
    InvalidResponse(String),

    /// The client could not be built from the given configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GeneratorError {
    /// Only transport-level failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GeneratorError::Network(_))
    }

    /// The underlying detail carried by the variant, independent of the
    /// user-facing display text.
    pub fn detail(&self) -> &str {
        match self {
            GeneratorError::Network(detail)
            | GeneratorError::UpstreamStatus(detail)
            | GeneratorError::InvalidResponse(detail)
            | GeneratorError::Config(detail) => detail,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
