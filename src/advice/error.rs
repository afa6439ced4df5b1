use thiserror::Error;

/// Failures of the AI advice provider
///
/// None of these affect ledger or budget state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdviceError {
    /// Required API key environment variable is unset or empty
    #[error("Environment variable {0} is not set")]
    MissingApiKey(String),

    /// Transport failure: connection, timeout, TLS
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Provider answered with an error (auth, rate limit, bad request)
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Provider returned no advice text")]
    EmptyResponse,

    /// The worker stopped before delivering a result
    #[error("Advice request was cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for AdviceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}
