//! Error types for advisor operations.

use thiserror::Error;

/// Errors that can occur while producing a suggestion.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// The provider is misconfigured (missing key, bad URL, etc.)
    #[error("advisor configuration error: {0}")]
    Configuration(String),

    /// The provider could not be reached.
    #[error("advisor network error: {0}")]
    Network(String),

    /// The provider answered with an error or an unusable response.
    #[error("advisor API error: {0}")]
    Api(String),
}
