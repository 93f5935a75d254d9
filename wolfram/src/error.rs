//! Error types for the Wolfram|Alpha client

use thiserror::Error;

/// Errors that can occur when querying Wolfram|Alpha
///
/// Callers that only care whether an answer exists can treat every variant
/// the same way; the distinctions exist for logging.
#[derive(Debug, Error)]
pub enum WolframError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// HTTP request failed (connection, TLS, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Unauthorized - invalid app id
    #[error("Unauthorized - invalid app id")]
    Unauthorized,

    /// API returned a non-success status
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Response body was not the expected JSON
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// No pod in the response is marked primary, or it has no sub-pods
    #[error("Response has no primary pod")]
    NoPrimaryPod,

    /// The primary pod's text is not an integer
    #[error("Primary pod text is not an integer: {0:?}")]
    NotAnInteger(String),
}
