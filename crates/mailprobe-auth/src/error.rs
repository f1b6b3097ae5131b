//! Error types for token acquisition

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors that can occur while acquiring a token
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request never reached the endpoint or the connection failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Token endpoint rejected the request
    #[error("Token endpoint error {status}: {body}")]
    ApiError { status: u16, body: String },

    /// Response did not contain a usable token
    #[error("Failed to parse token response: {0}")]
    ParseError(String),
}
