//! Error types for the Turnkey SDK.

use thiserror::Error;

/// Main error type for the Turnkey SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or missing configuration (key material, env vars)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Key material decodes but is not usable on P-256
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Cryptographic signing error
    #[error("Signing error: {0}")]
    Signing(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Base64 or stamp envelope decoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// HTTP client construction or request building error
    #[error("HTTP error: {0}")]
    Http(String),

    /// Turnkey API error
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Error codes for Turnkey API errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The request never produced an HTTP response.
    NetworkError,
    /// The API responded with a non-success status.
    BadResponse,
}

impl ErrorCode {
    /// Wire-style name of the code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NetworkError => "NETWORK_ERROR",
            Self::BadResponse => "BAD_RESPONSE",
        }
    }
}

/// Typed error for failed Turnkey API requests.
#[derive(Error, Debug, Clone)]
pub struct ApiError {
    /// Error category.
    pub code: ErrorCode,
    /// HTTP status, when a response was received.
    pub status: Option<u16>,
    /// Server-provided message, or a generic description.
    pub message: String,
    /// Raw response body, when a response was received.
    pub body: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)?;
        if let Some(status) = self.status {
            write!(f, " (HTTP {status})")?;
        }
        Ok(())
    }
}

impl ApiError {
    /// A request that failed before any HTTP response existed.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NetworkError,
            status: None,
            message: message.into(),
            body: None,
        }
    }

    /// A non-success HTTP response.
    #[must_use]
    pub fn bad_response(status: u16, message: impl Into<String>, body: Option<String>) -> Self {
        Self {
            code: ErrorCode::BadResponse,
            status: Some(status),
            message: message.into(),
            body,
        }
    }
}
