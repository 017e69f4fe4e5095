//! Error types for the `alpaca-rs` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, AlpacaError>`.
//!
//! [`AlpacaError`] covers:
//! - **Configuration errors**: No credentials selected, or an empty credential field
//! - **Validation errors**: Missing required fields, unknown enum tokens
//! - **API errors**: Structured `{"code", "message"}` error responses
//! - **HTTP status errors**: Error status codes with an unstructured body
//! - **HTTP transport errors**: Network, TLS, timeout failures
//! - **Cancellation**: The caller's cancellation token fired mid-request
//! - **Decode errors**: Success bodies that don't match the expected shape

use std::fmt;

use reqwest::StatusCode;

/// Error body shape returned by the Alpaca API.
#[derive(Debug, Clone, serde::Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
}

/// A structured error response returned by the Alpaca REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Alpaca error code (e.g. `40010001`), when the body carries one.
    pub code: Option<i64>,
    /// Human-readable description of the error.
    pub message: String,
    /// The raw response body, trimmed.
    pub body: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(
                f,
                "{} (HTTP {}, code {code})",
                self.message,
                self.status.as_u16()
            ),
            None => write!(f, "{} (HTTP {})", self.message, self.status.as_u16()),
        }
    }
}

/// All possible errors produced by the `alpaca-rs` client.
#[derive(Debug, thiserror::Error)]
pub enum AlpacaError {
    /// No credential scheme has been selected on the client.
    #[error("authentication method is not set")]
    AuthNotConfigured,

    /// The selected credential scheme has an empty field.
    #[error("missing credential: {0} is not set")]
    MissingCredential(&'static str),

    /// A request failed client-side validation and was never sent.
    #[error("invalid request: {0}")]
    Validation(String),

    /// An error response returned by the Alpaca REST API.
    #[error("API error: {0}")]
    Api(ApiError),

    /// The server returned an error status with a body that isn't an API error.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`; no response was received.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The caller's cancellation token fired before the request completed.
    #[error("request cancelled")]
    Cancelled,

    /// A success response body could not be decoded into the expected type.
    #[error("failed to decode HTTP {status} response: {source}")]
    Decode {
        /// The HTTP status code.
        status: StatusCode,
        /// The raw response body text.
        body: String,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// A request payload could not be encoded.
    #[error("failed to encode request: {0}")]
    Encode(String),

    /// An error building or parsing a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl AlpacaError {
    /// The HTTP status attached to this error, if a response was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(err) => Some(err.status),
            Self::HttpStatus { status, .. } | Self::Decode { status, .. } => Some(*status),
            Self::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Whether the server was still throttling when the retry budget ran out.
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(StatusCode::TOO_MANY_REQUESTS)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AlpacaError>;
