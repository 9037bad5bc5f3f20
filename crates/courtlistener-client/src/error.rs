//! Error types for the CourtListener client.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Base URL or endpoint path could not be composed into a request URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL text
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a custom transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// Any status other than 200 OK
    #[error("{endpoint}: unexpected status code {status}")]
    UnexpectedStatus {
        /// Endpoint path the request targeted
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// Response body, kept for diagnosis
        body: String,
    },

    /// Response body did not match the expected shape
    #[error("{endpoint}: failed to parse response: {source}")]
    Parse {
        /// Endpoint path the request targeted
        endpoint: String,
        /// Underlying decode error (includes pagination count failures)
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Create an invalid URL error.
    #[must_use]
    pub fn invalid_url(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::InvalidUrl { url: url.into(), reason: reason.to_string() }
    }

    /// Create a transport error from a custom transport.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create an unexpected status error.
    #[must_use]
    pub fn unexpected_status(endpoint: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus { endpoint: endpoint.into(), status, body: body.into() }
    }

    /// Create a parse error.
    #[must_use]
    pub fn parse(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse { endpoint: endpoint.into(), source }
    }

    /// HTTP status code, if this error came from a non-200 response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the API answered 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status: 404, .. })
    }

    /// Returns true if the failure happened while decoding the body.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
