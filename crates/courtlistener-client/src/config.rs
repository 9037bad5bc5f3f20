//! Configuration for the CourtListener client.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the CourtListener REST API.
    pub const BASE_URL: &str = "https://www.courtlistener.com/api/rest/v4";

    /// Request timeout covering the whole round trip.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Header carrying the caller's identification email.
    pub const USER_EMAIL_HEADER: &str = "X-User-Email";
}

/// Endpoint paths relative to the base URL.
pub mod endpoints {
    pub const DOCKETS: &str = "dockets";
    pub const OPINIONS: &str = "opinions";
    pub const SEARCH: &str = "search";
    pub const ORIGINATING_COURT_INFORMATION: &str = "originating-court-information";
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL every endpoint path is joined onto.
    pub base_url: String,

    /// Identification email sent as `X-User-Email` (omitted when empty).
    pub email: Option<String>,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration against the public API with an optional email.
    #[must_use]
    pub fn new(email: Option<String>) -> Self {
        Self {
            base_url: api::BASE_URL.to_string(),
            email,
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: format!("{}/api/rest/v4", base_url),
            email: None,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Replace the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the identification email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Replace the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// The email to send, if one is configured and non-empty.
    #[must_use]
    pub fn identification(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
