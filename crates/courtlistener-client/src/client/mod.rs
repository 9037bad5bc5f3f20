//! CourtListener API client.
//!
//! Every endpoint method is one GET: compose `{base}/{endpoint}/?{params}`,
//! send it through the configured [`HttpTransport`], require 200 OK and decode
//! the JSON body. Nothing is retried, cached or paged automatically.

mod params;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

pub use params::QueryParams;

use crate::config::{Config, api, endpoints};
use crate::error::{ClientError, ClientResult};
use crate::models::{
    Docket, DocketsResponse, Opinion, OpinionsResponse, OriginatingCourtInformation,
    OriginatingCourtInformationResponse, SearchResponse,
};
use crate::transport::{HttpRequest, HttpTransport, ReqwestTransport};

/// CourtListener API client.
#[derive(Clone)]
pub struct CourtListenerClient {
    /// Executes the HTTP round trip.
    transport: Arc<dyn HttpTransport>,

    /// Base URL, parsed on every call.
    base_url: String,

    /// Identification email (never empty when set).
    email: Option<String>,
}

impl CourtListenerClient {
    /// Create a new client with the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> ClientResult<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(config: Config, transport: impl HttpTransport + 'static) -> Self {
        let email = config.identification().map(str::to_owned);
        Self { transport: Arc::new(transport), base_url: config.base_url, email }
    }

    /// Check if an identification email is configured.
    #[must_use]
    pub const fn has_email(&self) -> bool {
        self.email.is_some()
    }

    /// List dockets.
    ///
    /// Useful parameters include `cursor`, `court`, `docket_number` and `order_by`.
    pub async fn dockets(&self, params: &QueryParams) -> ClientResult<DocketsResponse> {
        self.fetch(endpoints::DOCKETS, params).await
    }

    /// Get a single docket by id.
    pub async fn get_docket(&self, id: u64) -> ClientResult<Docket> {
        self.fetch(&format!("{}/{id}", endpoints::DOCKETS), &QueryParams::new()).await
    }

    /// List opinions.
    ///
    /// Useful parameters include `cursor`, `cluster` and `fields`.
    pub async fn opinions(&self, params: &QueryParams) -> ClientResult<OpinionsResponse> {
        self.fetch(endpoints::OPINIONS, params).await
    }

    /// Get a single opinion by id.
    pub async fn get_opinion(&self, id: u64) -> ClientResult<Opinion> {
        self.fetch(&format!("{}/{id}", endpoints::OPINIONS), &QueryParams::new()).await
    }

    /// Full-text search with the `q` parameter and API defaults otherwise.
    pub async fn search(&self, query: &str) -> ClientResult<SearchResponse> {
        self.search_with_params(&QueryParams::new().with("q", query)).await
    }

    /// Search with arbitrary parameters (`q`, `type`, `order_by`, `cursor`, ...).
    pub async fn search_with_params(&self, params: &QueryParams) -> ClientResult<SearchResponse> {
        self.fetch(endpoints::SEARCH, params).await
    }

    /// List originating court information records.
    pub async fn originating_court_information(
        &self,
        params: &QueryParams,
    ) -> ClientResult<OriginatingCourtInformationResponse> {
        self.fetch(endpoints::ORIGINATING_COURT_INFORMATION, params).await
    }

    /// Get a single originating court information record by id.
    pub async fn get_originating_court_information(
        &self,
        id: u64,
    ) -> ClientResult<OriginatingCourtInformation> {
        let endpoint = format!("{}/{id}", endpoints::ORIGINATING_COURT_INFORMATION);
        self.fetch(&endpoint, &QueryParams::new()).await
    }

    /// GET `endpoint` and decode the body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the URL cannot be composed, a
    /// transport error if the round trip fails, [`ClientError::UnexpectedStatus`]
    /// for anything but 200 and [`ClientError::Parse`] if the body does not decode.
    pub async fn fetch<T>(&self, endpoint: &str, params: &QueryParams) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let request = self.build_request(endpoint, params)?;
        tracing::debug!(endpoint, url = %request.url, "Sending request");

        let response = self.transport.get(&request).await?;

        if response.status != 200 {
            tracing::warn!(endpoint, status = response.status, "Unexpected status");
            return Err(ClientError::unexpected_status(endpoint, response.status, response.text()));
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            tracing::debug!(endpoint, error = %e, "Failed to decode response");
            ClientError::parse(endpoint, e)
        })
    }

    /// Compose the request for `endpoint` without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the base URL does not parse,
    /// cannot carry a path, or `endpoint` is empty.
    pub fn build_request(&self, endpoint: &str, params: &QueryParams) -> ClientResult<HttpRequest> {
        let url = self.endpoint_url(endpoint, params)?;

        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(ref email) = self.email {
            headers.push((api::USER_EMAIL_HEADER.to_string(), email.clone()));
        }

        Ok(HttpRequest { url, headers })
    }

    /// `{base}/{endpoint}/` with base query parameters overridden by `params`.
    fn endpoint_url(&self, endpoint: &str, params: &QueryParams) -> ClientResult<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ClientError::invalid_url(&self.base_url, e))?;
        if url.cannot_be_a_base() {
            return Err(ClientError::invalid_url(&self.base_url, "URL cannot carry a path"));
        }

        let segment = endpoint.trim_matches('/');
        if segment.is_empty() {
            return Err(ClientError::invalid_url(&self.base_url, "empty endpoint path"));
        }
        let path = format!("{}/{}/", url.path().trim_end_matches('/'), segment);
        url.set_path(&path);

        let mut query: BTreeMap<String, String> = url.query_pairs().into_owned().collect();
        query.extend(params.iter().map(|(k, v)| (k.to_owned(), v.to_owned())));

        if query.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(&query);
        }

        Ok(url)
    }
}

impl std::fmt::Debug for CourtListenerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CourtListenerClient")
            .field("base_url", &self.base_url)
            .field("has_email", &self.has_email())
            .finish()
    }
}
