//! CourtListener API Client
//!
//! A typed async client for the CourtListener REST API. Builds authenticated GET
//! requests for the dockets, opinions, search and originating-court-information
//! endpoints and decodes the JSON bodies into record types.
//!
//! # Features
//!
//! - **Typed responses**: every list endpoint returns a [`PaginatedResponse`]
//! - **Tolerant counts**: `count` decodes from a number, a numeric string, or a
//!   URL (reported as unknown), see [`PaginationCount`]
//! - **Pluggable transport**: swap the reqwest default for any [`HttpTransport`]
//! - **Manual paging**: feed [`PaginatedResponse::next_cursor`] back as `cursor`
//!
//! # Example
//!
//! ```no_run
//! use courtlistener_client::{CourtListenerClient, Config, QueryParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), courtlistener_client::ClientError> {
//!     let config = Config::new(Some("clerk@example.com".to_string()));
//!     let client = CourtListenerClient::new(config)?;
//!
//!     let page = client.dockets(&QueryParams::from([("court", "scotus")])).await?;
//!     println!("{} dockets", page.count);
//!
//!     if let Some(cursor) = page.next_cursor() {
//!         let params = QueryParams::from([("court", "scotus")]).with_cursor(cursor);
//!         let _next = client.dockets(&params).await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{CourtListenerClient, QueryParams};
pub use config::Config;
pub use error::{ClientError, ClientResult};
pub use models::{PaginatedResponse, PaginationCount};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
