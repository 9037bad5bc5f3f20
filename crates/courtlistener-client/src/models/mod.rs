//! Data models for CourtListener API entities.
//!
//! Record fields use `#[serde(default)]` so missing keys decode to empty values,
//! and non-`Option` fields also read an explicit `null` as empty. List
//! responses share the [`PaginatedResponse`] envelope.

use serde::{Deserialize, Deserializer};

mod count;
mod docket;
mod opinion;
mod originating_court;
mod page;
mod search;

pub use count::{CountError, PaginationCount};
pub use docket::Docket;
pub use opinion::{Meta, Opinion, Score};
pub use originating_court::OriginatingCourtInformation;
pub use page::PaginatedResponse;
pub use search::{SearchResult, SearchType};

/// Response of the `dockets` endpoint.
pub type DocketsResponse = PaginatedResponse<Docket>;

/// Response of the `opinions` endpoint.
pub type OpinionsResponse = PaginatedResponse<Opinion>;

/// Response of the `search` endpoint.
pub type SearchResponse = PaginatedResponse<SearchResult>;

/// Response of the `originating-court-information` endpoint.
pub type OriginatingCourtInformationResponse = PaginatedResponse<OriginatingCourtInformation>;

/// Decode `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
