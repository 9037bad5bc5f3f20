//! Fuzzing harness for courtlistener-client.
//!
//! The fuzz targets under `fuzz/` call into these checks so the same
//! properties can also run as ordinary unit tests.
//!
//! # Usage
//!
//! ```bash
//! cd crates/courtlistener-fuzz
//! cargo +nightly fuzz run fuzz_count_parse -- -max_total_time=60
//! ```

use courtlistener_client::PaginationCount;
use courtlistener_client::models::{
    DocketsResponse, OpinionsResponse, OriginatingCourtInformationResponse, SearchResponse,
};

/// Decode arbitrary bytes as a pagination count.
///
/// Panics if a URL-shaped string does not land on the unknown count.
pub fn check_count(data: &[u8]) {
    let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let result = PaginationCount::from_json(&json);
    if json.as_str().is_some_and(|s| s.starts_with("http")) {
        assert_eq!(result.ok(), Some(PaginationCount::UNKNOWN));
    }
}

/// Decode arbitrary bytes as every response envelope.
///
/// Returns how many envelopes accepted the input.
pub fn check_envelopes(data: &[u8]) -> usize {
    [
        serde_json::from_slice::<DocketsResponse>(data).is_ok(),
        serde_json::from_slice::<OpinionsResponse>(data).is_ok(),
        serde_json::from_slice::<SearchResponse>(data).is_ok(),
        serde_json::from_slice::<OriginatingCourtInformationResponse>(data).is_ok(),
    ]
    .into_iter()
    .filter(|ok| *ok)
    .count()
}
