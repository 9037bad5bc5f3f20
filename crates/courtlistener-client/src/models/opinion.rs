//! Opinion records from the `opinions` endpoint and nested in search results.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A judicial opinion.
///
/// The `opinions` endpoint and the `opinions` array of a search result share
/// this shape; fields absent from one of them stay at their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Opinion {
    /// Opinion id.
    pub id: u64,

    /// API URL of this opinion.
    #[serde(default)]
    pub resource_uri: Option<String>,

    #[serde(default)]
    pub absolute_url: Option<String>,

    /// Cluster the opinion belongs to (API URL).
    #[serde(default)]
    pub cluster: Option<String>,

    #[serde(default)]
    pub cluster_id: Option<u64>,

    /// Authoring judge; an id in search results, an API URL on the endpoint.
    #[serde(default)]
    pub author_id: Option<Value>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub author_str: Option<String>,

    /// Ids of opinions this opinion cites.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub cites: Vec<u64>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub joined_by: Vec<String>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub joined_by_ids: Vec<u64>,

    #[serde(default)]
    pub joined_by_str: Option<String>,

    #[serde(default)]
    pub download_url: Option<String>,

    #[serde(default)]
    pub local_path: Option<String>,

    #[serde(default)]
    pub meta: Option<Meta>,

    #[serde(default)]
    pub ordering_key: Option<i64>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub per_curiam: bool,

    #[serde(default)]
    pub sha1: Option<String>,

    /// Highlighted excerpt (search results only).
    #[serde(default)]
    pub snippet: Option<String>,

    /// Opinion type code (e.g. "010combined", "020lead").
    #[serde(default, rename = "type")]
    pub opinion_type: Option<String>,

    #[serde(default)]
    pub page_count: Option<u32>,

    #[serde(default)]
    pub date_created: Option<String>,

    #[serde(default)]
    pub date_modified: Option<String>,

    #[serde(default)]
    pub extracted_by_ocr: Option<bool>,

    #[serde(default)]
    pub plain_text: Option<String>,

    #[serde(default)]
    pub html: Option<String>,

    #[serde(default)]
    pub html_with_citations: Option<String>,

    #[serde(default)]
    pub xml_harvard: Option<String>,
}

impl Opinion {
    /// Check if the opinion cites any other opinion.
    #[must_use]
    pub fn is_cited(&self) -> bool {
        !self.cites.is_empty()
    }

    /// BM25 relevance score, when the response carried one.
    #[must_use]
    pub fn score(&self) -> Option<f64> {
        Some(self.meta.as_ref()?.score.as_ref()?.bm25)
    }
}

/// Common metadata attached to search hits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub date_created: Option<String>,

    /// Present when results are ordered by relevance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
}

/// BM25 relevance score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub bm25: f64,
}
