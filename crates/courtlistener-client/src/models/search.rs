//! Search endpoint hits and result-type selector.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Meta, Opinion};

/// Result type requested through the `type` search parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchType {
    /// Case law opinion clusters.
    #[default]
    #[serde(rename = "o")]
    Opinions,
    /// RECAP dockets with nested documents.
    #[serde(rename = "r")]
    Recap,
    /// RECAP documents, flat.
    #[serde(rename = "rd")]
    RecapDocuments,
    /// RECAP dockets, flat.
    #[serde(rename = "d")]
    Dockets,
    /// Judges.
    #[serde(rename = "p")]
    People,
    /// Oral argument audio.
    #[serde(rename = "oa")]
    OralArguments,
}

impl SearchType {
    /// Value for the `type` query parameter.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Opinions => "o",
            Self::Recap => "r",
            Self::RecapDocuments => "rd",
            Self::Dockets => "d",
            Self::People => "p",
            Self::OralArguments => "oa",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// One search hit (case law shape).
///
/// The API mixes camelCase and snake_case keys here, so each field carries its
/// own rename where needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub absolute_url: Option<String>,

    #[serde(default)]
    pub attorney: Option<String>,

    #[serde(default, rename = "caseName")]
    pub case_name: Option<String>,

    #[serde(default, rename = "caseNameFull")]
    pub case_name_full: Option<String>,

    /// Reporter citations (e.g. "597 U.S. 215").
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub citation: Vec<String>,

    #[serde(default, rename = "citeCount")]
    pub cite_count: Option<u64>,

    #[serde(default)]
    pub cluster_id: Option<u64>,

    #[serde(default)]
    pub court: Option<String>,

    #[serde(default)]
    pub court_citation_string: Option<String>,

    #[serde(default)]
    pub court_id: Option<String>,

    #[serde(default, rename = "dateArgued")]
    pub date_argued: Option<String>,

    #[serde(default, rename = "dateFiled")]
    pub date_filed: Option<String>,

    #[serde(default, rename = "dateReargued")]
    pub date_reargued: Option<String>,

    #[serde(default, rename = "dateReargumentDenied")]
    pub date_reargument_denied: Option<String>,

    #[serde(default, rename = "docketNumber")]
    pub docket_number: Option<String>,

    /// Opaque reference to the docket; not resolved.
    #[serde(default)]
    pub docket_id: Option<u64>,

    #[serde(default)]
    pub judge: Option<String>,

    #[serde(default, rename = "lexisCite")]
    pub lexis_cite: Option<String>,

    #[serde(default)]
    pub meta: Option<Meta>,

    #[serde(default, rename = "neutralCite")]
    pub neutral_cite: Option<String>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub non_participating_judge_ids: Vec<u64>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub opinions: Vec<Opinion>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub panel_ids: Vec<u64>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub panel_names: Vec<String>,

    #[serde(default)]
    pub posture: Option<String>,

    #[serde(default)]
    pub procedural_history: Option<String>,

    #[serde(default)]
    pub scdb_id: Option<String>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub sibling_ids: Vec<u64>,

    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default, rename = "suitNature")]
    pub suit_nature: Option<String>,

    #[serde(default)]
    pub syllabus: Option<String>,
}

impl SearchResult {
    /// Number of opinions nested in this hit.
    #[must_use]
    pub fn opinion_count(&self) -> usize {
        self.opinions.len()
    }

    /// Get the case name, falling back to "Untitled" if not available.
    #[must_use]
    pub fn case_name_or_default(&self) -> &str {
        self.case_name.as_deref().unwrap_or("Untitled")
    }
}
