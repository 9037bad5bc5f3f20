//! Docket record from the `dockets` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single docket.
///
/// Related objects (`court`, `clusters`, `audio_files`, `assigned_to`, ...) are
/// API URLs or ids and are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Docket {
    /// Docket id.
    pub id: u64,

    /// Link to the docket page on the website.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub absolute_url: String,

    /// API URL of this docket.
    #[serde(default)]
    pub resource_uri: Option<String>,

    /// Court API URL.
    #[serde(default)]
    pub court: Option<String>,

    /// Court id (e.g. "scotus", "ca9").
    #[serde(default)]
    pub court_id: Option<String>,

    /// Where the case was appealed from (court API URL).
    #[serde(default)]
    pub appeal_from: Option<String>,

    #[serde(default)]
    pub appeal_from_str: Option<String>,

    #[serde(default)]
    pub appellate_case_type_information: Option<String>,

    #[serde(default)]
    pub appellate_fee_status: Option<String>,

    /// Judge assigned to the case (person API URL).
    #[serde(default)]
    pub assigned_to: Option<String>,

    #[serde(default)]
    pub assigned_to_str: Option<String>,

    /// Judge the case was referred to.
    #[serde(default)]
    pub referred_to: Option<Value>,

    #[serde(default)]
    pub referred_to_str: Option<String>,

    /// Oral argument recordings (API URLs).
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub audio_files: Vec<String>,

    /// Opinion clusters (API URLs).
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub clusters: Vec<String>,

    /// Panel members.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub panel: Vec<Value>,

    #[serde(default)]
    pub panel_str: Option<String>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tags: Vec<Value>,

    /// Whether the docket is hidden from search engines.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub blocked: bool,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub case_name: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub case_name_full: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub case_name_short: String,

    #[serde(default)]
    pub cause: Option<String>,

    #[serde(default)]
    pub date_argued: Option<String>,

    #[serde(default)]
    pub date_blocked: Option<String>,

    #[serde(default)]
    pub date_cert_denied: Option<String>,

    #[serde(default)]
    pub date_cert_granted: Option<String>,

    #[serde(default)]
    pub date_created: Option<String>,

    #[serde(default)]
    pub date_filed: Option<String>,

    #[serde(default)]
    pub date_last_filing: Option<String>,

    #[serde(default)]
    pub date_last_index: Option<String>,

    #[serde(default)]
    pub date_modified: Option<String>,

    #[serde(default)]
    pub date_reargued: Option<String>,

    #[serde(default)]
    pub date_reargument_denied: Option<String>,

    #[serde(default)]
    pub date_terminated: Option<String>,

    #[serde(default)]
    pub docket_number: Option<String>,

    #[serde(default)]
    pub docket_number_core: Option<String>,

    #[serde(default)]
    pub federal_defendant_number: Option<i64>,

    #[serde(default)]
    pub federal_dn_case_type: Option<String>,

    #[serde(default)]
    pub federal_dn_judge_initials_assigned: Option<String>,

    #[serde(default)]
    pub federal_dn_judge_initials_referred: Option<String>,

    #[serde(default)]
    pub federal_dn_office_code: Option<String>,

    /// Internet Archive paths.
    #[serde(default)]
    pub filepath_ia: Option<String>,

    #[serde(default)]
    pub filepath_ia_json: Option<String>,

    #[serde(default)]
    pub ia_date_first_change: Option<String>,

    #[serde(default)]
    pub ia_needs_upload: Option<bool>,

    #[serde(default)]
    pub ia_upload_failure_count: Option<i64>,

    /// FJC Integrated Database record.
    #[serde(default)]
    pub idb_data: Option<Value>,

    #[serde(default)]
    pub jurisdiction_type: Option<String>,

    #[serde(default)]
    pub jury_demand: Option<String>,

    #[serde(default)]
    pub mdl_status: Option<String>,

    #[serde(default)]
    pub nature_of_suit: Option<String>,

    /// Originating court information (API URL or nested object).
    #[serde(default)]
    pub original_court_info: Option<Value>,

    #[serde(default)]
    pub pacer_case_id: Option<String>,

    #[serde(default)]
    pub parent_docket: Option<Value>,

    #[serde(default)]
    pub slug: Option<String>,

    /// Source code describing how the docket was obtained.
    #[serde(default)]
    pub source: Option<i64>,
}

impl Docket {
    /// Get the case name, falling back to the full then short name.
    #[must_use]
    pub fn case_name_or_default(&self) -> &str {
        [&self.case_name, &self.case_name_full, &self.case_name_short]
            .into_iter()
            .find(|name| !name.is_empty())
            .map_or("Unknown case", String::as_str)
    }

    /// Check if the case has been terminated.
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        self.date_terminated.is_some()
    }
}
