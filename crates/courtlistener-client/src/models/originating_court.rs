//! Lower-court information for appellate dockets.

use serde::{Deserialize, Serialize};

/// A record from the `originating-court-information` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OriginatingCourtInformation {
    pub id: u64,

    #[serde(default)]
    pub resource_uri: Option<String>,

    /// Docket number in the lower court.
    #[serde(default)]
    pub docket_number: Option<String>,

    /// Lower-court judge (person API URL).
    #[serde(default)]
    pub assigned_to: Option<String>,

    #[serde(default)]
    pub assigned_to_str: Option<String>,

    #[serde(default)]
    pub ordering_judge: Option<String>,

    #[serde(default)]
    pub ordering_judge_str: Option<String>,

    #[serde(default)]
    pub court_reporter: Option<String>,

    #[serde(default)]
    pub date_disposed: Option<String>,

    #[serde(default)]
    pub date_filed: Option<String>,

    #[serde(default)]
    pub date_judgment: Option<String>,

    #[serde(default)]
    pub date_judgment_eod: Option<String>,

    /// Date the notice of appeal was filed.
    #[serde(default)]
    pub date_filed_noa: Option<String>,

    /// Date the court of appeals received the case.
    #[serde(default)]
    pub date_received_coa: Option<String>,

    #[serde(default)]
    pub date_rehearing_denied: Option<String>,

    #[serde(default)]
    pub date_created: Option<String>,

    #[serde(default)]
    pub date_modified: Option<String>,
}
