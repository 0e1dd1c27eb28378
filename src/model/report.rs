//! Voter data correction reports

use serde::{Deserialize, Serialize};

use super::lenient;

/// Fields a voter can flag as wrong
pub const REPORT_FIELDS: [&str; 6] = [
    "Full Name",
    "Date of Birth",
    "Address",
    "Phone Number",
    "Email",
    "Branch",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoterReport {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub voter_id: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for `POST /reports`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDraft {
    pub field: String,
    pub description: String,
}

/// Envelope payload for `GET /reports`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportList {
    #[serde(default)]
    pub reports: Vec<VoterReport>,
}
