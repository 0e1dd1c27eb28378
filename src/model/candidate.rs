//! Candidate applications

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::election::ElectionConfig;
use super::lenient;
use super::voter::Voter;

/// Posts a voter can stand for
pub const POSITIONS: [&str; 4] = ["President", "Secretary", "Treasurer", "Board Member"];

/// Review state of an application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Unknown => "-",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(ApplicationStatus::Pending),
            "approved" | "approve" => Ok(ApplicationStatus::Approved),
            "rejected" | "reject" => Ok(ApplicationStatus::Rejected),
            other => Err(format!("Unknown application status: {}", other)),
        }
    }
}

/// Uploaded files attached to an application, as server-relative URLs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationDocuments {
    #[serde(default)]
    pub identity_proof: Option<String>,
    #[serde(default)]
    pub membership_proof: Option<String>,
    #[serde(default)]
    pub supporting_document: Option<String>,
    #[serde(default)]
    pub candidate_photo: Option<String>,
}

impl ApplicationDocuments {
    /// Labelled links in display order, skipping missing documents
    pub fn labelled(&self) -> Vec<(&'static str, &str)> {
        [
            ("Identity", &self.identity_proof),
            ("Membership", &self.membership_proof),
            ("Supporting", &self.supporting_document),
            ("Photo", &self.candidate_photo),
        ]
        .into_iter()
        .filter_map(|(label, url)| {
            url.as_deref()
                .filter(|u| !u.is_empty())
                .map(|u| (label, u))
        })
        .collect()
    }
}

/// A candidacy application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateApplication {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub voter_id: Option<String>,
    #[serde(default)]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub branch_name: Option<String>,
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
    #[serde(default)]
    pub documents: Option<ApplicationDocuments>,
    #[serde(default)]
    pub applied_at: Option<String>,
    #[serde(default)]
    pub admin_remarks: Option<String>,
    #[serde(default)]
    pub statement: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
}

impl CandidateApplication {
    /// Overlay the fields present in `update`, keeping the rest
    pub fn merge(&mut self, update: CandidateApplication) {
        macro_rules! overlay {
            ($($field:ident),*) => {
                $(if update.$field.is_some() { self.$field = update.$field; })*
            };
        }
        overlay!(
            id,
            full_name,
            voter_id,
            reference_number,
            position,
            branch_name,
            status,
            documents,
            applied_at,
            admin_remarks,
            statement,
            symbol,
            experience
        );
    }

    pub fn status_label(&self) -> &'static str {
        self.status.map(|s| s.as_str()).unwrap_or("-")
    }
}

/// Filters accepted by `GET /candidate-applications`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationsQuery {
    pub status: Option<ApplicationStatus>,
    pub position: Option<String>,
}

impl ApplicationsQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(status) = self.status.filter(|s| *s != ApplicationStatus::Unknown) {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(position) = self.position.as_ref().filter(|p| !p.is_empty()) {
            params.push(("position", position.clone()));
        }
        params
    }
}

/// Admin decision on an application
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewDecision {
    pub status: ApplicationStatus,
    pub admin_remarks: String,
}

/// `GET /candidate-applications/me`: everything the applicant screen shows.
///
/// `success` and `message` come from the response envelope and are filled in
/// by the client.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CandidacyStatus {
    #[serde(skip)]
    pub success: bool,
    #[serde(skip)]
    pub message: Option<String>,
    #[serde(default)]
    pub eligible: bool,
    #[serde(default)]
    pub eligibility_reason: Option<String>,
    #[serde(default)]
    pub voter: Option<Voter>,
    #[serde(default)]
    pub config: Option<ElectionConfig>,
    #[serde(default)]
    pub application: Option<CandidateApplication>,
}

impl CandidacyStatus {
    /// The form is open only to eligible voters without an application
    pub fn can_apply(&self) -> bool {
        self.success && self.eligible && self.application.is_none()
    }

    /// Why the form is closed, if it is
    pub fn blocked_reason(&self) -> Option<&str> {
        if self.can_apply() || self.application.is_some() {
            return None;
        }
        Some(
            self.eligibility_reason
                .as_deref()
                .filter(|r| !r.is_empty())
                .unwrap_or("You are not eligible to apply right now."),
        )
    }
}

/// Envelope payload for `GET /candidate-applications`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationList {
    #[serde(default)]
    pub applications: Vec<CandidateApplication>,
}

/// Envelope payload for review and submission responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationReply {
    #[serde(default)]
    pub application: Option<CandidateApplication>,
}
