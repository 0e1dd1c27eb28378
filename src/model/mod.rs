//! API records
//!
//! Wire shapes for everything the election API returns or accepts. Records
//! are decoded leniently: ids may be strings or numbers and nearly every
//! field is optional.

mod auth;
mod candidate;
mod election;
mod envelope;
pub(crate) mod lenient;
mod notification;
mod report;
mod voter;

pub use auth::{AdminSignupRequest, LoginRequest, LoginResponse, SignupRequest};
pub use candidate::{
    ApplicationDocuments, ApplicationList, ApplicationReply, ApplicationStatus,
    ApplicationsQuery, CandidacyStatus, CandidateApplication, ReviewDecision, POSITIONS,
};
pub use election::{
    CandidateTally, ConfigReply, ElectionConfig, ElectionConfigUpdate, ElectionResults, Phase,
    PositionResult,
};
pub use envelope::{Ack, Envelope};
pub use notification::{Notification, NotificationDraft, NotificationList};
pub use report::{ReportDraft, ReportList, VoterReport, REPORT_FIELDS};
pub use voter::{Address, NewVoter, StructuredAddress, Voter, VoterList, VoterUpdate};
