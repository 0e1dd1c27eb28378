//! Screens
//!
//! Each screen has a load step returning its view model or a [`ViewError`],
//! and submit steps that validate locally before sending anything. The
//! browser front end renders these models; the terminal client prints them.
//!
//! [`ViewError`]: crate::error::ViewError

mod account;
mod applications;
mod candidacy;
mod dashboard;
mod nomination;
mod notifications;
mod reports;
mod results;
mod voters;

pub use account::{admin_signup, login, logout, signup};
pub use applications::{ApplicationsBoard, DocumentLink};
pub use candidacy::CandidacyView;
pub use dashboard::{
    load_voter_dashboard, CandidacySummary, Tile, VoterDashboard, ADMIN_TILES,
    RECENT_NOTIFICATIONS, VOTER_TILES,
};
pub use nomination::NominationPortal;
pub use notifications::{send_notification, NotificationFeed};
pub use reports::{load_reports, submit_report};
pub use results::{PositionStandings, ResultsView, StandingRow};
pub use voters::{add_voter, VoterRoster, VoterRow};

use crate::error::ViewError;

/// A write the server accepted, followed by a reload of the screen
#[derive(Debug)]
pub struct Saved {
    /// Server message, or the screen's default
    pub message: String,
    /// Set when the reload failed; the screen keeps what it had
    pub reload_error: Option<ViewError>,
}

impl Saved {
    pub(crate) fn new(message: String, reload: Result<(), ViewError>) -> Self {
        Self {
            message,
            reload_error: reload.err(),
        }
    }
}

/// Body of the admin voting screen until voting controls exist
pub const VOTING_PLACEHOLDER: &str = "Voting management will be available here.";
