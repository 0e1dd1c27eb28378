//! Pages
//!
//! One component per screen in the route table.

pub mod account;
pub mod applications;
pub mod candidacy;
pub mod dashboard;
pub mod nomination;
pub mod notifications;
pub mod reports;
pub mod results;
pub mod voters;

pub use account::{AdminSignup, Landing, Login, Signup};
pub use applications::CandidateApplications;
pub use candidacy::CandidateApplication;
pub use dashboard::{AdminDashboard, AdminVoting, VoterDashboard};
pub use nomination::NominationPortal;
pub use notifications::{Notifications, SendNotification};
pub use reports::{AdminReports, ReportVoterError};
pub use results::ElectionResults;
pub use voters::{AddVoter, AdminVotersList, VotersList};
