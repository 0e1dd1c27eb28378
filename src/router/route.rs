//! Route table
//!
//! Every screen the client can show, its path, and who may open it.

use crate::session::Role;
use std::fmt;

/// A screen reachable by path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login,
    Signup,
    AdminSignup,
    /// Role-dependent redirect to the matching dashboard
    Dashboard,
    AdminDashboard,
    AddVoter,
    AdminVotersList,
    AdminCandidateApplications,
    AdminNominationPortal,
    AdminVoting,
    AdminReports,
    SendNotification,
    VoterDashboard,
    ReportVoterError,
    VotersList,
    CandidateApplication,
    ElectionResults,
    Notifications,
}

/// Who may open a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone, signed in or not
    Public,
    /// Any signed-in user; `Some(role)` narrows it to one role
    SignedIn(Option<Role>),
}

impl Route {
    pub const ALL: [Route; 19] = [
        Route::Landing,
        Route::Login,
        Route::Signup,
        Route::AdminSignup,
        Route::Dashboard,
        Route::AdminDashboard,
        Route::AddVoter,
        Route::AdminVotersList,
        Route::AdminCandidateApplications,
        Route::AdminNominationPortal,
        Route::AdminVoting,
        Route::AdminReports,
        Route::SendNotification,
        Route::VoterDashboard,
        Route::ReportVoterError,
        Route::VotersList,
        Route::CandidateApplication,
        Route::ElectionResults,
        Route::Notifications,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::AdminSignup => "/admin-signup",
            Route::Dashboard => "/dashboard",
            Route::AdminDashboard => "/admin-dashboard",
            Route::AddVoter => "/add-voter",
            Route::AdminVotersList => "/admin-voters-list",
            Route::AdminCandidateApplications => "/admin-candidate-applications",
            Route::AdminNominationPortal => "/admin-nomination-portal",
            Route::AdminVoting => "/admin-voting",
            Route::AdminReports => "/admin-reports",
            Route::SendNotification => "/send-notification",
            Route::VoterDashboard => "/voter-dashboard",
            Route::ReportVoterError => "/report-voter-error",
            Route::VotersList => "/voters-list",
            Route::CandidateApplication => "/candidate-application",
            Route::ElectionResults => "/election-results",
            Route::Notifications => "/notifications",
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Route::Landing | Route::Login | Route::Signup | Route::AdminSignup => Access::Public,
            Route::Dashboard => Access::SignedIn(None),
            Route::AdminDashboard
            | Route::AddVoter
            | Route::AdminVotersList
            | Route::AdminCandidateApplications
            | Route::AdminNominationPortal
            | Route::AdminVoting
            | Route::AdminReports
            | Route::SendNotification => Access::SignedIn(Some(Role::Admin)),
            Route::VoterDashboard
            | Route::ReportVoterError
            | Route::VotersList
            | Route::CandidateApplication
            | Route::ElectionResults
            | Route::Notifications => Access::SignedIn(Some(Role::Voter)),
        }
    }

    /// Human readable screen title
    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Welcome",
            Route::Login => "Login",
            Route::Signup => "Sign Up",
            Route::AdminSignup => "Admin Sign Up",
            Route::Dashboard => "Dashboard",
            Route::AdminDashboard => "Admin Dashboard",
            Route::AddVoter => "Add New Voter",
            Route::AdminVotersList => "Voters List (Admin)",
            Route::AdminCandidateApplications => "Candidate Applications",
            Route::AdminNominationPortal => "Nomination Portal",
            Route::AdminVoting => "Voting",
            Route::AdminReports => "Voter Reports",
            Route::SendNotification => "Send Notification",
            Route::VoterDashboard => "Voter Dashboard",
            Route::ReportVoterError => "Report Voter Error",
            Route::VotersList => "Voters List",
            Route::CandidateApplication => "Apply as Candidate",
            Route::ElectionResults => "Election Results",
            Route::Notifications => "Notifications",
        }
    }

    /// Dashboard a role lands on
    pub fn dashboard_for(role: Role) -> Route {
        match role {
            Role::Admin => Route::AdminDashboard,
            Role::Voter => Route::VoterDashboard,
        }
    }

    /// Look up a canonical path
    pub fn from_path(path: &str) -> Option<Route> {
        let path = normalize(path);
        Route::ALL.into_iter().find(|r| r.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Old spellings still linked from bookmarks and e-mails
pub fn legacy_alias(path: &str) -> Option<Route> {
    let decoded = urlencoding::decode(path)
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| path.to_string());

    match normalize(&decoded) {
        "/voters list" => Some(Route::VotersList),
        "/admin voters list" | "/adminvoterslist" => Some(Route::AdminVotersList),
        _ => None,
    }
}

/// Strip query, fragment and trailing slashes
fn normalize(path: &str) -> &str {
    let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or("");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique_and_parse_back() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_from_path_normalizes() {
        assert_eq!(Route::from_path("/notifications/"), Some(Route::Notifications));
        assert_eq!(Route::from_path("/voters-list?page=2"), Some(Route::VotersList));
        assert_eq!(Route::from_path(""), Some(Route::Landing));
        assert_eq!(Route::from_path("/nope"), None);
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!(legacy_alias("/voters%20list"), Some(Route::VotersList));
        assert_eq!(legacy_alias("/voters list"), Some(Route::VotersList));
        assert_eq!(legacy_alias("/admin%20voters%20list"), Some(Route::AdminVotersList));
        assert_eq!(legacy_alias("/adminvoterslist"), Some(Route::AdminVotersList));
        assert_eq!(legacy_alias("/voters-list"), None);
    }

    #[test]
    fn test_access_table() {
        assert_eq!(Route::Login.access(), Access::Public);
        assert_eq!(Route::Dashboard.access(), Access::SignedIn(None));
        assert_eq!(
            Route::AdminNominationPortal.access(),
            Access::SignedIn(Some(Role::Admin))
        );
        assert_eq!(
            Route::Notifications.access(),
            Access::SignedIn(Some(Role::Voter))
        );
    }
}
