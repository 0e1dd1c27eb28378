//! Navigation guard
//!
//! Pure decision functions: no I/O, no failure modes. A missing or
//! insufficient session is never an error, only a redirect.

use super::route::{legacy_alias, Access, Route};
use crate::session::{Role, Session};

/// Longest redirect chain [`settle`] will follow
pub const MAX_REDIRECTS: usize = 4;

/// Outcome of the role check for a protected route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(Route),
}

/// Decide whether a user may open a protected route.
///
/// | authenticated | required       | outcome  |
/// |---------------|----------------|----------|
/// | false         | any            | login    |
/// | true          | none           | allow    |
/// | true          | role matches   | allow    |
/// | true          | role mismatch  | login    |
pub fn check(authenticated: bool, role: Option<Role>, required: Option<Role>) -> Decision {
    if !authenticated {
        return Decision::Redirect(Route::Login);
    }

    match required {
        None => Decision::Allow,
        Some(required) if role == Some(required) => Decision::Allow,
        Some(_) => Decision::Redirect(Route::Login),
    }
}

/// What to do with a requested path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

/// Resolve one navigation step for `path`
pub fn resolve(session: &Session, path: &str) -> Navigation {
    let Some(route) = Route::from_path(path) else {
        if let Some(alias) = legacy_alias(path) {
            return Navigation::Redirect(alias);
        }
        let fallback = if session.authenticated {
            Route::Dashboard
        } else {
            Route::Landing
        };
        tracing::debug!(path, to = %fallback, "Unknown path");
        return Navigation::Redirect(fallback);
    };

    match route {
        Route::Landing if session.authenticated => Navigation::Redirect(Route::Dashboard),
        Route::Dashboard => match (session.authenticated, session.role) {
            (false, _) => Navigation::Redirect(Route::Landing),
            (true, Some(role)) => Navigation::Redirect(Route::dashboard_for(role)),
            (true, None) => Navigation::Redirect(Route::Login),
        },
        _ => match route.access() {
            Access::Public => Navigation::Render(route),
            Access::SignedIn(required) => {
                match check(session.authenticated, session.role, required) {
                    Decision::Allow => Navigation::Render(route),
                    Decision::Redirect(to) => {
                        tracing::debug!(from = %route, to = %to, "Navigation redirected");
                        Navigation::Redirect(to)
                    }
                }
            }
        },
    }
}

/// Follow redirects until a route renders
pub fn settle(session: &Session, path: &str) -> Route {
    let mut next = resolve(session, path);

    for _ in 0..MAX_REDIRECTS {
        match next {
            Navigation::Render(route) => return route,
            Navigation::Redirect(route) => next = resolve(session, route.path()),
        }
    }

    match next {
        Navigation::Render(route) | Navigation::Redirect(route) => route,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED: [Route; 14] = [
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

    #[test]
    fn test_check_table() {
        assert_eq!(check(false, None, None), Decision::Redirect(Route::Login));
        assert_eq!(
            check(false, Some(Role::Admin), Some(Role::Admin)),
            Decision::Redirect(Route::Login)
        );
        assert_eq!(check(true, Some(Role::Voter), None), Decision::Allow);
        assert_eq!(
            check(true, Some(Role::Admin), Some(Role::Admin)),
            Decision::Allow
        );
        assert_eq!(
            check(true, Some(Role::Voter), Some(Role::Admin)),
            Decision::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_anonymous_is_sent_to_login_everywhere() {
        let session = Session::anonymous();
        for route in PROTECTED {
            assert_eq!(
                resolve(&session, route.path()),
                Navigation::Redirect(Route::Login),
                "{} should require login",
                route
            );
        }
    }

    #[test]
    fn test_voter_cannot_open_admin_routes() {
        let session = Session::signed_in(Role::Voter);
        for route in PROTECTED {
            let expected = match route.access() {
                Access::SignedIn(Some(Role::Voter)) => Navigation::Render(route),
                _ => Navigation::Redirect(Route::Login),
            };
            assert_eq!(resolve(&session, route.path()), expected, "{}", route);
        }
    }

    #[test]
    fn test_admin_cannot_open_voter_routes() {
        let session = Session::signed_in(Role::Admin);
        assert_eq!(
            resolve(&session, "/notifications"),
            Navigation::Redirect(Route::Login)
        );
        assert_eq!(
            resolve(&session, "/admin-reports"),
            Navigation::Render(Route::AdminReports)
        );
    }

    #[test]
    fn test_public_routes_render_for_everyone() {
        for session in [Session::anonymous(), Session::signed_in(Role::Voter)] {
            assert_eq!(resolve(&session, "/login"), Navigation::Render(Route::Login));
            assert_eq!(resolve(&session, "/signup"), Navigation::Render(Route::Signup));
        }
    }

    #[test]
    fn test_landing_and_dashboard() {
        let anon = Session::anonymous();
        assert_eq!(resolve(&anon, "/"), Navigation::Render(Route::Landing));
        assert_eq!(resolve(&anon, "/dashboard"), Navigation::Redirect(Route::Landing));

        let admin = Session::signed_in(Role::Admin);
        assert_eq!(resolve(&admin, "/"), Navigation::Redirect(Route::Dashboard));
        assert_eq!(settle(&admin, "/"), Route::AdminDashboard);
        assert_eq!(settle(&Session::signed_in(Role::Voter), "/dashboard"), Route::VoterDashboard);
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(settle(&Session::anonymous(), "/does-not-exist"), Route::Landing);
        assert_eq!(
            settle(&Session::signed_in(Role::Voter), "/does-not-exist"),
            Route::VoterDashboard
        );
    }

    #[test]
    fn test_legacy_alias_still_guarded() {
        let voter = Session::signed_in(Role::Voter);
        assert_eq!(settle(&voter, "/voters%20list"), Route::VotersList);
        assert_eq!(settle(&voter, "/adminvoterslist"), Route::Login);
        assert_eq!(
            settle(&Session::signed_in(Role::Admin), "/admin%20voters%20list"),
            Route::AdminVotersList
        );
    }
}
