//! Admin and voter dashboards

use crate::api::{ApiClient, Transport};
use crate::error::{RequestContext, ViewError};
use crate::model::{CandidacyStatus, Notification, Phase};
use crate::prefs::DismissedNotifications;
use crate::router::Route;
use crate::session::{KeyValueStore, SessionContext};

/// A navigation card on a dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub title: &'static str,
    pub description: &'static str,
    pub route: Route,
}

pub const ADMIN_TILES: [Tile; 7] = [
    Tile {
        title: "Add New Voter",
        description: "Register new voters to the election system.",
        route: Route::AddVoter,
    },
    Tile {
        title: "Approve Candidates",
        description: "Review candidate applications and approve or reject them.",
        route: Route::AdminCandidateApplications,
    },
    Tile {
        title: "Voter Reports",
        description: "Review reports voters submitted about mistakes in their details.",
        route: Route::AdminReports,
    },
    Tile {
        title: "View Voters",
        description: "See the complete list of voters and edit their details.",
        route: Route::AdminVotersList,
    },
    Tile {
        title: "Send Notification",
        description: "Send announcements that appear on voter dashboards.",
        route: Route::SendNotification,
    },
    Tile {
        title: "Nomination Portal",
        description: "Set the election phase and the nomination deadline.",
        route: Route::AdminNominationPortal,
    },
    Tile {
        title: "Voting",
        description: "Voting controls.",
        route: Route::AdminVoting,
    },
];

pub const VOTER_TILES: [Tile; 5] = [
    Tile {
        title: "Voters List",
        description: "Look up registered voters by voter ID.",
        route: Route::VotersList,
    },
    Tile {
        title: "Apply as Candidate",
        description: "Submit your candidacy while nominations are open.",
        route: Route::CandidateApplication,
    },
    Tile {
        title: "Notifications",
        description: "Announcements from the election committee.",
        route: Route::Notifications,
    },
    Tile {
        title: "Report an Error",
        description: "Tell the admins about a mistake in your voter details.",
        route: Route::ReportVoterError,
    },
    Tile {
        title: "Election Results",
        description: "Vote counts once results are published.",
        route: Route::ElectionResults,
    },
];

/// Notifications shown inline on the voter dashboard
pub const RECENT_NOTIFICATIONS: usize = 3;

/// Short description of where the voter's candidacy stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidacySummary {
    Applied {
        position: String,
        status: String,
        reference_number: Option<String>,
    },
    CanApply {
        deadline: Option<String>,
    },
    Closed {
        reason: String,
    },
}

impl CandidacySummary {
    pub fn from_status(status: &CandidacyStatus) -> Self {
        if let Some(app) = &status.application {
            return CandidacySummary::Applied {
                position: app.position.clone().unwrap_or_else(|| "-".to_string()),
                status: app.status_label().to_string(),
                reference_number: app.reference_number.clone(),
            };
        }
        if status.can_apply() {
            return CandidacySummary::CanApply {
                deadline: status
                    .config
                    .as_ref()
                    .and_then(|c| c.nomination_last_date.clone()),
            };
        }
        CandidacySummary::Closed {
            reason: status
                .blocked_reason()
                .unwrap_or("Nominations are not open.")
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoterDashboard {
    pub greeting: String,
    pub voter_id: Option<String>,
    pub unread: usize,
    pub recent: Vec<Notification>,
    pub phase: Option<Phase>,
    /// `None` when the candidacy status could not be loaded
    pub candidacy: Option<CandidacySummary>,
}

/// Load the voter dashboard. Notifications are required; the candidacy
/// summary is best-effort.
pub async fn load_voter_dashboard<T: Transport>(
    api: &ApiClient<T>,
    store: &impl KeyValueStore,
    ctx: &SessionContext,
) -> Result<VoterDashboard, ViewError> {
    let notifications = api
        .notifications()
        .await
        .or_fallback("Failed to fetch notifications")?;
    let dismissed = DismissedNotifications::load(store, ctx);
    let visible = dismissed.visible(&notifications);

    let status = match api.my_candidacy().await {
        Ok(status) => Some(status),
        Err(e) => {
            tracing::warn!("Candidacy status unavailable: {}", e);
            None
        }
    };

    Ok(VoterDashboard {
        greeting: format!("Welcome, {}", ctx.display_name()),
        voter_id: ctx.voter_id.clone(),
        unread: visible.len(),
        recent: visible
            .into_iter()
            .take(RECENT_NOTIFICATIONS)
            .cloned()
            .collect(),
        phase: status
            .as_ref()
            .and_then(|s| s.config.as_ref())
            .map(|c| c.phase),
        candidacy: status.as_ref().map(CandidacySummary::from_status),
    })
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::router::Access;
    use crate::session::{MemoryStore, Role};
    use serde_json::json;

    #[test]
    fn test_admin_tiles_are_admin_routes() {
        for tile in ADMIN_TILES {
            assert_eq!(
                tile.route.access(),
                Access::SignedIn(Some(Role::Admin)),
                "{} points at {}",
                tile.title,
                tile.route
            );
        }
        for tile in VOTER_TILES {
            assert_eq!(tile.route.access(), Access::SignedIn(Some(Role::Voter)));
        }
    }

    #[tokio::test]
    async fn test_voter_dashboard_counts_visible() {
        let mock = MockApi::new()
            .route(
                "GET",
                "/notifications",
                200,
                json!({"success": true, "notifications": [
                    {"_id": "n1", "title": "One"},
                    {"_id": "n2", "title": "Two"},
                    {"_id": "n3", "title": "Three"},
                    {"_id": "n4", "title": "Four"}
                ]}),
            )
            .route(
                "GET",
                "/candidate-applications/me",
                200,
                json!({
                    "success": true,
                    "eligible": true,
                    "config": {"phase": "nomination", "nomination_last_date": "2025-03-01"}
                }),
            )
            .start()
            .await;

        let mut store = MemoryStore::new();
        let mut ctx = SessionContext::new("jwt", Role::Voter);
        ctx.full_name = Some("Asha K".to_string());
        ctx.voter_id = Some("1021".to_string());
        DismissedNotifications::load(&store, &ctx)
            .dismiss(&mut store, "n2")
            .unwrap();

        let client = mock.client().with_token("jwt");
        let dash = load_voter_dashboard(&client, &store, &ctx).await.unwrap();

        assert_eq!(dash.greeting, "Welcome, Asha K");
        assert_eq!(dash.unread, 3);
        assert_eq!(dash.recent.len(), RECENT_NOTIFICATIONS);
        assert_eq!(dash.recent[1].id.as_deref(), Some("n3"));
        assert_eq!(dash.phase, Some(Phase::Nomination));
        assert_eq!(
            dash.candidacy,
            Some(CandidacySummary::CanApply {
                deadline: Some("2025-03-01".to_string())
            })
        );
    }

    #[tokio::test]
    async fn test_voter_dashboard_survives_missing_candidacy() {
        let mock = MockApi::new()
            .route(
                "GET",
                "/notifications",
                200,
                json!({"success": true, "notifications": []}),
            )
            .start()
            .await;
        let store = MemoryStore::new();
        let ctx = SessionContext::new("jwt", Role::Voter);

        let dash = load_voter_dashboard(&mock.client(), &store, &ctx)
            .await
            .unwrap();
        assert_eq!(dash.candidacy, None);
        assert_eq!(dash.greeting, "Welcome, there");
    }
}
