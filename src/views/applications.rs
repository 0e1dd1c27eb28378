//! Candidate applications review board (admin)

use crate::api::{ApiClient, Transport};
use crate::display;
use crate::error::{message_or, RequestContext, ViewError};
use crate::filter::positions_of;
use crate::forms::ReviewForm;
use crate::model::{ApplicationStatus, ApplicationsQuery, CandidateApplication};

/// A labelled link to an uploaded document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLink {
    pub label: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationsBoard {
    pub applications: Vec<CandidateApplication>,
    pub query: ApplicationsQuery,
    /// Review in progress, if any
    pub review: Option<ReviewForm>,
    origin: String,
}

impl ApplicationsBoard {
    pub async fn load<T: Transport>(
        api: &ApiClient<T>,
        query: ApplicationsQuery,
    ) -> Result<Self, ViewError> {
        let applications = api
            .applications(&query)
            .await
            .or_fallback("Failed to load applications")?;
        tracing::debug!(count = applications.len(), "Applications loaded");
        Ok(Self {
            applications,
            query,
            review: None,
            origin: api.backend_origin().to_string(),
        })
    }

    /// Re-query with the current filters. On failure the list is emptied.
    pub async fn reload<T: Transport>(&mut self, api: &ApiClient<T>) -> Result<(), ViewError> {
        match api.applications(&self.query).await {
            Ok(applications) => {
                self.applications = applications;
                Ok(())
            }
            Err(e) => {
                self.applications.clear();
                Err(ViewError::request(e, "Failed to load applications"))
            }
        }
    }

    pub async fn filter_status<T: Transport>(
        &mut self,
        api: &ApiClient<T>,
        status: Option<ApplicationStatus>,
    ) -> Result<(), ViewError> {
        self.query.status = status;
        self.reload(api).await
    }

    pub async fn filter_position<T: Transport>(
        &mut self,
        api: &ApiClient<T>,
        position: Option<String>,
    ) -> Result<(), ViewError> {
        self.query.position = position.filter(|p| !p.trim().is_empty());
        self.reload(api).await
    }

    /// Position filter choices, from the loaded list
    pub fn positions(&self) -> Vec<String> {
        positions_of(&self.applications)
    }

    pub fn document_links(&self, application: &CandidateApplication) -> Vec<DocumentLink> {
        application
            .documents
            .as_ref()
            .map(|docs| {
                docs.labelled()
                    .into_iter()
                    .filter_map(|(label, path)| {
                        display::absolute_url(&self.origin, path).map(|url| DocumentLink { label, url })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Open the review panel for an application; `false` if it is unknown
    pub fn start_review(&mut self, application_id: &str) -> bool {
        let known = self
            .applications
            .iter()
            .any(|a| a.id.as_deref() == Some(application_id));
        self.review = known.then(|| ReviewForm::new(application_id));
        known
    }

    pub fn cancel_review(&mut self) {
        self.review = None;
    }

    /// Send the open review. The returned record is merged over the local
    /// copy; the panel closes only on success.
    pub async fn submit_review<T: Transport>(
        &mut self,
        api: &ApiClient<T>,
    ) -> Result<Option<String>, ViewError> {
        let Some(form) = self.review.as_ref() else {
            return Ok(None);
        };
        let decision = form.validate()?;
        let id = form.application_id.clone();

        let (updated, message) = api
            .review_application(&id, &decision)
            .await
            .or_fallback("Failed to update application")?;
        tracing::info!(application = %id, status = %decision.status, "Application reviewed");

        if let Some(updated) = updated {
            if let Some(local) = self
                .applications
                .iter_mut()
                .find(|a| a.id.as_deref() == Some(id.as_str()))
            {
                local.merge(updated);
            }
        }
        self.review = None;
        Ok(Some(message_or(message, "Application updated")))
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use serde_json::json;

    fn list_body() -> serde_json::Value {
        json!({"success": true, "applications": [
            {"_id": "a1", "full_name": "Asha", "position": "Treasurer", "status": "Pending",
             "documents": {"identity_proof": "uploads/id.pdf", "membership_proof": "https://cdn.example/m.pdf"}},
            {"_id": "a2", "full_name": "Ravi", "position": "President", "status": "Approved"},
            {"_id": "a3", "full_name": "Mira", "position": "Treasurer", "status": "Rejected"}
        ]})
    }

    #[tokio::test]
    async fn test_filters_become_query_params() {
        let mock = MockApi::new()
            .route("GET", "/candidate-applications", 200, list_body())
            .start()
            .await;
        let client = mock.client();

        let mut board = ApplicationsBoard::load(&client, ApplicationsQuery::default())
            .await
            .unwrap();
        assert_eq!(board.positions(), vec!["President", "Treasurer"]);

        board
            .filter_status(&client, Some(ApplicationStatus::Pending))
            .await
            .unwrap();
        board
            .filter_position(&client, Some("Board Member".to_string()))
            .await
            .unwrap();

        let queries: Vec<Option<String>> = mock
            .hits_for("GET", "/candidate-applications")
            .into_iter()
            .map(|h| h.query)
            .collect();
        assert_eq!(
            queries,
            vec![
                None,
                Some("status=Pending".to_string()),
                Some("status=Pending&position=Board%20Member".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_document_links_resolve_against_origin() {
        let mock = MockApi::new()
            .route("GET", "/candidate-applications", 200, list_body())
            .start()
            .await;
        let board = ApplicationsBoard::load(&mock.client(), ApplicationsQuery::default())
            .await
            .unwrap();

        let links = board.document_links(&board.applications[0]);
        let origin = mock.base_url.trim_end_matches("/api");
        assert_eq!(
            links,
            vec![
                DocumentLink {
                    label: "Identity",
                    url: format!("{}/uploads/id.pdf", origin)
                },
                DocumentLink {
                    label: "Membership",
                    url: "https://cdn.example/m.pdf".to_string()
                },
            ]
        );
        assert!(board.document_links(&board.applications[1]).is_empty());
    }

    #[tokio::test]
    async fn test_review_merges_server_record() {
        let mock = MockApi::new()
            .route("GET", "/candidate-applications", 200, list_body())
            .route(
                "PUT",
                "/candidate-applications/a1/review",
                200,
                json!({"success": true, "application": {"_id": "a1", "status": "Rejected", "admin_remarks": "Proof unreadable"}}),
            )
            .start()
            .await;
        let client = mock.client();
        let mut board = ApplicationsBoard::load(&client, ApplicationsQuery::default())
            .await
            .unwrap();

        assert!(!board.start_review("zz"));
        assert!(board.start_review("a1"));
        if let Some(review) = board.review.as_mut() {
            review.status = ApplicationStatus::Rejected;
            review.admin_remarks = "Proof unreadable".to_string();
        }

        let message = board.submit_review(&client).await.unwrap();
        assert_eq!(message.as_deref(), Some("Application updated"));
        assert!(board.review.is_none());

        let app = &board.applications[0];
        assert_eq!(app.status, Some(ApplicationStatus::Rejected));
        assert_eq!(app.full_name.as_deref(), Some("Asha"));
        assert_eq!(app.admin_remarks.as_deref(), Some("Proof unreadable"));

        let body = mock.hits_for("PUT", "/candidate-applications/a1/review")[0].json();
        assert_eq!(body, json!({"status": "Rejected", "admin_remarks": "Proof unreadable"}));
    }

    #[tokio::test]
    async fn test_failed_review_keeps_panel_open() {
        let mock = MockApi::new()
            .route("GET", "/candidate-applications", 200, list_body())
            .route("PUT", "/candidate-applications/a2/review", 500, json!({}))
            .start()
            .await;
        let client = mock.client();
        let mut board = ApplicationsBoard::load(&client, ApplicationsQuery::default())
            .await
            .unwrap();

        board.start_review("a2");
        let err = board.submit_review(&client).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to update application");
        assert!(board.review.is_some());
    }

    #[tokio::test]
    async fn test_reload_failure_empties_list() {
        let mock = MockApi::new()
            .route("GET", "/candidate-applications", 200, list_body())
            .start()
            .await;
        let client = mock.client();
        let mut board = ApplicationsBoard::load(&client, ApplicationsQuery::default())
            .await
            .unwrap();

        let broken = MockApi::new().start().await;
        let err = board.reload(&broken.client()).await.unwrap_err();
        assert_eq!(err.to_string(), "Route not found");
        assert!(board.applications.is_empty());
    }
}
