//! Candidate application screen (voter side)

use crate::api::{ApiClient, Transport};
use crate::error::{message_or, RequestContext, ViewError};
use crate::forms::{CandidacyForm, FormError};
use crate::model::{CandidacyStatus, CandidateApplication, ElectionConfig, Voter};

use super::Saved;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidacyView {
    pub status: CandidacyStatus,
    /// An application went through in this session; stays set even when
    /// the status could not be reloaded afterwards
    pub submitted: bool,
}

impl CandidacyView {
    pub async fn load<T: Transport>(api: &ApiClient<T>) -> Result<Self, ViewError> {
        let status = api
            .my_candidacy()
            .await
            .or_fallback("Failed to load application status")?;
        Ok(Self {
            status,
            submitted: false,
        })
    }

    pub fn can_apply(&self) -> bool {
        !self.submitted && self.status.can_apply()
    }

    /// Why the form is closed, when there is no application to show instead
    pub fn blocked_reason(&self) -> Option<&str> {
        if self.submitted && self.application().is_none() {
            return Some("Your application was submitted. Its status is not available yet.");
        }
        self.status.blocked_reason()
    }

    pub fn voter(&self) -> Option<&Voter> {
        self.status.voter.as_ref()
    }

    pub fn config(&self) -> Option<&ElectionConfig> {
        self.status.config.as_ref()
    }

    pub fn application(&self) -> Option<&CandidateApplication> {
        self.status.application.as_ref()
    }

    /// Submit the form and reload the status.
    ///
    /// The form is checked first, then eligibility; either failure returns
    /// before anything is sent. Once the server accepts the application the
    /// form stays closed, whether or not the reload succeeds.
    pub async fn submit<T: Transport>(
        &mut self,
        api: &ApiClient<T>,
        form: CandidacyForm,
    ) -> Result<Saved, ViewError> {
        form.validate()?;
        if !self.can_apply() {
            let reason = self
                .blocked_reason()
                .unwrap_or("You have already applied.")
                .to_string();
            return Err(FormError::NotEligible(reason).into());
        }

        let position = form.position.trim().to_string();
        let parts = form.into_parts()?;
        let message = api
            .submit_application(parts)
            .await
            .or_fallback("Failed to submit application")?;
        tracing::info!(position = %position, "Candidate application submitted");

        let reload = Self::load(api).await.map(|view| self.status = view.status);
        self.submitted = true;
        Ok(Saved::new(message_or(message, "Application submitted"), reload))
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::api::Attachment;
    use crate::model::ApplicationStatus;
    use serde_json::json;

    fn open_status() -> serde_json::Value {
        json!({
            "success": true,
            "eligible": true,
            "voter": {"voter_id": "1021", "full_name": "Asha K"},
            "config": {"phase": "nomination"}
        })
    }

    fn complete_form() -> CandidacyForm {
        CandidacyForm {
            position: "Secretary".to_string(),
            statement: "Minutes on time".to_string(),
            declaration: true,
            identity_proof: Some(Attachment::new("id.pdf", b"id".to_vec())),
            membership_proof: Some(
                Attachment::new("card.png", b"card".to_vec()).with_content_type("image/png"),
            ),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_load_reads_envelope_flags() {
        let mock = MockApi::new()
            .route("GET", "/candidate-applications/me", 200, open_status())
            .start()
            .await;
        let view = CandidacyView::load(&mock.client()).await.unwrap();
        assert!(view.status.success);
        assert!(view.can_apply());
        assert_eq!(view.voter().and_then(|v| v.display_name()), Some("Asha K"));
    }

    #[tokio::test]
    async fn test_success_false_blocks_form() {
        let mock = MockApi::new()
            .route(
                "GET",
                "/candidate-applications/me",
                200,
                json!({"success": false, "eligible": true, "message": "Profile incomplete"}),
            )
            .start()
            .await;
        let view = CandidacyView::load(&mock.client()).await.unwrap();
        assert!(!view.can_apply());
        assert_eq!(view.status.message.as_deref(), Some("Profile incomplete"));
    }

    #[tokio::test]
    async fn test_incomplete_form_sends_nothing() {
        let mock = MockApi::new()
            .route("GET", "/candidate-applications/me", 200, open_status())
            .start()
            .await;
        let client = mock.client();
        let mut view = CandidacyView::load(&client).await.unwrap();

        let mut form = complete_form();
        form.identity_proof = None;
        let err = view.submit(&client, form).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Identity proof and membership proof are required"
        );

        let mut form = complete_form();
        form.declaration = false;
        let err = view.submit(&client, form).await.unwrap_err();
        assert_eq!(err.to_string(), "You must accept the declaration to continue");

        assert!(mock.hits_for("POST", "/candidate-applications").is_empty());
    }

    #[tokio::test]
    async fn test_ineligible_voter_cannot_submit() {
        let mock = MockApi::new()
            .route(
                "GET",
                "/candidate-applications/me",
                200,
                json!({"success": true, "eligible": false, "eligibility_reason": "Membership lapsed"}),
            )
            .start()
            .await;
        let client = mock.client();
        let mut view = CandidacyView::load(&client).await.unwrap();

        let err = view.submit(&client, complete_form()).await.unwrap_err();
        assert_eq!(err.to_string(), "Membership lapsed");
        assert!(mock.hits_for("POST", "/candidate-applications").is_empty());
    }

    #[tokio::test]
    async fn test_submit_posts_multipart_and_reloads() {
        let mock = MockApi::new()
            .route("GET", "/candidate-applications/me", 200, open_status())
            .route(
                "POST",
                "/candidate-applications",
                201,
                json!({"success": true, "message": "Application received"}),
            )
            .start()
            .await;
        let client = mock.client();
        let mut view = CandidacyView::load(&client).await.unwrap();

        let saved = view.submit(&client, complete_form()).await.unwrap();
        assert_eq!(saved.message, "Application received");
        assert!(saved.reload_error.is_none());
        assert!(!view.can_apply());

        let post = &mock.hits_for("POST", "/candidate-applications")[0];
        assert!(post.body.contains("name=\"position\""));
        assert!(post.body.contains("name=\"declaration\""));
        assert!(post.body.contains("filename=\"id.pdf\""));
        assert!(!post.body.contains("name=\"supporting_document\""));
        assert_eq!(mock.hits_for("GET", "/candidate-applications/me").len(), 2);
        assert_eq!(view.application().and_then(|a| a.status), None::<ApplicationStatus>);
    }

    #[tokio::test]
    async fn test_accepted_submit_survives_failed_reload() {
        let mock = MockApi::new()
            .route(
                "POST",
                "/candidate-applications",
                201,
                json!({"success": true, "message": "Application received"}),
            )
            .route("GET", "/candidate-applications/me", 500, json!({}))
            .start()
            .await;
        let client = mock.client();
        let mut view = CandidacyView {
            status: serde_json::from_value(open_status()).unwrap(),
            submitted: false,
        };
        view.status.success = true;
        assert!(view.can_apply());

        let saved = view.submit(&client, complete_form()).await.unwrap();
        assert_eq!(saved.message, "Application received");
        assert_eq!(
            saved.reload_error.map(|e| e.to_string()).as_deref(),
            Some("Failed to load application status")
        );
        assert_eq!(mock.hits_for("POST", "/candidate-applications").len(), 1);

        assert!(!view.can_apply());
        assert!(view.blocked_reason().is_some());
        let err = view.submit(&client, complete_form()).await.unwrap_err();
        assert!(matches!(err, ViewError::Invalid(FormError::NotEligible(_))));
        assert_eq!(mock.hits_for("POST", "/candidate-applications").len(), 1);
    }
}
