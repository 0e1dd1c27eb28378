//! Typed endpoint wrappers

use super::client::ApiClient;
use super::error::ApiError;
use super::transport::{Body, Method, Part, Transport};
use crate::model::{
    Ack, AdminSignupRequest, ApplicationList, ApplicationReply, ApplicationsQuery,
    CandidacyStatus, CandidateApplication, ConfigReply, ElectionConfig, ElectionConfigUpdate,
    ElectionResults, Envelope, LoginRequest, LoginResponse, NewVoter, Notification,
    NotificationDraft, NotificationList, ReportDraft, ReportList, ReviewDecision, SignupRequest,
    Voter, VoterList, VoterReport, VoterUpdate,
};

/// Server message of an acknowledgement, if it sent a non-empty one
fn message<R>(envelope: Envelope<R>) -> Option<String> {
    envelope.message.filter(|m| !m.is_empty())
}

impl<T: Transport> ApiClient<T> {
    // Auth

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        Ok(self
            .post_json::<_, LoginResponse>("/auth/login", request)
            .await?
            .data)
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<Option<String>, ApiError> {
        self.post_json::<_, Ack>("/auth/signup", request)
            .await
            .map(message)
    }

    pub async fn admin_signup(
        &self,
        request: &AdminSignupRequest,
    ) -> Result<Option<String>, ApiError> {
        self.post_json::<_, Ack>("/auth/admin-signup", request)
            .await
            .map(message)
    }

    // Voters

    pub async fn voters(&self) -> Result<Vec<Voter>, ApiError> {
        Ok(self.get::<VoterList>("/voters", &[]).await?.data.voters)
    }

    pub async fn add_voter(&self, voter: &NewVoter) -> Result<Option<String>, ApiError> {
        self.post_json::<_, Ack>("/voters", voter).await.map(message)
    }

    pub async fn update_voter(
        &self,
        voter_id: &str,
        update: &VoterUpdate,
    ) -> Result<Option<String>, ApiError> {
        let path = format!("/voter/{}", urlencoding::encode(voter_id));
        self.put_json::<_, Ack>(&path, update).await.map(message)
    }

    // Candidate applications

    pub async fn applications(
        &self,
        query: &ApplicationsQuery,
    ) -> Result<Vec<CandidateApplication>, ApiError> {
        let params = query.to_params();
        Ok(self
            .get::<ApplicationList>("/candidate-applications", &params)
            .await?
            .data
            .applications)
    }

    /// The caller's eligibility, profile, election config and application.
    /// `success: false` is reported in the status, not as an error.
    pub async fn my_candidacy(&self) -> Result<CandidacyStatus, ApiError> {
        let envelope = self
            .fetch::<CandidacyStatus>(Method::Get, "/candidate-applications/me", &[], Body::Empty)
            .await?;
        let mut status = envelope.data;
        status.success = envelope.success == Some(true);
        status.message = envelope.message.filter(|m| !m.is_empty());
        Ok(status)
    }

    pub async fn submit_application(&self, parts: Vec<Part>) -> Result<Option<String>, ApiError> {
        self.post_multipart::<Ack>("/candidate-applications", parts)
            .await
            .map(message)
    }

    /// Record a decision; returns the updated application when the server sends it
    pub async fn review_application(
        &self,
        application_id: &str,
        decision: &ReviewDecision,
    ) -> Result<(Option<CandidateApplication>, Option<String>), ApiError> {
        let path = format!(
            "/candidate-applications/{}/review",
            urlencoding::encode(application_id)
        );
        let envelope = self.put_json::<_, ApplicationReply>(&path, decision).await?;
        let message = envelope.message.filter(|m| !m.is_empty());
        Ok((envelope.data.application, message))
    }

    // Election config

    pub async fn election_config(&self) -> Result<ElectionConfig, ApiError> {
        Ok(self
            .get::<ConfigReply>("/election-config", &[])
            .await?
            .data
            .config
            .unwrap_or_default())
    }

    pub async fn save_election_config(
        &self,
        update: &ElectionConfigUpdate,
    ) -> Result<Option<String>, ApiError> {
        self.put_json::<_, Ack>("/election-config", update)
            .await
            .map(message)
    }

    pub async fn send_deadline_reminder(&self) -> Result<Option<String>, ApiError> {
        self.post_json::<_, Ack>(
            "/election-config/nomination-deadline-reminder",
            &serde_json::json!({}),
        )
        .await
        .map(message)
    }

    // Notifications

    pub async fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        Ok(self
            .get::<NotificationList>("/notifications", &[])
            .await?
            .data
            .notifications)
    }

    pub async fn send_notification(
        &self,
        draft: &NotificationDraft,
    ) -> Result<Option<String>, ApiError> {
        self.post_json::<_, Ack>("/notifications", draft)
            .await
            .map(message)
    }

    // Reports

    pub async fn submit_report(&self, draft: &ReportDraft) -> Result<Option<String>, ApiError> {
        self.post_json::<_, Ack>("/reports", draft).await.map(message)
    }

    pub async fn reports(&self) -> Result<Vec<VoterReport>, ApiError> {
        Ok(self.get::<ReportList>("/reports", &[]).await?.data.reports)
    }

    // Results

    pub async fn election_results(&self) -> Result<ElectionResults, ApiError> {
        Ok(self
            .get::<ElectionResults>("/election-results", &[])
            .await?
            .data)
    }
}
