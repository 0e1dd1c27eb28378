//! Voter error reports: submission (voter) and listing (admin)

use crate::api::{ApiClient, Transport};
use crate::error::{message_or, RequestContext, ViewError};
use crate::forms::ReportForm;
use crate::model::VoterReport;

pub async fn submit_report<T: Transport>(
    api: &ApiClient<T>,
    form: &ReportForm,
) -> Result<String, ViewError> {
    let draft = form.validate()?;
    let message = api
        .submit_report(&draft)
        .await
        .or_fallback("Failed to submit report")?;
    tracing::info!(field = %draft.field, "Report submitted");
    Ok(message_or(message, "Report submitted"))
}

pub async fn load_reports<T: Transport>(api: &ApiClient<T>) -> Result<Vec<VoterReport>, ViewError> {
    api.reports().await.or_fallback("Failed to fetch reports")
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_submit_and_list() {
        let mock = MockApi::new()
            .route("POST", "/reports", 201, json!({"success": true, "message": "Thanks"}))
            .route(
                "GET",
                "/reports",
                200,
                json!({"success": true, "reports": [
                    {"_id": "r1", "voter_id": 1021, "field": "Address", "description": "Wrong place"}
                ]}),
            )
            .start()
            .await;
        let client = mock.client();

        let form = ReportForm {
            field: "Address".to_string(),
            description: "Wrong place".to_string(),
        };
        assert_eq!(submit_report(&client, &form).await.unwrap(), "Thanks");
        assert_eq!(
            mock.hits_for("POST", "/reports")[0].json(),
            json!({"field": "Address", "description": "Wrong place"})
        );

        let reports = load_reports(&client).await.unwrap();
        assert_eq!(reports[0].voter_id.as_deref(), Some("1021"));
    }

    #[tokio::test]
    async fn test_list_failure_fallback() {
        let mock = MockApi::new()
            .route("GET", "/reports", 500, json!({"success": false}))
            .start()
            .await;
        let err = load_reports(&mock.client()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch reports");
    }
}
