//! Voter lists (voter and admin) and voter registration

use crate::api::{ApiClient, Transport};
use crate::display::{self, format_address, or_dash};
use crate::error::{message_or, RequestContext, ViewError};
use crate::filter::{filter_voters, VoterIdQuery};
use crate::forms::{NewVoterForm, VoterEditor};
use crate::model::Voter;

use super::Saved;

/// One rendered line of a voter list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoterRow {
    /// 1-based position in the filtered list
    pub serial: usize,
    pub voter_id: String,
    pub name: String,
    pub age: String,
    pub address: String,
    pub email: String,
    pub phone_no: String,
    pub branch_name: String,
    pub photo: Option<String>,
}

impl VoterRow {
    pub fn new(serial: usize, voter: &Voter, origin: &str) -> Self {
        Self {
            serial,
            voter_id: or_dash(voter.voter_id.as_deref()).to_string(),
            name: or_dash(voter.display_name()).to_string(),
            age: display::format_age(voter.date_of_birth.as_deref()),
            address: format_address(voter.address.as_ref()),
            email: or_dash(voter.email.as_deref()).to_string(),
            phone_no: or_dash(voter.phone_no.as_deref()).to_string(),
            branch_name: or_dash(voter.branch_name.as_deref()).to_string(),
            photo: voter
                .photo_url
                .as_deref()
                .and_then(|url| display::absolute_url(origin, url)),
        }
    }
}

/// Loaded voter list with its search box
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoterRoster {
    pub voters: Vec<Voter>,
    pub query: VoterIdQuery,
    origin: String,
}

impl VoterRoster {
    pub async fn load<T: Transport>(api: &ApiClient<T>) -> Result<Self, ViewError> {
        let voters = api
            .voters()
            .await
            .or_fallback("Failed to fetch voters list")?;
        tracing::debug!(count = voters.len(), "Voters loaded");
        Ok(Self {
            voters,
            query: VoterIdQuery::default(),
            origin: api.backend_origin().to_string(),
        })
    }

    /// Replace the search text; returns the sanitized query
    pub fn search(&mut self, input: &str) -> &str {
        self.query = VoterIdQuery::new(input);
        self.query.as_str()
    }

    pub fn visible(&self) -> Vec<&Voter> {
        filter_voters(&self.voters, &self.query)
    }

    pub fn rows(&self) -> Vec<VoterRow> {
        self.visible()
            .into_iter()
            .enumerate()
            .map(|(i, v)| VoterRow::new(i + 1, v, &self.origin))
            .collect()
    }

    /// Editor for the voter with this id, pre-filled from the loaded record
    pub fn edit(&self, voter_id: &str) -> Option<VoterEditor> {
        self.voters
            .iter()
            .find(|v| v.voter_id.as_deref() == Some(voter_id))
            .and_then(VoterEditor::from_voter)
    }

    /// Save an admin edit, then reload. The search text is kept, and a
    /// failed reload leaves the current list in place.
    pub async fn save<T: Transport>(
        &mut self,
        api: &ApiClient<T>,
        editor: &VoterEditor,
    ) -> Result<Saved, ViewError> {
        let message = api
            .update_voter(&editor.voter_id, &editor.fields)
            .await
            .or_fallback("Failed to update voter")?;
        tracing::info!(voter_id = %editor.voter_id, "Voter updated");

        let reload = Self::load(api).await.map(|loaded| self.voters = loaded.voters);
        Ok(Saved::new(message_or(message, "Voter updated"), reload))
    }
}

/// Register a new voter
pub async fn add_voter<T: Transport>(
    api: &ApiClient<T>,
    form: &NewVoterForm,
) -> Result<String, ViewError> {
    let voter = form.validate()?;
    let message = api
        .add_voter(&voter)
        .await
        .or_fallback("Failed to add voter")?;
    tracing::info!(voter_id = %voter.voter_id, "Voter added");
    Ok(message_or(message, "Voter added successfully"))
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::display::DASH;
    use serde_json::json;

    fn voters_body() -> serde_json::Value {
        json!({"success": true, "voters": [
            {"_id": "a", "voter_id": "1021", "full_name": "Asha K", "date_of_birth": "1990-01-01",
             "address": {"house_name": "Rose Villa", "place": "Kochi"}, "photo_url": "/uploads/asha.jpg"},
            {"_id": "b", "voter_id": 2210, "name": "Ravi"},
            {"_id": "c", "voter_id": "3300", "full_name": "Mira", "address": "12 Main St"}
        ]})
    }

    #[tokio::test]
    async fn test_roster_search_and_rows() {
        let mock = MockApi::new()
            .route("GET", "/voters", 200, voters_body())
            .start()
            .await;

        let mut roster = VoterRoster::load(&mock.client()).await.unwrap();
        assert_eq!(roster.rows().len(), 3);

        assert_eq!(roster.search("x21"), "21");
        let rows = roster.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].serial, 1);
        assert_eq!(rows[0].address, "Rose Villa, Kochi");
        assert_eq!(
            rows[0].photo.as_deref(),
            Some(format!("{}/uploads/asha.jpg", mock.base_url.trim_end_matches("/api")).as_str())
        );
        assert_eq!(rows[1].voter_id, "2210");
        assert_eq!(rows[1].name, "Ravi");
        assert_eq!(rows[1].address, DASH);
        assert_eq!(rows[1].age, DASH);
    }

    #[tokio::test]
    async fn test_roster_load_failure_message() {
        let mock = MockApi::new()
            .route("GET", "/voters", 500, json!({}))
            .start()
            .await;
        let err = VoterRoster::load(&mock.client()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch voters list");
    }

    #[tokio::test]
    async fn test_admin_edit_saves_and_reloads() {
        let mock = MockApi::new()
            .route("GET", "/voters", 200, voters_body())
            .route("PUT", "/voter/3300", 200, json!({"success": true}))
            .start()
            .await;
        let client = mock.client().with_token("admin-jwt");

        let mut roster = VoterRoster::load(&client).await.unwrap();
        roster.search("33");
        let mut editor = roster.edit("3300").unwrap();
        assert_eq!(editor.fields.address, "12 Main St");
        editor.set("phone_no", "9847012345");

        let saved = roster.save(&client, &editor).await.unwrap();
        assert_eq!(saved.message, "Voter updated");
        assert!(saved.reload_error.is_none());
        assert_eq!(roster.query.as_str(), "33");

        let put = &mock.hits_for("PUT", "/voter/3300")[0];
        assert_eq!(put.json()["phone_no"], "9847012345");
        assert_eq!(put.json()["full_name"], "Mira");
        assert_eq!(mock.hits_for("GET", "/voters").len(), 2);
    }

    #[tokio::test]
    async fn test_accepted_edit_keeps_search_when_reload_fails() {
        let mock = MockApi::new()
            .route("PUT", "/voter/3300", 200, json!({"success": true}))
            .route("GET", "/voters", 500, json!({}))
            .start()
            .await;
        let client = mock.client();

        let mut roster = VoterRoster {
            voters: serde_json::from_value(voters_body()["voters"].clone()).unwrap(),
            ..Default::default()
        };
        roster.search("33");
        let editor = roster.edit("3300").unwrap();

        let saved = roster.save(&client, &editor).await.unwrap();
        assert_eq!(saved.message, "Voter updated");
        assert_eq!(
            saved.reload_error.map(|e| e.to_string()).as_deref(),
            Some("Failed to fetch voters list")
        );
        assert_eq!(mock.hits_for("PUT", "/voter/3300").len(), 1);
        assert_eq!(roster.query.as_str(), "33");
        assert_eq!(roster.visible().len(), 1);
    }

    #[tokio::test]
    async fn test_add_voter_rejects_locally() {
        let mock = MockApi::new().start().await;
        let form = NewVoterForm {
            voter_id: "1021".to_string(),
            ..Default::default()
        };
        let err = add_voter(&mock.client(), &form).await.unwrap_err();
        assert_eq!(err.to_string(), "Full name is required");
        assert!(mock.hits().is_empty());
    }

    #[tokio::test]
    async fn test_add_voter_posts() {
        let mock = MockApi::new()
            .route(
                "POST",
                "/voters",
                201,
                json!({"success": true, "message": "Voter registered"}),
            )
            .start()
            .await;
        let form = NewVoterForm {
            voter_id: "1021".to_string(),
            full_name: "Asha K".to_string(),
            date_of_birth: "1990-01-01".to_string(),
            ..Default::default()
        };
        assert_eq!(
            add_voter(&mock.client(), &form).await.unwrap(),
            "Voter registered"
        );
        assert_eq!(mock.hits_for("POST", "/voters")[0].json()["voter_id"], "1021");
    }
}
