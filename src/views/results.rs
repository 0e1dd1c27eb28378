//! Election results (voter)

use crate::api::{ApiClient, Transport};
use crate::display::or_dash;
use crate::error::{RequestContext, ViewError};
use crate::model::{ElectionResults, PositionResult};

/// One candidate line, already in standing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingRow {
    pub rank: usize,
    pub name: String,
    pub voter_id: String,
    pub votes: u64,
    pub leading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionStandings {
    pub position: String,
    pub total_votes: u64,
    pub rows: Vec<StandingRow>,
}

impl PositionStandings {
    pub fn from_result(result: &PositionResult) -> Self {
        let has_leader = result.leader().is_some();
        let rows = result
            .standings()
            .into_iter()
            .enumerate()
            .map(|(i, c)| StandingRow {
                rank: i + 1,
                name: or_dash(c.full_name.as_deref()).to_string(),
                voter_id: or_dash(c.voter_id.as_deref()).to_string(),
                votes: c.votes,
                leading: has_leader && i == 0,
            })
            .collect();
        Self {
            position: result.position.clone(),
            total_votes: result.total_votes(),
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub published: bool,
    pub positions: Vec<PositionStandings>,
}

impl ResultsView {
    pub async fn load<T: Transport>(api: &ApiClient<T>) -> Result<Self, ViewError> {
        let results = api
            .election_results()
            .await
            .or_fallback("Failed to load election results")?;
        Ok(Self::from_results(&results))
    }

    pub fn from_results(results: &ElectionResults) -> Self {
        Self {
            published: results.published,
            positions: results
                .results
                .iter()
                .map(PositionStandings::from_result)
                .collect(),
        }
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_results_sorted_by_votes() {
        let mock = MockApi::new()
            .route(
                "GET",
                "/election-results",
                200,
                json!({"success": true, "published": true, "results": [
                    {"position": "President", "candidates": [
                        {"full_name": "Asha", "voter_id": 1021, "votes": 12},
                        {"full_name": "Ravi", "voter_id": 2210, "votes": 30},
                        {"full_name": "Mira", "votes": 7}
                    ]}
                ]}),
            )
            .start()
            .await;

        let view = ResultsView::load(&mock.client()).await.unwrap();
        assert!(view.published);
        let president = &view.positions[0];
        assert_eq!(president.total_votes, 49);

        let names: Vec<_> = president.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ravi", "Asha", "Mira"]);
        assert!(president.rows[0].leading);
        assert!(!president.rows[1].leading);
        assert_eq!(president.rows[2].voter_id, "—");
    }
}
