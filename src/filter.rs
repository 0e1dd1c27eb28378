//! List filters

use crate::model::{CandidateApplication, Voter};

/// Maximum length of a voter-id search
pub const VOTER_ID_QUERY_LEN: usize = 4;

/// Voter-id search box contents: digits only, at most four of them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoterIdQuery(String);

impl VoterIdQuery {
    pub fn new(input: &str) -> Self {
        Self(
            input
                .chars()
                .filter(char::is_ascii_digit)
                .take(VOTER_ID_QUERY_LEN)
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Empty queries match everything
    pub fn matches(&self, voter: &Voter) -> bool {
        self.is_empty()
            || voter
                .voter_id
                .as_deref()
                .is_some_and(|id| id.contains(self.0.as_str()))
    }
}

pub fn filter_voters<'a>(voters: &'a [Voter], query: &VoterIdQuery) -> Vec<&'a Voter> {
    voters.iter().filter(|v| query.matches(v)).collect()
}

/// Positions present in a list of applications, sorted and deduplicated
pub fn positions_of(applications: &[CandidateApplication]) -> Vec<String> {
    let mut positions: Vec<String> = applications
        .iter()
        .filter_map(|a| a.position.as_deref())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    positions.sort();
    positions.dedup();
    positions
}
