//! Election configuration and results

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::lenient;

/// Election phase as configured by an admin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Closed,
    Nomination,
    Voting,
    Results,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Closed, Phase::Nomination, Phase::Voting, Phase::Results];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Closed => "closed",
            Phase::Nomination => "nomination",
            Phase::Voting => "voting",
            Phase::Results => "results",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Closed => "Closed",
            Phase::Nomination => "Nomination (Open)",
            Phase::Voting => "Voting",
            Phase::Results => "Results",
        }
    }

    /// Lenient parse: anything mentioning "nomination" is the nomination
    /// phase, unknown values are treated as closed.
    pub fn parse_lenient(s: &str) -> Phase {
        let lower = s.trim().to_ascii_lowercase();
        if lower.contains("nomination") {
            Phase::Nomination
        } else if lower == "voting" {
            Phase::Voting
        } else if lower == "results" {
            Phase::Results
        } else {
            Phase::Closed
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown phase: {} (expected closed, nomination, voting or results)",
                    s
                )
            })
    }
}

impl<'de> Deserialize<'de> for Phase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| Phase::parse_lenient(&s)).unwrap_or_default())
    }
}

/// Election settings shared with voters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElectionConfig {
    #[serde(default)]
    pub phase: Phase,
    #[serde(default)]
    pub nomination_last_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ElectionConfig {
    pub fn is_nomination_open(&self) -> bool {
        self.phase == Phase::Nomination
    }
}

/// Body for `PUT /election-config`; empty strings travel as `null`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElectionConfigUpdate {
    pub phase: Phase,
    pub nomination_last_date: Option<String>,
    pub notes: Option<String>,
}

impl ElectionConfigUpdate {
    pub fn new(phase: Phase, nomination_last_date: &str, notes: &str) -> Self {
        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Self {
            phase,
            nomination_last_date: non_empty(nomination_last_date),
            notes: non_empty(notes),
        }
    }
}

/// Envelope payload for `GET /election-config`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigReply {
    #[serde(default)]
    pub config: Option<ElectionConfig>,
}

/// Vote count for one candidate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateTally {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub voter_id: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub votes: u64,
}

/// Results for one contested position
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionResult {
    pub position: String,
    #[serde(default)]
    pub candidates: Vec<CandidateTally>,
}

impl PositionResult {
    /// Candidates ordered by votes, highest first; ties keep server order
    pub fn standings(&self) -> Vec<&CandidateTally> {
        let mut sorted: Vec<&CandidateTally> = self.candidates.iter().collect();
        sorted.sort_by(|a, b| b.votes.cmp(&a.votes));
        sorted
    }

    pub fn total_votes(&self) -> u64 {
        self.candidates.iter().map(|c| c.votes).sum()
    }

    /// Leading candidate, unless the top spot is tied or nobody voted
    pub fn leader(&self) -> Option<&CandidateTally> {
        let standings = self.standings();
        match standings.as_slice() {
            [first, second, ..] if first.votes == second.votes => None,
            [first, ..] if first.votes > 0 => Some(first),
            _ => None,
        }
    }
}

/// Envelope payload for `GET /election-results`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElectionResults {
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub results: Vec<PositionResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_decoding() {
        let cfg: ElectionConfig = serde_json::from_str(r#"{"phase": "Nomination"}"#).unwrap();
        assert!(cfg.is_nomination_open());

        let cfg: ElectionConfig = serde_json::from_str(r#"{"phase": null}"#).unwrap();
        assert_eq!(cfg.phase, Phase::Closed);

        let cfg: ElectionConfig = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(cfg.phase, Phase::Closed);

        let cfg: ElectionConfig = serde_json::from_str(r#"{"phase": "archived"}"#).unwrap();
        assert_eq!(cfg.phase, Phase::Closed);
    }

    #[test]
    fn test_phase_from_str_is_strict() {
        assert_eq!("Voting".parse::<Phase>(), Ok(Phase::Voting));
        assert!("archived".parse::<Phase>().is_err());
    }

    #[test]
    fn test_update_sends_null_for_blank() {
        let update = ElectionConfigUpdate::new(Phase::Nomination, "", "  ");
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"phase": "nomination", "nomination_last_date": null, "notes": null})
        );
    }

    #[test]
    fn test_standings_and_leader() {
        let result = PositionResult {
            position: "President".to_string(),
            candidates: vec![
                CandidateTally {
                    full_name: Some("A".to_string()),
                    votes: 3,
                    ..Default::default()
                },
                CandidateTally {
                    full_name: Some("B".to_string()),
                    votes: 9,
                    ..Default::default()
                },
            ],
        };

        let names: Vec<_> = result
            .standings()
            .iter()
            .map(|c| c.full_name.as_deref().unwrap())
            .collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(result.total_votes(), 12);
        assert_eq!(result.leader().and_then(|c| c.full_name.as_deref()), Some("B"));
    }

    #[test]
    fn test_tied_leader_is_none() {
        let result = PositionResult {
            position: "Treasurer".to_string(),
            candidates: vec![
                CandidateTally {
                    votes: 4,
                    ..Default::default()
                },
                CandidateTally {
                    votes: 4,
                    ..Default::default()
                },
            ],
        };
        assert!(result.leader().is_none());
    }
}
