//! Response envelope
//!
//! Every endpoint answers `{ "success": bool, "message": string, ...payload }`.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Envelope<T> {
    /// Missing `success` is taken as success; only an explicit `false` fails
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(true)
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

/// Payload for endpoints that only acknowledge
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ack {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VoterList;

    #[test]
    fn test_flattened_payload() {
        let env: Envelope<VoterList> =
            serde_json::from_str(r#"{"success": true, "voters": [{"voter_id": "1"}]}"#).unwrap();
        assert!(env.is_success());
        assert_eq!(env.data.voters.len(), 1);
    }

    #[test]
    fn test_explicit_failure() {
        let env: Envelope<Ack> =
            serde_json::from_str(r#"{"success": false, "message": "Nope"}"#).unwrap();
        assert!(!env.is_success());
        assert_eq!(env.message(), Some("Nope"));
    }
}
