//! Voter records

use serde::{Deserialize, Serialize};

use super::lenient;

/// A registered voter as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Voter {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub voter_id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub phone_no: Option<String>,
    #[serde(default)]
    pub branch_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl Voter {
    /// Full name, falling back to the short name
    pub fn display_name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.name.as_deref().filter(|s| !s.is_empty()))
    }

    /// Key for list rendering
    pub fn key(&self) -> String {
        self.id
            .clone()
            .or_else(|| self.voter_id.clone())
            .unwrap_or_default()
    }
}

/// Postal address, stored either as free text or as parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Address {
    Text(String),
    Structured(StructuredAddress),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredAddress {
    #[serde(default)]
    pub house_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub house_number: Option<String>,
    #[serde(default)]
    pub street_name: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
}

/// Body for `POST /voters`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewVoter {
    pub voter_id: String,
    pub full_name: String,
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
}

/// Body for `PUT /voter/{voter_id}`: the editable fields, sent whole
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VoterUpdate {
    pub full_name: String,
    pub date_of_birth: String,
    pub address: String,
    pub email: String,
    pub phone_no: String,
    pub branch_name: String,
    pub photo_url: String,
}

/// Envelope payload for `GET /voters`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoterList {
    #[serde(default)]
    pub voters: Vec<Voter>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_mixed_voter() {
        let voter: Voter = serde_json::from_str(
            r#"{
                "_id": "65f0",
                "voter_id": 1021,
                "name": "Ravi",
                "phone_no": 9876543210,
                "address": {"house_name": "Rose Villa", "house_number": 12, "place": "Kochi"}
            }"#,
        )
        .unwrap();

        assert_eq!(voter.voter_id.as_deref(), Some("1021"));
        assert_eq!(voter.phone_no.as_deref(), Some("9876543210"));
        assert_eq!(voter.display_name(), Some("Ravi"));
        match voter.address {
            Some(Address::Structured(addr)) => {
                assert_eq!(addr.house_number.as_deref(), Some("12"));
                assert!(addr.street_name.is_none());
            }
            other => panic!("unexpected address: {:?}", other),
        }
    }

    #[test]
    fn test_decode_text_and_odd_addresses() {
        let voter: Voter = serde_json::from_str(r#"{"address": "12 Main St"}"#).unwrap();
        assert_eq!(voter.address, Some(Address::Text("12 Main St".to_string())));

        let voter: Voter = serde_json::from_str(r#"{"address": 7}"#).unwrap();
        assert!(matches!(voter.address, Some(Address::Other(_))));
    }

    #[test]
    fn test_key_prefers_record_id() {
        let voter = Voter {
            id: Some("abc".to_string()),
            voter_id: Some("0001".to_string()),
            ..Voter::default()
        };
        assert_eq!(voter.key(), "abc");
    }
}
