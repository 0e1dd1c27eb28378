//! Tolerant field decoding
//!
//! The API is not consistent about identifiers: voter ids, record ids and
//! house numbers arrive as strings in some responses and numbers in others.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string, number or bool as an optional string. Empty strings and
/// `null` become `None`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_string))
}

pub(crate) fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_string")]
        id: Option<String>,
    }

    fn probe(json: &str) -> Option<String> {
        serde_json::from_str::<Probe>(json).unwrap().id
    }

    #[test]
    fn test_opt_string() {
        assert_eq!(probe(r#"{"id": "0042"}"#).as_deref(), Some("0042"));
        assert_eq!(probe(r#"{"id": 42}"#).as_deref(), Some("42"));
        assert_eq!(probe(r#"{"id": ""}"#), None);
        assert_eq!(probe(r#"{"id": null}"#), None);
        assert_eq!(probe(r#"{}"#), None);
    }
}
