//! Login and signup payloads

use serde::{Deserialize, Serialize};

use super::lenient;
use crate::session::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub user_type: Role,
}

/// Payload of a successful login. Field names follow the keys the session is
/// persisted under.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub voter_id: Option<String>,
}

/// Voter self-registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub voter_id: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_wire_names() {
        let req = LoginRequest {
            email: "a@b.org".to_string(),
            password: "pw".to_string(),
            user_type: Role::Voter,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["userType"], "voter");
    }

    #[test]
    fn test_login_response_numeric_voter_id() {
        let res: LoginResponse = serde_json::from_str(
            r#"{"success": true, "token": "t", "userType": "voter", "voterId": 1021, "fullName": "Asha K"}"#,
        )
        .unwrap();
        assert_eq!(res.voter_id.as_deref(), Some("1021"));
        assert_eq!(res.full_name.as_deref(), Some("Asha K"));
    }
}
