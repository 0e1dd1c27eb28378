//! API client errors

use thiserror::Error;

/// Failure of a request against the election API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Server could not be reached
    #[error("Server unavailable")]
    Unavailable,

    /// Transport failed before a response arrived
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-2xx response
    #[error("Server returned {status}{}", .message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    /// 2xx response carrying `success: false`
    #[error("Request rejected{}", .message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Rejected { message: Option<String> },

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The `message` field sent by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } | ApiError::Rejected { message } => {
                message.as_deref().filter(|m| !m.is_empty())
            }
            _ => None,
        }
    }

    /// The token was missing, expired or lacks the role
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Voter already exists".to_string()),
        };
        assert_eq!(err.server_message(), Some("Voter already exists"));
        assert_eq!(err.to_string(), "Server returned 400: Voter already exists");

        let err = ApiError::Rejected {
            message: Some(String::new()),
        };
        assert_eq!(err.server_message(), None);
        assert_eq!(ApiError::Timeout.server_message(), None);
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(ApiError::Status {
            status: 401,
            message: None
        }
        .is_unauthorized());
        assert!(!ApiError::Unavailable.is_unauthorized());
    }
}
