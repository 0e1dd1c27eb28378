//! View-level errors
//!
//! What a screen shows when its load or submit step fails: a validation
//! message, the server's message (or a per-screen fallback), or a storage
//! fault.

use thiserror::Error;

use crate::api::ApiError;
use crate::forms::FormError;
use crate::session::StoreError;

#[derive(Error, Debug)]
pub enum ViewError {
    /// Rejected locally; nothing was sent
    #[error(transparent)]
    Invalid(#[from] FormError),

    /// Request failed; `message` is the server's or the screen's fallback
    #[error("{message}")]
    Request {
        message: String,
        #[source]
        source: ApiError,
    },

    /// Session or preference storage failed
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl ViewError {
    pub fn request(source: ApiError, fallback: &str) -> Self {
        let message = source
            .server_message()
            .unwrap_or(fallback)
            .to_string();
        ViewError::Request { message, source }
    }

    /// The session token was refused; the caller should sign out
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ViewError::Request { source, .. } if source.is_unauthorized())
    }
}

/// Attach a screen's fallback message to a failed request
pub trait RequestContext<T> {
    fn or_fallback(self, fallback: &str) -> Result<T, ViewError>;
}

impl<T> RequestContext<T> for Result<T, ApiError> {
    fn or_fallback(self, fallback: &str) -> Result<T, ViewError> {
        self.map_err(|e| {
            tracing::warn!("{}: {}", fallback, e);
            ViewError::request(e, fallback)
        })
    }
}

/// Server message, or the default when it sent none
pub(crate) fn message_or(message: Option<String>, default: &str) -> String {
    message.unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins() {
        let result: Result<(), ApiError> = Err(ApiError::Rejected {
            message: Some("Voter not found".to_string()),
        });
        let err = result.or_fallback("Failed to update voter").unwrap_err();
        assert_eq!(err.to_string(), "Voter not found");
    }

    #[test]
    fn test_fallback_when_silent() {
        let result: Result<(), ApiError> = Err(ApiError::Timeout);
        let err = result.or_fallback("Failed to load applications").unwrap_err();
        assert_eq!(err.to_string(), "Failed to load applications");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_form_error_is_transparent() {
        let err = ViewError::from(FormError::DeclarationRequired);
        assert_eq!(err.to_string(), "You must accept the declaration to continue");
    }
}
