//! Form state and local validation
//!
//! Every form validates before any request is made; a [`FormError`] means
//! nothing was sent.

mod account;
mod admin;
mod candidacy;
mod voter;

pub use account::{AdminSignupForm, LoginForm, SignupForm};
pub use admin::{ElectionConfigForm, NotificationForm, ReportForm, ReviewForm};
pub use candidacy::CandidacyForm;
pub use voter::{NewVoterForm, VoterEditor};

use thiserror::Error;

/// Local validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Position and candidate statement are required")]
    PositionAndStatementRequired,

    #[error("Identity proof and membership proof are required")]
    ProofsRequired,

    #[error("You must accept the declaration to continue")]
    DeclarationRequired,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Enter a valid email address")]
    InvalidEmail,

    #[error("Voter ID must contain digits only")]
    InvalidVoterId,

    #[error("Date of birth must be a valid date (YYYY-MM-DD)")]
    InvalidDate,

    #[error("Decision must be Approved or Rejected")]
    InvalidDecision,

    #[error("Unknown position: {0}")]
    UnknownPosition(String),

    #[error("Unknown phase: {0}")]
    UnknownPhase(String),

    /// The server says this voter cannot apply; carries its reason
    #[error("{0}")]
    NotEligible(String),
}

/// Trimmed value, or `Required(label)` when blank
pub(crate) fn required(value: &str, label: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::Required(label))
    } else {
        Ok(value.to_string())
    }
}

/// Trimmed value, `None` when blank
pub(crate) fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub(crate) fn email(value: &str) -> Result<String, FormError> {
    let value = required(value, "Email")?;
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(value),
        _ => Err(FormError::InvalidEmail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(required("  x ", "Name"), Ok("x".to_string()));
        assert_eq!(required("   ", "Name"), Err(FormError::Required("Name")));
        assert_eq!(FormError::Required("Name").to_string(), "Name is required");
    }

    #[test]
    fn test_email() {
        assert!(email("a@b.org").is_ok());
        assert_eq!(email("ab.org"), Err(FormError::InvalidEmail));
        assert_eq!(email("a@b"), Err(FormError::InvalidEmail));
        assert_eq!(email(""), Err(FormError::Required("Email")));
    }
}
