//! Admin forms: notifications, reports, election config, application review

use super::{optional, required, FormError};
use crate::model::{
    ApplicationStatus, ElectionConfig, ElectionConfigUpdate, NotificationDraft, Phase,
    ReportDraft, ReviewDecision,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationForm {
    pub title: String,
    pub message: String,
}

impl NotificationForm {
    pub fn validate(&self) -> Result<NotificationDraft, FormError> {
        Ok(NotificationDraft {
            title: required(&self.title, "Title")?,
            message: required(&self.message, "Message")?,
        })
    }
}

/// Voter report of a wrong field in their record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportForm {
    pub field: String,
    pub description: String,
}

impl ReportForm {
    pub fn validate(&self) -> Result<ReportDraft, FormError> {
        Ok(ReportDraft {
            field: required(&self.field, "Field")?,
            description: required(&self.description, "Description")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElectionConfigForm {
    pub phase: Phase,
    pub nomination_last_date: String,
    pub notes: String,
}

impl ElectionConfigForm {
    pub fn from_config(config: &ElectionConfig) -> Self {
        Self {
            phase: config.phase,
            nomination_last_date: config.nomination_last_date.clone().unwrap_or_default(),
            notes: config.notes.clone().unwrap_or_default(),
        }
    }

    pub fn set_phase(&mut self, raw: &str) -> Result<(), FormError> {
        self.phase = raw
            .parse()
            .map_err(|_| FormError::UnknownPhase(raw.trim().to_string()))?;
        Ok(())
    }

    pub fn to_update(&self) -> ElectionConfigUpdate {
        ElectionConfigUpdate::new(self.phase, &self.nomination_last_date, &self.notes)
    }

    /// The deadline reminder only makes sense while nominations are open
    pub fn can_send_reminder(&self) -> bool {
        self.phase == Phase::Nomination
    }
}

/// Admin decision on a candidate application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewForm {
    pub application_id: String,
    pub status: ApplicationStatus,
    pub admin_remarks: String,
}

impl ReviewForm {
    /// A fresh review defaults to approval with no remarks
    pub fn new(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            status: ApplicationStatus::Approved,
            admin_remarks: String::new(),
        }
    }

    pub fn validate(&self) -> Result<ReviewDecision, FormError> {
        match self.status {
            ApplicationStatus::Approved | ApplicationStatus::Rejected => Ok(ReviewDecision {
                status: self.status,
                admin_remarks: optional(&self.admin_remarks).unwrap_or_default(),
            }),
            _ => Err(FormError::InvalidDecision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_form() {
        let form = NotificationForm {
            title: "Polling day".to_string(),
            message: "  ".to_string(),
        };
        assert_eq!(form.validate(), Err(FormError::Required("Message")));
    }

    #[test]
    fn test_report_form() {
        let form = ReportForm {
            field: "Address".to_string(),
            description: "House number is 12, not 21".to_string(),
        };
        assert_eq!(form.validate().unwrap().field, "Address");
        assert_eq!(
            ReportForm::default().validate(),
            Err(FormError::Required("Field"))
        );
    }

    #[test]
    fn test_config_form_round() {
        let mut form = ElectionConfigForm::from_config(&ElectionConfig::default());
        assert_eq!(form.phase, Phase::Closed);
        assert!(!form.can_send_reminder());

        form.set_phase("nomination").unwrap();
        assert!(form.can_send_reminder());
        assert_eq!(
            form.set_phase("archived"),
            Err(FormError::UnknownPhase("archived".to_string()))
        );

        form.nomination_last_date = "2025-03-01".to_string();
        let update = form.to_update();
        assert_eq!(update.nomination_last_date.as_deref(), Some("2025-03-01"));
        assert_eq!(update.notes, None);
    }

    #[test]
    fn test_review_defaults_to_approved() {
        let form = ReviewForm::new("a1");
        let decision = form.validate().unwrap();
        assert_eq!(decision.status, ApplicationStatus::Approved);
        assert_eq!(decision.admin_remarks, "");

        let mut form = ReviewForm::new("a1");
        form.status = ApplicationStatus::Pending;
        assert_eq!(form.validate(), Err(FormError::InvalidDecision));
    }
}
