//! Nomination portal: election phase, deadline and notes (admin)

use crate::api::{ApiClient, Transport};
use crate::error::{message_or, RequestContext, ViewError};
use crate::forms::ElectionConfigForm;
use crate::model::ElectionConfig;

use super::Saved;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NominationPortal {
    pub form: ElectionConfigForm,
}

impl NominationPortal {
    pub async fn load<T: Transport>(api: &ApiClient<T>) -> Result<Self, ViewError> {
        let config = api
            .election_config()
            .await
            .or_fallback("Failed to load election config")?;
        Ok(Self::from_config(&config))
    }

    pub fn from_config(config: &ElectionConfig) -> Self {
        Self {
            form: ElectionConfigForm::from_config(config),
        }
    }

    /// Save the form, then reload what the server stored. A failed reload
    /// keeps the form as it was sent.
    pub async fn save<T: Transport>(&mut self, api: &ApiClient<T>) -> Result<Saved, ViewError> {
        let update = self.form.to_update();
        let message = api
            .save_election_config(&update)
            .await
            .or_fallback("Failed to save config")?;
        tracing::info!(phase = %update.phase, "Election config saved");

        let reload = Self::load(api).await.map(|stored| *self = stored);
        Ok(Saved::new(message_or(message, "Saved"), reload))
    }

    /// Ask the server to remind voters of the nomination deadline.
    /// Returns `Ok(None)` without sending while nominations are not open.
    pub async fn send_reminder<T: Transport>(
        &self,
        api: &ApiClient<T>,
    ) -> Result<Option<String>, ViewError> {
        if !self.form.can_send_reminder() {
            tracing::debug!(phase = %self.form.phase, "Reminder skipped outside nomination");
            return Ok(None);
        }
        let message = api
            .send_deadline_reminder()
            .await
            .or_fallback("Failed to send reminder")?;
        Ok(Some(message_or(message, "Reminder sent")))
    }
}
