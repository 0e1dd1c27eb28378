//! Notification feed (voter) and composer (admin)

use crate::api::{ApiClient, Transport};
use crate::error::{message_or, RequestContext, ViewError};
use crate::forms::NotificationForm;
use crate::model::Notification;
use crate::prefs::DismissedNotifications;
use crate::session::{KeyValueStore, SessionContext};

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationFeed {
    pub notifications: Vec<Notification>,
    pub dismissed: DismissedNotifications,
}

impl NotificationFeed {
    pub async fn load<T: Transport>(
        api: &ApiClient<T>,
        store: &impl KeyValueStore,
        ctx: &SessionContext,
    ) -> Result<Self, ViewError> {
        let notifications = api
            .notifications()
            .await
            .or_fallback("Failed to fetch notifications")?;
        Ok(Self {
            notifications,
            dismissed: DismissedNotifications::load(store, ctx),
        })
    }

    /// Notifications the user has not dismissed, in server order
    pub fn visible(&self) -> Vec<&Notification> {
        self.dismissed.visible(&self.notifications)
    }

    pub fn dismiss(&mut self, store: &mut impl KeyValueStore, id: &str) -> Result<(), ViewError> {
        self.dismissed.dismiss(store, id)?;
        Ok(())
    }
}

pub async fn send_notification<T: Transport>(
    api: &ApiClient<T>,
    form: &NotificationForm,
) -> Result<String, ViewError> {
    let draft = form.validate()?;
    let message = api
        .send_notification(&draft)
        .await
        .or_fallback("Failed to send notification")?;
    tracing::info!(title = %draft.title, "Notification sent");
    Ok(message_or(message, "Notification sent"))
}
