//! Per-user client preferences

use std::collections::BTreeSet;

use crate::model::Notification;
use crate::session::{keys, KeyValueStore, SessionContext, StoreError};

/// Notification ids the user has hidden, persisted per identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DismissedNotifications {
    key: String,
    ids: BTreeSet<String>,
}

impl DismissedNotifications {
    pub fn storage_key(identity: &str) -> String {
        format!("{}:{}", keys::DISMISSED_NOTIFICATIONS, identity)
    }

    /// Load the set for a user. A corrupt entry reads as empty.
    pub fn load(store: &impl KeyValueStore, ctx: &SessionContext) -> Self {
        let key = Self::storage_key(&ctx.identity());
        let ids = match store.get(&key) {
            Some(raw) => serde_json::from_str::<Vec<serde_json::Value>>(&raw)
                .map(|values| {
                    values
                        .into_iter()
                        .filter_map(crate::model::lenient::value_to_string)
                        .collect()
                })
                .unwrap_or_else(|e| {
                    tracing::warn!(key = %key, "Discarding unreadable dismissed set: {}", e);
                    BTreeSet::new()
                }),
            None => BTreeSet::new(),
        };
        Self { key, ids }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Hide a notification and persist the set
    pub fn dismiss(&mut self, store: &mut impl KeyValueStore, id: &str) -> Result<(), StoreError> {
        if self.ids.insert(id.to_string()) {
            let raw = serde_json::to_string(&self.ids)?;
            store.set(&self.key, &raw)?;
            tracing::debug!(id, "Notification dismissed");
        }
        Ok(())
    }

    /// Notifications not dismissed; entries without an id are always shown
    pub fn visible<'a>(&self, notifications: &'a [Notification]) -> Vec<&'a Notification> {
        notifications
            .iter()
            .filter(|n| n.id.as_deref().map_or(true, |id| !self.contains(id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStore, Role};

    fn voter_ctx(id: &str) -> SessionContext {
        let mut ctx = SessionContext::new("tok", Role::Voter);
        ctx.voter_id = Some(id.to_string());
        ctx
    }

    fn notification(id: &str) -> Notification {
        Notification {
            id: Some(id.to_string()),
            ..Notification::default()
        }
    }

    #[test]
    fn test_dismiss_survives_reload() {
        let mut store = MemoryStore::new();
        let ctx = voter_ctx("1021");

        let mut dismissed = DismissedNotifications::load(&store, &ctx);
        dismissed.dismiss(&mut store, "n1").unwrap();

        let reloaded = DismissedNotifications::load(&store, &ctx);
        let all = vec![notification("n1"), notification("n2")];
        let visible: Vec<_> = reloaded
            .visible(&all)
            .iter()
            .filter_map(|n| n.id.as_deref())
            .collect();
        assert_eq!(visible, vec!["n2"]);
    }

    #[test]
    fn test_sets_are_per_user() {
        let mut store = MemoryStore::new();
        let mut first = DismissedNotifications::load(&store, &voter_ctx("1"));
        first.dismiss(&mut store, "n1").unwrap();

        let second = DismissedNotifications::load(&store, &voter_ctx("2"));
        assert!(second.is_empty());
    }

    #[test]
    fn test_storage_keys() {
        let mut store = MemoryStore::new();
        let mut dismissed = DismissedNotifications::load(&store, &voter_ctx("1021"));
        dismissed.dismiss(&mut store, "n1").unwrap();
        assert_eq!(
            store.get("dismissedNotificationIds:voter:1021").as_deref(),
            Some(r#"["n1"]"#)
        );

        let admin = SessionContext {
            email: Some("Ops@Club.org".to_string()),
            ..SessionContext::new("tok", Role::Admin)
        };
        assert_eq!(
            DismissedNotifications::storage_key(&admin.identity()),
            "dismissedNotificationIds:admin:ops@club.org"
        );
        let anonymous = SessionContext::new("tok", Role::Voter);
        assert_eq!(
            DismissedNotifications::storage_key(&anonymous.identity()),
            "dismissedNotificationIds:voter:anonymous"
        );
    }

    #[test]
    fn test_corrupt_entry_reads_empty() {
        let mut store = MemoryStore::new();
        let ctx = voter_ctx("1");
        store
            .set(&DismissedNotifications::storage_key(&ctx.identity()), "{not json")
            .unwrap();
        assert!(DismissedNotifications::load(&store, &ctx).is_empty());
    }

    #[test]
    fn test_numeric_ids_in_stored_array() {
        let mut store = MemoryStore::new();
        let ctx = voter_ctx("1");
        store
            .set(&DismissedNotifications::storage_key(&ctx.identity()), "[5, \"6\"]")
            .unwrap();
        let dismissed = DismissedNotifications::load(&store, &ctx);
        assert!(dismissed.contains("5"));
        assert!(dismissed.contains("6"));
    }
}
