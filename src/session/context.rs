//! Session state and the explicit session context handed to views

use super::role::Role;
use super::store::{keys, KeyValueStore, StoreError};

/// What the router needs to know about the current user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub authenticated: bool,
    pub role: Option<Role>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(role: Role) -> Self {
        Self {
            authenticated: true,
            role: Some(role),
        }
    }

    /// Derive the session from persisted storage
    pub fn load(store: &impl KeyValueStore) -> Self {
        SessionContext::load(store)
            .map(|ctx| ctx.session())
            .unwrap_or_default()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.authenticated && self.role == Some(role)
    }
}

/// Everything a view may need about the signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub token: String,
    pub role: Role,
    pub email: Option<String>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub voter_id: Option<String>,
}

impl SessionContext {
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: token.into(),
            role,
            email: None,
            name: None,
            full_name: None,
            voter_id: None,
        }
    }

    /// Read the context back from storage.
    ///
    /// A session exists only when both a token and a recognised `userType`
    /// are stored.
    pub fn load(store: &impl KeyValueStore) -> Option<Self> {
        let token = store.get_non_empty(keys::TOKEN)?;
        let role = match store.get_non_empty(keys::USER_TYPE)?.parse::<Role>() {
            Ok(role) => role,
            Err(e) => {
                tracing::warn!("Ignoring stored session: {}", e);
                return None;
            }
        };

        Some(Self {
            token,
            role,
            email: store.get_non_empty(keys::EMAIL),
            name: store.get_non_empty(keys::NAME),
            full_name: store.get_non_empty(keys::FULL_NAME),
            voter_id: store.get_non_empty(keys::VOTER_ID),
        })
    }

    /// Write the context to storage, dropping keys this context does not carry
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        store.set(keys::TOKEN, &self.token)?;
        store.set(keys::USER_TYPE, self.role.as_str())?;

        let optional = [
            (keys::EMAIL, &self.email),
            (keys::NAME, &self.name),
            (keys::FULL_NAME, &self.full_name),
            (keys::VOTER_ID, &self.voter_id),
        ];
        for (key, value) in optional {
            match value {
                Some(v) if !v.is_empty() => store.set(key, v)?,
                _ => store.remove(key)?,
            }
        }

        tracing::debug!(role = %self.role, "Session saved");
        Ok(())
    }

    pub fn session(&self) -> Session {
        Session::signed_in(self.role)
    }

    /// Name to greet the user with
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.name.as_deref())
            .or(self.email.as_deref())
            .unwrap_or("there")
    }

    /// Stable identity used to key per-user preferences
    pub fn identity(&self) -> String {
        match (&self.voter_id, &self.email) {
            (Some(id), _) => format!("voter:{}", id),
            (None, Some(email)) => format!("{}:{}", self.role, email.to_ascii_lowercase()),
            (None, None) => format!("{}:anonymous", self.role),
        }
    }
}

/// Remove every session key from storage
pub fn clear_session(store: &mut impl KeyValueStore) -> Result<(), StoreError> {
    for key in keys::SESSION_KEYS {
        store.remove(key)?;
    }
    tracing::debug!("Session cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;

    fn voter_context() -> SessionContext {
        SessionContext {
            email: Some("ana@example.org".to_string()),
            full_name: Some("Ana Roy".to_string()),
            voter_id: Some("0042".to_string()),
            ..SessionContext::new("tok", Role::Voter)
        }
    }

    #[test]
    fn test_empty_store_is_anonymous() {
        let store = MemoryStore::new();
        assert_eq!(Session::load(&store), Session::anonymous());
        assert!(SessionContext::load(&store).is_none());
    }

    #[test]
    fn test_token_without_role_is_anonymous() {
        let mut store = MemoryStore::new();
        store.set(keys::TOKEN, "tok").unwrap();
        assert!(!Session::load(&store).authenticated);
    }

    #[test]
    fn test_unknown_role_is_anonymous() {
        let mut store = MemoryStore::new();
        store.set(keys::TOKEN, "tok").unwrap();
        store.set(keys::USER_TYPE, "superuser").unwrap();
        assert!(!Session::load(&store).authenticated);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let mut store = MemoryStore::new();
        let ctx = voter_context();
        ctx.save(&mut store).unwrap();

        assert_eq!(store.get(keys::USER_TYPE).as_deref(), Some("voter"));
        assert_eq!(SessionContext::load(&store), Some(ctx));
        assert!(Session::load(&store).has_role(Role::Voter));
    }

    #[test]
    fn test_save_drops_stale_optional_keys() {
        let mut store = MemoryStore::new();
        voter_context().save(&mut store).unwrap();

        SessionContext::new("admin-tok", Role::Admin)
            .save(&mut store)
            .unwrap();

        assert!(store.get(keys::VOTER_ID).is_none());
        assert!(store.get(keys::FULL_NAME).is_none());
    }

    #[test]
    fn test_clear_session() {
        let mut store = MemoryStore::new();
        voter_context().save(&mut store).unwrap();
        store.set(keys::NAME, "Ana").unwrap();
        store.set("electra_api_url", "http://x").unwrap();

        clear_session(&mut store).unwrap();

        for key in keys::SESSION_KEYS {
            assert!(store.get(key).is_none(), "{} should be cleared", key);
        }
        assert!(store.get("electra_api_url").is_some());
    }

    #[test]
    fn test_identity() {
        assert_eq!(voter_context().identity(), "voter:0042");

        let admin = SessionContext {
            email: Some("Admin@Example.org".to_string()),
            ..SessionContext::new("tok", Role::Admin)
        };
        assert_eq!(admin.identity(), "admin:admin@example.org");
        assert_eq!(admin.display_name(), "Admin@Example.org");
    }
}
