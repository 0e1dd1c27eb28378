//! Persisted key-value storage
//!
//! The browser keeps session data in `localStorage`; the terminal client keeps
//! it in a JSON file. Both sit behind [`KeyValueStore`].

use std::collections::HashMap;
use thiserror::Error;

/// Keys written by the client
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const USER_TYPE: &str = "userType";
    pub const EMAIL: &str = "email";
    pub const NAME: &str = "name";
    pub const FULL_NAME: &str = "fullName";
    pub const VOTER_ID: &str = "voterId";

    /// Prefix of the per-user dismissed notification set
    pub const DISMISSED_NOTIFICATIONS: &str = "dismissedNotificationIds";

    /// Every key that belongs to the signed-in session
    pub const SESSION_KEYS: [&str; 6] = [TOKEN, USER_TYPE, EMAIL, NAME, FULL_NAME, VOTER_ID];
}

/// Errors raised by a storage backend
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Backend refused the operation (quota, private mode, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// String key-value storage that survives a reload
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// Read a key, treating empty values as absent
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// In-memory store, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
