//! Persistent key-value storage for the session entries.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

use super::Session;
use crate::config::StorageConfig;
use crate::models::User;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    #[error("Storage unavailable")]
    Unavailable,

    #[error("Failed to write {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("Failed to serialize session: {0}")]
    Serialize(String),
}

/// String-keyed persistent storage, e.g. the browser's `localStorage`
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// In-memory store, shared between clones
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Reads and writes the `token` and `user` entries
pub struct SessionStore {
    backend: Box<dyn KeyValueStore>,
    keys: StorageConfig,
}

impl SessionStore {
    pub fn new(backend: impl KeyValueStore + 'static, keys: StorageConfig) -> Self {
        Self {
            backend: Box::new(backend),
            keys,
        }
    }

    /// Both entries must be present and the user must parse
    pub fn load(&self) -> Option<Session> {
        let token = self.backend.get(&self.keys.token_key)?;
        if token.is_empty() {
            return None;
        }
        let json = self.backend.get(&self.keys.user_key)?;
        match serde_json::from_str::<User>(&json) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable stored user");
                None
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let json = serde_json::to_string(&session.user)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.backend.set(&self.keys.token_key, &session.token)?;
        if let Err(e) = self.backend.set(&self.keys.user_key, &json) {
            self.backend.remove(&self.keys.token_key);
            return Err(e);
        }
        Ok(())
    }

    pub fn clear(&self) {
        self.backend.remove(&self.keys.token_key);
        self.backend.remove(&self.keys.user_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            username: "john_runner".into(),
            email: "john@example.com".into(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }

    #[test]
    fn test_save_and_load() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone(), StorageConfig::default());
        let session = Session {
            token: "abc123".into(),
            user: user(),
        };

        store.save(&session).unwrap();
        assert_eq!(backend.get("token").as_deref(), Some("abc123"));
        assert!(backend.get("user").unwrap().contains("john_runner"));
        assert_eq!(store.load(), Some(session));
    }

    #[test]
    fn test_load_requires_both_entries() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone(), StorageConfig::default());

        backend.set("token", "abc123").unwrap();
        assert_eq!(store.load(), None);

        backend.remove("token");
        backend.set("user", &serde_json::to_string(&user()).unwrap()).unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_corrupt_user_is_ignored() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone(), StorageConfig::default());
        backend.set("token", "abc123").unwrap();
        backend.set("user", "{not json").unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_clear_removes_both_entries() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone(), StorageConfig::default());
        store
            .save(&Session {
                token: "abc123".into(),
                user: user(),
            })
            .unwrap();

        store.clear();
        assert!(backend.is_empty());
    }

    #[test]
    fn test_custom_keys() {
        let backend = MemoryStore::new();
        let keys = StorageConfig {
            token_key: "octofit_token".into(),
            user_key: "octofit_user".into(),
        };
        let store = SessionStore::new(backend.clone(), keys);
        store
            .save(&Session {
                token: "abc123".into(),
                user: user(),
            })
            .unwrap();
        assert!(backend.get("octofit_token").is_some());
        assert!(backend.get("token").is_none());
    }
}
