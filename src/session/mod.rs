//! Session State
//!
//! The authenticated user and token as known to the client. A
//! [`SessionContext`] is created once at startup from persistent storage and
//! handed to everything that needs it; cloning it shares the same state.

mod store;

pub use store::{KeyValueStore, MemoryStore, SessionStore, StorageError};

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::StorageConfig;
use crate::models::User;

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

type Listener = Rc<dyn Fn(Option<&Session>)>;

struct Inner {
    store: SessionStore,
    current: RefCell<Option<Session>>,
    listeners: RefCell<Vec<Listener>>,
}

/// Shared handle to the current session
#[derive(Clone)]
pub struct SessionContext {
    inner: Rc<Inner>,
}

impl SessionContext {
    /// Read the persisted session, if any
    pub fn hydrate(backend: impl KeyValueStore + 'static, keys: StorageConfig) -> Self {
        let store = SessionStore::new(backend, keys);
        let current = store.load();
        tracing::debug!(authenticated = current.is_some(), "Session hydrated");

        Self {
            inner: Rc::new(Inner {
                store,
                current: RefCell::new(current),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Empty session over an in-memory store
    pub fn in_memory() -> Self {
        Self::hydrate(MemoryStore::new(), StorageConfig::default())
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.current.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner
            .current
            .borrow()
            .as_ref()
            .map(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.inner.current.borrow().as_ref().map(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.current.borrow().is_some()
    }

    /// Persist both entries, then publish the new session.
    ///
    /// Nothing changes if the write fails.
    pub fn establish(&self, session: Session) -> Result<(), StorageError> {
        self.inner.store.save(&session)?;
        tracing::info!(username = %session.user.username, "Session established");
        *self.inner.current.borrow_mut() = Some(session);
        self.notify();
        Ok(())
    }

    /// Remove both entries and publish the signed-out state
    pub fn clear(&self) {
        self.inner.store.clear();
        let had_session = self.inner.current.borrow_mut().take().is_some();
        if had_session {
            tracing::info!("Session cleared");
        }
        self.notify();
    }

    pub fn subscribe(&self, listener: impl Fn(Option<&Session>) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn notify(&self) {
        // Snapshot so listeners may read the context or subscribe again
        let listeners: Vec<Listener> = self.inner.listeners.borrow().clone();
        let current = self.current();
        for listener in listeners {
            listener(current.as_ref());
        }
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("current", &self.inner.current.borrow())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn session() -> Session {
        Session {
            token: "abc123".into(),
            user: User {
                id: 1,
                username: "john_runner".into(),
                email: "john@example.com".into(),
                first_name: "John".into(),
                last_name: "Runner".into(),
            },
        }
    }

    #[test]
    fn test_hydrate_from_persisted_entries() {
        let backend = MemoryStore::new();
        SessionStore::new(backend.clone(), StorageConfig::default())
            .save(&session())
            .unwrap();

        let ctx = SessionContext::hydrate(backend, StorageConfig::default());
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.token().as_deref(), Some("abc123"));
        assert_eq!(ctx.user().unwrap().display_name(), "John Runner");
    }

    #[test]
    fn test_hydrate_empty_store() {
        let ctx = SessionContext::in_memory();
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.token(), None);
        assert_eq!(ctx.current(), None);
    }

    #[test]
    fn test_establish_and_clear_write_through() {
        let backend = MemoryStore::new();
        let ctx = SessionContext::hydrate(backend.clone(), StorageConfig::default());

        ctx.establish(session()).unwrap();
        assert_eq!(backend.get("token").as_deref(), Some("abc123"));
        assert!(backend.get("user").is_some());

        ctx.clear();
        assert!(!ctx.is_authenticated());
        assert!(backend.get("token").is_none());
        assert!(backend.get("user").is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let ctx = SessionContext::in_memory();
        let other = ctx.clone();
        ctx.establish(session()).unwrap();
        assert!(other.is_authenticated());
        other.clear();
        assert!(!ctx.is_authenticated());
    }

    #[test]
    fn test_listeners_observe_changes() {
        let ctx = SessionContext::in_memory();
        let seen = Rc::new(Cell::new(0));
        let signed_in = Rc::new(Cell::new(false));
        {
            let seen = seen.clone();
            let signed_in = signed_in.clone();
            ctx.subscribe(move |s| {
                seen.set(seen.get() + 1);
                signed_in.set(s.is_some());
            });
        }

        ctx.establish(session()).unwrap();
        assert_eq!(seen.get(), 1);
        assert!(signed_in.get());

        ctx.clear();
        assert_eq!(seen.get(), 2);
        assert!(!signed_in.get());
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".into(),
            })
        }
        fn remove(&self, _key: &str) {}
    }

    #[test]
    fn test_failed_write_leaves_session_unchanged() {
        let ctx = SessionContext::hydrate(FailingStore, StorageConfig::default());
        let err = ctx.establish(session()).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert!(!ctx.is_authenticated());
    }
}
