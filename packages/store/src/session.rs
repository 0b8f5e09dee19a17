//! # Session context — the injected Session Store
//!
//! [`SessionContext`] is the only way the rest of the client touches persisted
//! session state. It is constructed once at startup over a platform
//! [`KeyValueStore`] and handed to the API client and the UI through Dioxus
//! context, so tests can substitute a [`crate::MemoryStore`].
//!
//! ## Invariant
//!
//! Readers never observe a partial session. [`SessionContext::current`] returns
//! `Some` only when both the token and a parseable user id are stored, and
//! every accessor ([`token`](SessionContext::token),
//! [`user_id`](SessionContext::user_id), ...) is derived from it. Leftover keys
//! from an interrupted write or an older client version read as "signed out"
//! and are removed by [`SessionContext::clear`].

use std::fmt;
use std::sync::Arc;

use crate::models::{Session, SESSION_KEYS, TOKEN_KEY, USER_EMAIL_KEY, USER_ID_KEY, USER_NAME_KEY};

/// Synchronous string key/value persistence (browser `localStorage` semantics).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);

    /// Write several entries. Backends that can do so under a single lock
    /// should override this.
    fn set_all(&self, entries: &[(String, String)]) {
        for (key, value) in entries {
            self.set(key, value);
        }
    }

    fn remove_all(&self, keys: &[String]) {
        for key in keys {
            self.remove(key);
        }
    }
}

/// Read/write/clear access to the signed-in session.
#[derive(Clone)]
pub struct SessionContext {
    backend: Arc<dyn KeyValueStore>,
    prefix: String,
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("prefix", &self.prefix)
            .field("authorized", &self.is_authorized())
            .finish()
    }
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.backend), Arc::as_ptr(&other.backend))
            && self.prefix == other.prefix
    }
}

impl SessionContext {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
            prefix: String::new(),
        }
    }

    /// Namespace every persisted key with `prefix` (e.g. `"taskdesk."`).
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    fn key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    fn read(&self, name: &str) -> Option<String> {
        self.backend
            .get(&self.key(name))
            .filter(|value| !value.is_empty())
    }

    /// Persist all four session fields in one write.
    pub fn set_session(
        &self,
        token: &str,
        user_id: i64,
        user_name: &str,
        user_email: &str,
    ) -> Session {
        let session = Session::new(token, user_id, user_name, user_email);
        self.store(&session);
        session
    }

    pub fn store(&self, session: &Session) {
        let entries = vec![
            (self.key(TOKEN_KEY), session.token.clone()),
            (self.key(USER_ID_KEY), session.user_id.to_string()),
            (self.key(USER_NAME_KEY), session.user_name.clone()),
            (self.key(USER_EMAIL_KEY), session.user_email.clone()),
        ];
        self.backend.set_all(&entries);
        tracing::debug!(user_id = session.user_id, "session stored");
    }

    /// The complete session, or `None` when signed out or only partially stored.
    pub fn current(&self) -> Option<Session> {
        let token = self.read(TOKEN_KEY)?;
        let user_id = self.read(USER_ID_KEY)?.trim().parse::<i64>().ok()?;
        Some(Session {
            token,
            user_id,
            user_name: self.read(USER_NAME_KEY).unwrap_or_default(),
            user_email: self.read(USER_EMAIL_KEY).unwrap_or_default(),
        })
    }

    pub fn token(&self) -> Option<String> {
        self.current().map(|s| s.token)
    }

    pub fn user_id(&self) -> Option<i64> {
        self.current().map(|s| s.user_id)
    }

    pub fn user_name(&self) -> Option<String> {
        self.current().map(|s| s.user_name)
    }

    pub fn user_email(&self) -> Option<String> {
        self.current().map(|s| s.user_email)
    }

    pub fn is_authorized(&self) -> bool {
        self.current().is_some()
    }

    /// True when some session keys are stored but they do not form a session.
    pub fn is_partial(&self) -> bool {
        self.current().is_none() && SESSION_KEYS.iter().any(|k| self.read(k).is_some())
    }

    /// Remove every session key.
    pub fn clear(&self) {
        let keys: Vec<String> = SESSION_KEYS.iter().map(|k| self.key(k)).collect();
        self.backend.remove_all(&keys);
        tracing::debug!("session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_set_and_read_session() {
        let session = SessionContext::new(MemoryStore::new());
        assert!(session.current().is_none());

        session.set_session("abc", 7, "Ana", "ana@example.com");

        let current = session.current().unwrap();
        assert_eq!(current.token, "abc");
        assert_eq!(current.user_id, 7);
        assert_eq!(current.user_name, "Ana");
        assert_eq!(current.user_email, "ana@example.com");
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(session.user_id(), Some(7));
    }

    #[test]
    fn test_clear_removes_every_field() {
        let store = MemoryStore::new();
        let session = SessionContext::new(store.clone());
        session.set_session("abc", 7, "Ana", "ana@example.com");

        session.clear();

        assert!(session.current().is_none());
        for key in SESSION_KEYS {
            assert!(store.get(key).is_none(), "{key} still stored");
        }
    }

    #[test]
    fn test_token_present_iff_user_id_present() {
        for (token, user_id) in [
            (None, None),
            (Some("tok"), None),
            (None, Some("3")),
            (Some("tok"), Some("3")),
        ] {
            let store = MemoryStore::new();
            if let Some(t) = token {
                store.set(TOKEN_KEY, t);
            }
            if let Some(id) = user_id {
                store.set(USER_ID_KEY, id);
            }
            let session = SessionContext::new(store);
            assert_eq!(session.token().is_some(), session.user_id().is_some());
            assert_eq!(
                session.is_authorized(),
                token.is_some() && user_id.is_some()
            );
        }
    }

    #[test]
    fn test_partial_session_detected() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok");
        let session = SessionContext::new(store);
        assert!(session.is_partial());

        session.clear();
        assert!(!session.is_partial());
    }

    #[test]
    fn test_unparseable_user_id_is_signed_out() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok");
        store.set(USER_ID_KEY, "undefined");
        let session = SessionContext::new(store);
        assert!(session.current().is_none());
        assert!(session.is_partial());
    }

    #[test]
    fn test_prefixed_keys() {
        let store = MemoryStore::new();
        let session = SessionContext::new(store.clone()).with_prefix("taskdesk.");
        session.set_session("abc", 1, "Ana", "ana@example.com");

        assert_eq!(store.get("taskdesk.token").as_deref(), Some("abc"));
        assert!(store.get(TOKEN_KEY).is_none());
    }
}
