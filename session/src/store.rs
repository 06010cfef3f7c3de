//! Durable persistence for the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build backs [`KeyValueStore`] with `localStorage`, so a signed
//! in user survives page reloads. Three string keys hold the whole session:
//! the bearer token, the role, and the JSON-encoded profile.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail loudly: a missing or unreadable key is an absent value
//! and a corrupt profile is dropped with a warning. Writes report
//! [`StorageError`] and never leave a half-written session behind.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::model::{Role, Session, Token, UserProfile};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const USER_KEY: &str = "user";

/// Failure writing to or reading from the persistence backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("storage operation on `{key}` failed: {reason}")]
    Backend { key: String, reason: String },
    #[error("profile encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String-keyed persistence slots.
pub trait KeyValueStore {
    /// Read `key`; `Ok(None)` when it was never written or has been removed.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be read at all.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

/// Reads and writes a [`Session`] through a [`KeyValueStore`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore<S> {
    backend: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Rebuild the persisted session.
    ///
    /// Without a non-empty token the result is anonymous regardless of what
    /// the other keys hold.
    pub fn load(&self) -> Session {
        let Some(token) = self.read(TOKEN_KEY).and_then(Token::new) else {
            return Session::anonymous();
        };

        let role = self.read(ROLE_KEY).and_then(|raw| {
            let role = Role::parse(&raw);
            if role.is_none() {
                log::warn!("session: ignoring unrecognized stored role {raw:?}");
            }
            role
        });

        let user = self
            .read(USER_KEY)
            .and_then(|raw| match serde_json::from_str::<UserProfile>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("session: stored profile is unreadable, dropping it: {e}");
                    None
                }
            });

        Session::authenticated(token, role, user)
    }

    /// Persist `session` as a unit. An anonymous session clears the store.
    ///
    /// The token is written last so a failure part way through cannot leave a
    /// token next to a stale profile; on failure every key is removed again.
    ///
    /// # Errors
    ///
    /// Returns the first encode or backend error encountered.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let Some(token) = session.token() else {
            return self.clear();
        };
        let user = session.user().map(serde_json::to_string).transpose()?;

        let result = self
            .write_optional(ROLE_KEY, session.role().map(Role::as_str))
            .and_then(|()| self.write_optional(USER_KEY, user.as_deref()))
            .and_then(|()| self.backend.set(TOKEN_KEY, token.as_str()));

        if let Err(e) = result {
            log::warn!("session: persisting session failed, clearing partial state: {e}");
            if let Err(clear_err) = self.clear() {
                log::warn!("session: cleanup after failed save also failed: {clear_err}");
            }
            return Err(e);
        }
        Ok(())
    }

    /// Remove every session key. Idempotent.
    ///
    /// All three removals are attempted even if one fails.
    ///
    /// # Errors
    ///
    /// Returns the first backend error encountered.
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut first_err = None;
        for key in [TOKEN_KEY, ROLE_KEY, USER_KEY] {
            if let Err(e) = self.backend.remove(key) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("session: reading `{key}` failed: {e}");
                None
            }
        }
    }

    fn write_optional(&self, key: &str, value: Option<&str>) -> Result<(), StorageError> {
        match value {
            Some(value) => self.backend.set(key, value),
            None => self.backend.remove(key),
        }
    }
}
