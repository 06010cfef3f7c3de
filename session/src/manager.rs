//! Single owner of the live session.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionManager`] is built at application start and handed to the
//! view tree. Views read the session through it and every transition (login,
//! logout, a rejected token) goes through [`SessionManager::set_state`], which
//! persists and publishes in one step so storage and memory cannot drift.
//!
//! TRUST BOUNDARY
//! ==============
//! A stored token is taken as proof of authentication. Nothing here checks
//! expiry or signatures; a forged or stale token is only caught when the
//! backend answers 401/403 and [`SessionManager::handle_status`] runs.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::model::{Session, Token, UserProfile};
use crate::store::{KeyValueStore, SessionStore, StorageError};

/// Whether an HTTP status means the backend rejected the session.
pub fn is_auth_failure(status: u16) -> bool {
    matches!(status, 401 | 403)
}

/// Observable slot holding the in-memory session.
///
/// Implementations notify their subscribers on every `set`; the browser build
/// uses a reactive signal so all views re-render.
pub trait SessionCell {
    fn get(&self) -> Session;
    fn set(&self, session: Session);
}

/// Thread-safe cell that counts how many times it has been replaced.
#[derive(Clone, Debug, Default)]
pub struct SharedCell {
    session: Arc<Mutex<Session>>,
    revision: Arc<AtomicU64>,
}

impl SharedCell {
    pub fn new(session: Session) -> Self {
        Self { session: Arc::new(Mutex::new(session)), revision: Arc::default() }
    }

    /// Number of `set` calls so far.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Relaxed)
    }
}

impl SessionCell for SharedCell {
    fn get(&self) -> Session {
        self.session.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, session: Session) {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = session;
        self.revision.fetch_add(1, Ordering::Relaxed);
    }
}

/// Session store plus the reactive cell views subscribe to.
#[derive(Clone, Copy, Debug)]
pub struct SessionManager<S, C> {
    store: SessionStore<S>,
    cell: C,
}

impl<S: KeyValueStore, C: SessionCell> SessionManager<S, C> {
    pub fn new(store: SessionStore<S>, cell: C) -> Self {
        Self { store, cell }
    }

    /// Boot-time construction: read persisted state once and seed the cell.
    pub fn hydrate(backend: S, make_cell: impl FnOnce(Session) -> C) -> Self {
        let store = SessionStore::new(backend);
        let session = store.load();
        log::info!(
            "session: hydrated (authenticated={}, role={:?})",
            session.is_authenticated(),
            session.role()
        );
        Self { store, cell: make_cell(session) }
    }

    /// Current in-memory session.
    pub fn state(&self) -> Session {
        self.cell.get()
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }

    /// Replace the session, persisting it first.
    ///
    /// A rejected write leaves storage empty, so the previous session is
    /// written back; if that also fails the user is signed out in memory too.
    /// Either way memory ends up matching what a reload would see. Signing
    /// out always takes effect in memory, even when the persisted keys could
    /// not be removed.
    ///
    /// # Errors
    ///
    /// Returns the storage error from `save` or `clear`.
    pub fn set_state(&self, next: Session) -> Result<(), StorageError> {
        if next.is_authenticated() {
            if let Err(e) = self.store.save(&next) {
                self.restore_previous();
                return Err(e);
            }
            self.cell.set(next);
            Ok(())
        } else {
            let cleared = self.store.clear();
            self.cell.set(next);
            cleared
        }
    }

    /// Re-persist the in-memory session after a failed save wiped storage.
    fn restore_previous(&self) {
        let previous = self.cell.get();
        if !previous.is_authenticated() {
            return;
        }
        match self.store.save(&previous) {
            Ok(()) => log::warn!("session: new session not persisted, kept previous one"),
            Err(e) => {
                log::warn!("session: previous session not restorable ({e}), signing out");
                self.cell.set(Session::anonymous());
            }
        }
    }

    /// Install a freshly issued token and profile.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the session could not be persisted.
    pub fn login(&self, token: Token, user: UserProfile) -> Result<Session, StorageError> {
        let session = Session::from_login(token, user);
        self.set_state(session.clone())?;
        log::info!(
            "session: signed in as {} ({:?})",
            session.display_name().unwrap_or("<unnamed>"),
            session.role()
        );
        Ok(session)
    }

    /// Drop the session.
    ///
    /// # Errors
    ///
    /// Returns the storage error if persisted keys could not be removed; the
    /// in-memory session is anonymous regardless.
    pub fn logout(&self) -> Result<(), StorageError> {
        log::info!("session: signed out");
        self.set_state(Session::anonymous())
    }

    /// React to an HTTP status from an authenticated call.
    ///
    /// Returns `true` when the status rejected the session and it was
    /// cleared.
    pub fn handle_status(&self, status: u16) -> bool {
        if !is_auth_failure(status) {
            return false;
        }
        log::warn!("session: server rejected credentials ({status}), clearing session");
        if let Err(e) = self.set_state(Session::anonymous()) {
            log::warn!("session: clearing persisted session failed: {e}");
        }
        true
    }
}
