//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component builds one [`AuthContext`] from `localStorage` and
//! provides it. Route guards, the navbar, and every page that calls the
//! backend read it through [`use_auth`]; all transitions go through
//! `set_state` so the persisted copy and the signal never disagree.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use session::{KeyValueStore, Session, SessionCell, SessionManager, Token};

use crate::net::error::ApiError;
use crate::util::storage::BrowserStorage;

/// Reactive slot for the session. Reading it inside a view subscribes to
/// changes.
#[derive(Clone, Copy, Debug)]
pub struct SignalCell(pub RwSignal<Session>);

impl SessionCell for SignalCell {
    fn get(&self) -> Session {
        self.0.get()
    }

    fn set(&self, session: Session) {
        self.0.set(session);
    }
}

/// Session manager as provided to the view tree.
pub type AuthContext = SessionManager<BrowserStorage, SignalCell>;

/// Restore the persisted session and provide it as context.
pub fn provide_auth() -> AuthContext {
    let auth = SessionManager::hydrate(BrowserStorage, |session| SignalCell(RwSignal::new(session)));
    provide_context(auth);
    auth
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Token of the signed-in user, read without subscribing.
pub fn current_token<S, C>(auth: &SessionManager<S, C>) -> Option<Token>
where
    S: KeyValueStore,
    C: SessionCell,
{
    auth.state().token().cloned()
}

/// Live admin flag for toggling admin-only controls.
pub fn admin_signal<S, C>(auth: SessionManager<S, C>) -> Signal<bool>
where
    S: KeyValueStore + Send + Sync + 'static,
    C: SessionCell + Send + Sync + 'static,
{
    Signal::derive(move || auth.state().is_admin())
}

/// Token for a task that has already raised `pending`; with no session the
/// flag is lowered again so the page does not spin forever.
pub fn token_or_reset<S, C>(auth: &SessionManager<S, C>, pending: RwSignal<bool>) -> Option<Token>
where
    S: KeyValueStore,
    C: SessionCell,
{
    let token = current_token(auth);
    if token.is_none() {
        pending.set(false);
    }
    token
}

/// Route an API failure through the session: 401/403 end the session and
/// return `true`, so the caller can stop instead of showing an error.
pub fn check_api_error<S, C>(auth: &SessionManager<S, C>, err: &ApiError) -> bool
where
    S: KeyValueStore,
    C: SessionCell,
{
    err.status().is_some_and(|status| auth.handle_status(status))
}

/// Message to show for a failed call, or `None` when the failure ended the
/// session and the page is about to be replaced.
pub fn failure_message<S, C>(auth: &SessionManager<S, C>, err: &ApiError, fallback: &str) -> Option<String>
where
    S: KeyValueStore,
    C: SessionCell,
{
    if check_api_error(auth, err) {
        return None;
    }
    log::error!("api: {err}");
    Some(fallback.to_owned())
}
