//! Route wrapper that renders its children only when the session allows it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-evaluated whenever the session signal changes, so a logout or a 401
//! anywhere in the app moves the user off a protected page without the page
//! doing anything itself.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use session::{Decision, KeyValueStore, SessionCell, SessionManager, can_access};

use crate::state::auth::use_auth;

/// Guard verdict for the live session. Subscribes when read reactively.
pub fn guard_decision<S, C>(auth: &SessionManager<S, C>, requires_admin: bool) -> Decision
where
    S: KeyValueStore,
    C: SessionCell,
{
    can_access(&auth.state(), requires_admin)
}

#[component]
pub fn Protected(
    /// Only admins may see the children; other signed-in users go home.
    #[prop(optional)]
    requires_admin: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    move || {
        let decision = guard_decision(&auth, requires_admin);
        match decision.redirect_path() {
            None => children().into_any(),
            Some(path) => {
                log::debug!("guard: {decision:?} (requires_admin={requires_admin})");
                view! { <Redirect path=path/> }.into_any()
            }
        }
    }
}
