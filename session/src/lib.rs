//! Client-side session and authorization model for the Columbus admin UI.
//!
//! Everything that decides who the current user is and what they may see
//! lives here, free of any browser or UI dependency. The Leptos client plugs
//! in a `localStorage` backend and a reactive signal; tests plug in the
//! in-memory implementations from this crate.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | [`Session`], [`Role`], [`Token`], and the typed [`UserProfile`] |
//! | [`store`] | [`SessionStore`] over a pluggable [`KeyValueStore`] backend |
//! | [`manager`] | [`SessionManager`], the single owner of the live session |
//! | [`guard`] | [`can_access`], the pure route-guard decision |

pub mod guard;
pub mod manager;
pub mod model;
pub mod store;

pub use guard::{Decision, HOME_PATH, LOGIN_PATH, can_access};
pub use manager::{SessionCell, SessionManager, SharedCell, is_auth_failure};
pub use model::{Role, Session, Token, UserProfile};
pub use store::{KeyValueStore, MemoryStore, SessionStore, StorageError};
