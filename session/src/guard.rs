//! Route guard decision.
//!
//! Pure function of the session and the route's requirement. The client's
//! `Protected` component evaluates it on every session change and turns the
//! decision into either the page or a redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::model::Session;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Outcome of evaluating a navigation against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

impl Decision {
    /// Where to send the user instead, if anywhere.
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToHome => Some(HOME_PATH),
        }
    }
}

/// Decide whether a view may render.
///
/// The login check runs first, so an anonymous visitor to an admin page is
/// sent to log in rather than home. A missing or unrecognized role never
/// satisfies `requires_admin`.
pub fn can_access(session: &Session, requires_admin: bool) -> Decision {
    if !session.is_authenticated() {
        Decision::RedirectToLogin
    } else if requires_admin && !session.is_admin() {
        Decision::RedirectToHome
    } else {
        Decision::Allow
    }
}
