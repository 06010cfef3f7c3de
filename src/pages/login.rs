//! Login page: username/password sign-in with an approval pre-check.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login goes through the session manager, which persists the
//! token before the navbar and guards see it. Admins land on the add-hotel
//! page, everyone else on home.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "csr")]
use leptos_router::{NavigateOptions, hooks::use_navigate};
use session::{HOME_PATH, Role, Session, Token, UserProfile};

use crate::net::error::ApiError;
use crate::net::types::{Credentials, LoginResponse, UserCheck};

pub const USER_NOT_FOUND: &str = "User does not exist. Please check your username or register.";
pub const PENDING_APPROVAL: &str = "Your account is pending approval by an administrator.";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password. Please try again.";
pub const UNABLE_TO_CONNECT: &str = "Unable to connect to the server. Please try again.";
pub const INVALID_RESPONSE: &str = "Invalid response from server";
pub const MISSING_FIELDS: &str = "Enter both username and password.";

/// Where admins go after signing in.
pub const ADMIN_LANDING_PATH: &str = "/add-hotel";

/// Trimmed credentials, or a message when either field is blank.
///
/// # Errors
///
/// Returns [`MISSING_FIELDS`] when the user name or password is empty.
pub fn validate_credentials(user_name: &str, password: &str) -> Result<Credentials, &'static str> {
    let user_name = user_name.trim();
    if user_name.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Credentials { user_name: user_name.to_owned(), password: password.to_owned() })
}

/// Reason to stop before sending the password, from the pre-check answer.
pub fn check_user_rejection(check: &UserCheck) -> Option<&'static str> {
    if !check.exists {
        Some(USER_NOT_FOUND)
    } else if !check.approved && check.role != Some(Role::Admin) {
        Some(PENDING_APPROVAL)
    } else {
        None
    }
}

/// Validate a login response into the parts a session needs.
///
/// # Errors
///
/// Returns a user-facing message when the token or profile is missing, or
/// when a non-admin account is not yet approved.
pub fn accept_login(response: LoginResponse) -> Result<(Token, UserProfile), &'static str> {
    let token = response.token.and_then(Token::new).ok_or(INVALID_RESPONSE)?;
    let user = response.user.ok_or(INVALID_RESPONSE)?;
    if user.awaiting_approval() {
        return Err(PENDING_APPROVAL);
    }
    Ok((token, user))
}

pub fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized { status: 403, .. } => PENDING_APPROVAL.to_owned(),
        ApiError::Unauthorized { .. } => INVALID_CREDENTIALS.to_owned(),
        ApiError::Network(_) => UNABLE_TO_CONNECT.to_owned(),
        ApiError::Decode(_) => INVALID_RESPONSE.to_owned(),
        ApiError::NotFound => "Invalid username or password".to_owned(),
        ApiError::Validation(message) | ApiError::Server { message, .. } => message.clone(),
        ApiError::Unavailable => err.to_string(),
    }
}

pub fn landing_path(session: &Session) -> &'static str {
    if session.is_admin() { ADMIN_LANDING_PATH } else { HOME_PATH }
}

/// Full sign-in exchange. Returns the path to land on.
#[cfg(any(test, feature = "csr"))]
async fn sign_in<S, C>(
    api: &crate::net::api::ApiClient,
    auth: &session::SessionManager<S, C>,
    credentials: Credentials,
) -> Result<&'static str, String>
where
    S: session::KeyValueStore,
    C: session::SessionCell,
{
    match api.check_user(&credentials.user_name).await {
        Ok(check) => {
            if let Some(reason) = check_user_rejection(&check) {
                return Err(reason.to_owned());
            }
        }
        Err(e) => log::warn!("login: user pre-check failed, continuing: {e}"),
    }

    let response = api.login(&credentials).await.map_err(|e| {
        log::error!("login: request failed: {e}");
        login_error_message(&e)
    })?;
    let (token, user) = accept_login(response).map_err(str::to_owned)?;
    let session = auth.login(token.clone(), user).map_err(|e| {
        log::error!("login: could not persist session: {e}");
        format!("Could not save your session: {e}")
    })?;

    match api.validate_token(&token).await {
        Ok(body) => log::debug!("login: token validated: {body}"),
        Err(e) => log::debug!("login: token validation failed: {e}"),
    }
    Ok(landing_path(&session))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let user_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let (auth, api, navigate) = (crate::state::auth::use_auth(), crate::net::api::use_api(), use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&user_name.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match sign_in(&api, &auth, credentials).await {
                    Ok(path) => navigate(path, NavigateOptions::default()),
                    Err(message) => {
                        error.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to manage the hotel directory"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span>"Username"</span>
                        <input
                            type="text"
                            autocomplete="username"
                            prop:value=move || user_name.get()
                            on:input=move |ev| user_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="form-message form-message--error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? "
                    <A href="/register">"Register your agency"</A>
                </p>
            </div>
        </div>
    }
}
