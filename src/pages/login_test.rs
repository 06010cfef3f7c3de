use session::{MemoryStore, SessionManager, SessionStore, SharedCell};

use super::*;
use crate::config::AppConfig;
use crate::net::api::ApiClient;

fn approved(role: Role) -> UserProfile {
    UserProfile { role: Some(role), approved: true, ..UserProfile::named("amy") }
}

fn poll_once<F: std::future::Future>(fut: F) -> F::Output {
    let mut cx = std::task::Context::from_waker(std::task::Waker::noop());
    let mut fut = std::pin::pin!(fut);
    match fut.as_mut().poll(&mut cx) {
        std::task::Poll::Ready(out) => out,
        std::task::Poll::Pending => panic!("future did not complete"),
    }
}

// =============================================================
// Input and pre-check
// =============================================================

#[test]
fn credentials_are_trimmed_and_required() {
    let creds = validate_credentials("  amy ", "pw").unwrap();
    assert_eq!(creds.user_name, "amy");
    assert_eq!(validate_credentials("   ", "pw"), Err(MISSING_FIELDS));
    assert_eq!(validate_credentials("amy", ""), Err(MISSING_FIELDS));
}

#[test]
fn pre_check_rejects_unknown_and_unapproved_users() {
    let unknown = UserCheck::default();
    assert_eq!(check_user_rejection(&unknown), Some(USER_NOT_FOUND));
    let pending = UserCheck { exists: true, approved: false, role: Some(Role::User) };
    assert_eq!(check_user_rejection(&pending), Some(PENDING_APPROVAL));
}

#[test]
fn pre_check_lets_admins_and_approved_users_through() {
    let admin = UserCheck { exists: true, approved: false, role: Some(Role::Admin) };
    assert_eq!(check_user_rejection(&admin), None);
    let user = UserCheck { exists: true, approved: true, role: None };
    assert_eq!(check_user_rejection(&user), None);
}

// =============================================================
// Login response
// =============================================================

#[test]
fn accept_login_requires_token_and_user() {
    let missing_user = LoginResponse { token: Some("t".to_owned()), user: None };
    assert_eq!(accept_login(missing_user), Err(INVALID_RESPONSE));
    let blank_token = LoginResponse { token: Some("  ".to_owned()), user: Some(approved(Role::User)) };
    assert_eq!(accept_login(blank_token), Err(INVALID_RESPONSE));
}

#[test]
fn accept_login_refuses_unapproved_non_admin() {
    let user = UserProfile { approved: false, ..approved(Role::User) };
    let resp = LoginResponse { token: Some("t".to_owned()), user: Some(user) };
    assert_eq!(accept_login(resp), Err(PENDING_APPROVAL));
}

#[test]
fn accept_login_admits_admin_even_unapproved() {
    let admin = UserProfile { approved: false, ..approved(Role::Admin) };
    let resp = LoginResponse { token: Some("t".to_owned()), user: Some(admin.clone()) };
    let (token, user) = accept_login(resp).unwrap();
    assert_eq!(token.as_str(), "t");
    assert_eq!(user, admin);
}

// =============================================================
// Errors and landing
// =============================================================

#[test]
fn error_messages_by_status() {
    assert_eq!(login_error_message(&ApiError::from_status(403, "")), PENDING_APPROVAL);
    assert_eq!(login_error_message(&ApiError::from_status(401, "")), INVALID_CREDENTIALS);
    assert_eq!(login_error_message(&ApiError::Network("x".to_owned())), UNABLE_TO_CONNECT);
    assert_eq!(login_error_message(&ApiError::from_status(500, r#"{"message":"db down"}"#)), "db down");
}

#[test]
fn admins_land_on_add_hotel() {
    let token = || Token::new("t").unwrap();
    assert_eq!(landing_path(&Session::from_login(token(), approved(Role::Admin))), ADMIN_LANDING_PATH);
    assert_eq!(landing_path(&Session::from_login(token(), approved(Role::User))), HOME_PATH);
    assert_eq!(landing_path(&Session::authenticated(token(), None, None)), HOME_PATH);
}

#[cfg(not(feature = "csr"))]
#[test]
fn sign_in_without_backend_leaves_session_anonymous() {
    let api = ApiClient::new(AppConfig::default());
    let auth = SessionManager::new(SessionStore::new(MemoryStore::new()), SharedCell::default());
    let creds = validate_credentials("amy", "pw").unwrap();
    let result = poll_once(sign_in(&api, &auth, creds));
    assert_eq!(result, Err(ApiError::Unavailable.to_string()));
    assert!(!auth.state().is_authenticated());
}
