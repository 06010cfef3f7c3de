use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_exact_wire_spelling() {
    assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    assert_eq!(Role::parse("USER"), Some(Role::User));
}

#[test]
fn role_rejects_other_spellings() {
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse(" ADMIN"), None);
    assert_eq!(Role::parse(""), None);
    assert_eq!(Role::parse("SUPERUSER"), None);
}

#[test]
fn role_display_matches_as_str() {
    assert_eq!(Role::Admin.to_string(), "ADMIN");
    assert_eq!(Role::User.to_string(), "USER");
}

// =============================================================
// Token
// =============================================================

#[test]
fn token_rejects_blank_input() {
    assert!(Token::new("").is_none());
    assert!(Token::new("   ").is_none());
}

#[test]
fn token_keeps_raw_value() {
    let token = Token::new("abc.def").unwrap();
    assert_eq!(token.as_str(), "abc.def");
    assert_eq!(token.bearer(), "Bearer abc.def");
}

#[test]
fn token_debug_is_redacted() {
    let token = Token::new("secret-value").unwrap();
    let printed = format!("{token:?}");
    assert!(!printed.contains("secret-value"));
}

// =============================================================
// Session
// =============================================================

#[test]
fn anonymous_session_has_no_role_or_user() {
    let session = Session::anonymous();
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
    assert_eq!(session.role(), None);
    assert!(session.user().is_none());
    assert!(session.token().is_none());
}

#[test]
fn from_login_takes_role_from_profile() {
    let user = UserProfile { role: Some(Role::Admin), ..UserProfile::named("alice") };
    let session = Session::from_login(Token::new("t").unwrap(), user);
    assert!(session.is_authenticated());
    assert!(session.is_admin());
    assert_eq!(session.display_name(), Some("alice"));
}

#[test]
fn authenticated_without_role_is_not_admin() {
    let session = Session::authenticated(Token::new("t").unwrap(), None, None);
    assert!(session.is_authenticated());
    assert!(!session.is_admin());
}

#[test]
fn display_name_ignores_blank_user_name() {
    let session = Session::authenticated(Token::new("t").unwrap(), Some(Role::User), Some(UserProfile::named("  ")));
    assert_eq!(session.display_name(), None);
}

// =============================================================
// UserProfile wire format
// =============================================================

#[test]
fn profile_decodes_backend_payload() {
    let raw = r#"{
        "id": 42,
        "userName": "bob",
        "email": "bob@agency.test",
        "companyName": "Bob Travel",
        "concerningPersonName": "Bob",
        "city": "Columbus",
        "state": "OH",
        "role": "USER",
        "approved": true
    }"#;
    let profile: UserProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.id.as_deref(), Some("42"));
    assert_eq!(profile.user_name, "bob");
    assert_eq!(profile.company_name, "Bob Travel");
    assert_eq!(profile.role, Some(Role::User));
    assert!(profile.approved);
    assert_eq!(profile.website, None);
}

#[test]
fn profile_accepts_minimal_payload() {
    let profile: UserProfile = serde_json::from_str(r#"{"userName":"alice"}"#).unwrap();
    assert_eq!(profile, UserProfile::named("alice"));
}

#[test]
fn profile_unknown_role_decodes_as_none() {
    let profile: UserProfile = serde_json::from_str(r#"{"userName":"x","role":"OWNER"}"#).unwrap();
    assert_eq!(profile.role, None);
}

#[test]
fn profile_null_strings_decode_as_empty() {
    let profile: UserProfile = serde_json::from_str(r#"{"userName":"x","email":null,"companyName":null}"#).unwrap();
    assert_eq!(profile.email, "");
    assert_eq!(profile.company_name, "");
}

#[test]
fn profile_string_id_is_kept() {
    let profile: UserProfile = serde_json::from_str(r#"{"userName":"x","id":"u-7"}"#).unwrap();
    assert_eq!(profile.id.as_deref(), Some("u-7"));
}

#[test]
fn profile_rejects_object_id() {
    let result: Result<UserProfile, _> = serde_json::from_str(r#"{"userName":"x","id":{}}"#);
    assert!(result.is_err());
}

#[test]
fn awaiting_approval_exempts_admins() {
    let admin = UserProfile { role: Some(Role::Admin), approved: false, ..UserProfile::named("a") };
    let pending = UserProfile { role: Some(Role::User), approved: false, ..UserProfile::named("u") };
    let approved = UserProfile { role: Some(Role::User), approved: true, ..UserProfile::named("v") };
    assert!(!admin.awaiting_approval());
    assert!(pending.awaiting_approval());
    assert!(!approved.awaiting_approval());
}
