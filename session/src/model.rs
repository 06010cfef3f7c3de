//! Session data model.
//!
//! DESIGN
//! ======
//! `Session` keeps its fields private so the authentication invariant holds by
//! construction: a session is authenticated exactly when it carries a
//! non-empty [`Token`], and an anonymous session never carries a role or a
//! profile.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Account role as issued by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Wire/storage spelling of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }

    /// Parse the exact wire spelling. Anything else is unrecognized.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ADMIN" => Some(Self::Admin),
            "USER" => Some(Self::User),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque bearer credential. Never inspected, never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wrap a raw token. Blank input is not a credential and yields `None`.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

/// Account record returned by the backend for logins and user listings.
///
/// Only `userName` is required; everything else tolerates absence so a
/// partially populated record from storage or an older server still decodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend identifier; numbers and strings are both accepted.
    #[serde(default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_name: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concerning_person_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Unknown role strings decode as `None` instead of rejecting the record.
    #[serde(default, deserialize_with = "deserialize_role", skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub approved: bool,
}

impl UserProfile {
    /// Profile with only a user name, as used by tests and fixtures.
    pub fn named(user_name: impl Into<String>) -> Self {
        Self { user_name: user_name.into(), ..Self::default() }
    }

    /// Whether the approval workflow still blocks this account from signing in.
    pub fn awaiting_approval(&self) -> bool {
        self.role != Some(Role::Admin) && !self.approved
    }
}

/// Client-held authentication state for the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<Token>,
    role: Option<Role>,
    user: Option<UserProfile>,
}

impl Session {
    /// The signed-out session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A signed-in session. `role` may be missing when storage held no
    /// recognizable value; such a session is treated as "not admin".
    pub fn authenticated(token: Token, role: Option<Role>, user: Option<UserProfile>) -> Self {
        Self { token: Some(token), role, user }
    }

    /// Session for a fresh login; the role comes from the profile.
    pub fn from_login(token: Token, user: UserProfile) -> Self {
        let role = user.role;
        Self::authenticated(token, role, Some(user))
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Profile user name, if a non-blank one is known.
    pub fn display_name(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|u| u.user_name.as_str())
            .filter(|name| !name.trim().is_empty())
    }
}

/// Decode a role leniently: unknown strings and `null` become `None`.
///
/// # Errors
///
/// Returns an error only when the value is neither a string nor `null`.
pub fn deserialize_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Role::parse))
}

/// Decode an identifier sent either as a JSON number or a string.
///
/// # Errors
///
/// Returns an error for any other JSON type.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

/// Optional variant of [`deserialize_id`]; `null` maps to `None`.
///
/// # Errors
///
/// Returns an error for values that are not a string, number, or `null`.
pub fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

/// Decode a string field where the server may send `null`.
///
/// # Errors
///
/// Returns an error when the value is neither a string nor `null`.
pub fn deserialize_null_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
