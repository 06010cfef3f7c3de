//! Classification of failed backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every HTTP failure is mapped onto [`ApiError`] once, here. Callers decide
//! presentation from the variant; 401/403 are singled out so the session
//! layer can clear the stored token.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("unable to connect to the server: {0}")]
    Network(String),
    /// 401 or 403: the token was rejected or lacks the privilege.
    #[error("request rejected with status {status}")]
    Unauthorized { status: u16, message: Option<String> },
    #[error("not found")]
    NotFound,
    /// 400 with the server's explanation.
    #[error("{0}")]
    Validation(String),
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build an error from a non-2xx status and its raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body);
        match status {
            401 | 403 => Self::Unauthorized { status, message },
            404 => Self::NotFound,
            400 => Self::Validation(message.unwrap_or_else(|| "Please check your input".to_owned())),
            _ => Self::Server { status, message: message.unwrap_or_else(|| "Something went wrong".to_owned()) },
        }
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::NotFound => Some(404),
            Self::Validation(_) => Some(400),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => None,
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        self.status().is_some_and(session::is_auth_failure)
    }

    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message, .. } => message.as_deref(),
            Self::Validation(message) | Self::Server { message, .. } => Some(message),
            Self::Network(_) | Self::NotFound | Self::Decode(_) | Self::Unavailable => None,
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"message": "..."}`, a JSON string, or plain text; blank bodies
/// and other JSON shapes yield `None`.
pub fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => map
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_owned),
        Ok(serde_json::Value::String(s)) => Some(s).filter(|s| !s.trim().is_empty()),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_owned()),
    }
}
