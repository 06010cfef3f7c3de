//! Blocking browser dialogs.

pub const DELETE_HOTEL_PROMPT: &str = "Are you sure you want to delete this hotel?";

/// Ask the user to confirm. Native builds and blocked dialogs answer `false`.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
