//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from context: `protected` gates routes,
//! `navbar` adapts its links to the role, and `hotel_card` renders one
//! directory entry.

pub mod hotel_card;
pub mod navbar;
pub mod protected;
