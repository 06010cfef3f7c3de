//! Networking for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls, `error` classifies failures (including the
//! 401/403 responses that end a session), and `types` defines the wire
//! schema for hotels, registrations, and login exchanges.

pub mod api;
pub mod error;
pub mod types;
