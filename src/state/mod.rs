//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` wires the session manager into Leptos context; `hotels` holds the
//! pure filtering model behind the directory pages.

pub mod auth;
pub mod hotels;
