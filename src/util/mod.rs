//! Browser glue shared by pages and state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` backs the session store with `localStorage`, `download` hands
//! server-generated files to the browser, and `dialog` wraps `confirm`.

pub mod dialog;
pub mod download;
pub mod storage;
