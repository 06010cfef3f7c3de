//! # columbus-admin
//!
//! Leptos + WASM administrative front-end for the Columbus Vacations hotel
//! directory and travel-agent registration workflow.
//!
//! Session handling and route-guard decisions live in the `session` crate;
//! this crate wires them into Leptos context, talks to the REST backend, and
//! renders the pages. Browser-only pieces are behind the `csr` feature so the
//! crate also builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = config::AppConfig::from_build_env();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("logger already initialized: {e}").into());
    }
    log::info!("columbus-admin starting against {}", config.api_base_url);
    leptos::mount::mount_to_body(app::App);
}
