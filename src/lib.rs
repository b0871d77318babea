//! # nicelab-client
//!
//! Leptos + WASM front end for the Nice Lab file-sharing service.
//!
//! The interesting part is the session/authorization gate: a session
//! store (login flag, user profile, bearer token) persisted to browser
//! localStorage, and a navigation guard that checks every route
//! transition against per-route auth requirements and handles the
//! `/logout` pseudo-route. Credential verification itself lives in the
//! external auth service; this crate only records and enforces its
//! result.

pub mod app;
pub mod net;
pub mod pages;
pub mod routing;
pub mod session;

/// WASM entry point: install logging and hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
