//! # bloodbank-client
//!
//! Leptos + WASM frontend for the blood-bank management system. The backend
//! is an external HTTP/JSON API (Django REST, default `http://127.0.0.1:8000/`);
//! this crate owns only the browser side: session handling, the authenticated
//! API-access layer, route guarding, and the page views.
//!
//! Browser-only dependencies are gated behind the `csr` cargo feature so the
//! core logic (auth state machine, error classification, query building,
//! debounce gating) compiles and unit-tests on the native target.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and logger, then mounts the
/// application to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(crate::app::App);
}
