//! # portal-admin
//!
//! Leptos + WASM admin client for the portal's content-management API.
//!
//! The crate centres on the authentication session: `session` keeps
//! `SessionState` in sync with the server's "whoami" endpoint, `gate` turns
//! that state into render/redirect decisions, and `components`/`pages` wire
//! both into the router.

pub mod app;
pub mod components;
pub mod config;
pub mod gate;
pub mod net;
pub mod pages;
pub mod session;

/// Browser entry point: installs logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
