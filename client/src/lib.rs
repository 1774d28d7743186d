//! # client
//!
//! Leptos + WASM front end for the EscenArte marketplace.
//!
//! This crate wires the `escenarte` core into reactive context: it supplies
//! the browser transport and token storage, mirrors the session store into a
//! signal, and renders the screens behind the route guard.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
