//! # activity-client
//!
//! Leptos + WASM frontend for the activity signup board.
//!
//! This crate contains the page, components, shared state, and REST client
//! for the activities API. The `hydrate` feature builds the browser bundle;
//! the `ssr` feature is enabled by `activity-server` for server rendering.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
