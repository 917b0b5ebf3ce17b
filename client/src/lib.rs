//! # folio-client
//!
//! Leptos + WASM frontend for the portfolio and blog site.
//!
//! This crate contains pages, components, client state, the JSON API
//! client, and the theme synchronizer that keeps the `<html>` dark marker,
//! `localStorage`, and the OS color-scheme preference in agreement.

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
