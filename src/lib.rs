//! # shopfront
//!
//! Leptos + WASM frontend for the Shopfront e-commerce storefront.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the storefront API. The centerpiece is the credential-submission
//! flow: local validation, a single-flight asynchronous login request, and
//! outcome routing with an email-verification gate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
