//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the page, its section components, the static content
//! store, and the contact form logic. It integrates with the `scene` crate
//! for the animated hero canvas via the `HeroCanvas` bridge component.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second hydrate call (hot reload) finds the logger already installed.
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::debug!("console logger already installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
