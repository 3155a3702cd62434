//! # portfolio-client
//!
//! Leptos + WASM frontend for the portfolio site: navigation, hero, tech
//! strip, about/services, projects gallery, contact form, and footer, all
//! sharing one light/dark theme.
//!
//! Built with `ssr` for server rendering and with `hydrate` for the browser
//! bundle. With neither feature the crate compiles natively for unit tests.

// The SSR view type of the full page nests deeper than the default limit.
#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
