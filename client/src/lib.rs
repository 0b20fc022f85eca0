//! # client
//!
//! Leptos + WASM frontend for the campus second-hand book market.
//!
//! Pages talk to the backend REST API through `net::api`; the host server
//! renders the same `App` for SSR and proxies `/api` to the backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wires browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
