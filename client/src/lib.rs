//! # client
//!
//! Leptos + WASM frontend for the government scheme assistant.
//!
//! This crate contains the chat page, its components, conversation state,
//! and the HTTP client for `/api/chat` and `/api/pdf`. The `hydrate`
//! feature builds the browser bundle; `ssr` lets the host render the same
//! components on the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
