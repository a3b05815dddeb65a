//! # client
//!
//! Leptos + WASM frontend for account registration.
//!
//! This crate contains the register page and its form state, the auth and
//! ability state contexts, REST helpers, and browser utilities. The `server`
//! crate renders it with `ssr`; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic + log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
