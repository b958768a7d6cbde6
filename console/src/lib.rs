//! # habithive-console
//!
//! Leptos + WASM administrative console for HabitHive. Renders list and form
//! screens for progress records, roles, permissions, and users on top of the
//! HabitHive REST backend.
//!
//! The crate is split the usual way: `net` owns the HTTP client and typed
//! resource façades, `state` holds page and session state, `components` the
//! generic table/form/modal primitives, and `pages` composes them into one
//! screen per route.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
