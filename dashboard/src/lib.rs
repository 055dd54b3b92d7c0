//! # dashboard
//!
//! Leptos + WASM admin dashboard for the Z-Memory backend.
//!
//! This crate contains the theme preference core, the route table, the
//! browser executor for `contracts` requests, and the pages that browse
//! memory logs and reinforcement-learning state. Browser APIs are only
//! touched under the `csr` feature; native builds compile every module with
//! inert adapters so the logic can be tested with `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod theme;
pub mod util;

/// WASM entry point: install logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
