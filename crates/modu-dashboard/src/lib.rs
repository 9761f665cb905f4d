//! MODU Dashboard - Leptos 0.8 WASM Application
//!
//! Single-page dashboard shell for the MODU tool suite: route-based navigation,
//! presentational widgets, and a thin HTTP client for the backend health check.
//!
//! Compilation modes:
//! - `ssr` feature: Server-side rendering (server binary)
//! - `hydrate` feature: Client-side hydration (WASM)

// Allow clippy lints that are noisy for Leptos component code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![recursion_limit = "512"]

pub mod api_client;
pub mod app;
pub mod catalog;
pub mod config;
pub mod credentials;
pub mod routes;
#[cfg(feature = "ssr")]
pub mod server;
pub mod status;
pub mod timer;

/// Hydrate the client-side application.
///
/// Called from JavaScript after WASM module loads to make server-rendered HTML interactive.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::hydrate_body(app::App);
}
