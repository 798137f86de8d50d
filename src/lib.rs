//! # tagboard
//!
//! Leptos + WASM widget pair for record tagging: a tag editor with debounced
//! autocomplete and create-or-attach semantics, and a related-records panel
//! that reacts to "show everything tagged X" events over a page-scoped
//! publish/subscribe bus.
//!
//! This crate contains pages, components, application state, the HTTP API
//! wrappers, and the event bus. The two widgets never reference each other;
//! they cooperate only through [`bus::PubSub`].

pub mod app;
pub mod bus;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
