//! # stayhub
//!
//! Leptos + WASM frontend for the StayHub hotel booking platform. Guests
//! browse hotels, check live room prices, and book through a four-step
//! wizard; hotel admins manage rooms and reservations; super admins manage
//! the hotel inventory.
//!
//! This crate contains pages, components, application state, the session
//! service, and the HTTP API client with transparent token refresh.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
