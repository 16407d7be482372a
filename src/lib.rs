//! CoCred - Co-curricular credentialing front-end
//!
//! Students and faculty sign in through a hosted auth service and land on a
//! personal dashboard. Built with Leptos and WebAssembly.

#![recursion_limit = "1024"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
