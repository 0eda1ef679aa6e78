//! Local Scout - Medellín travel discovery site
//!
//! Marketing frontend for Local Scout, built with Leptos and WebAssembly.
//! Its centrepiece is the Discover demo slide, driven by a time-based
//! sequencer that loops a scripted walkthrough of the product.

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
