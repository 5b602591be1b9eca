//! Climate Paradox Kenya
//!
//! Advocacy dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Emissions and vulnerability charts (Chart.js)
//! - County impact map (Leaflet)
//! - Community stories with a share-your-story form
//! - Petition signing with live totals
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Page lifecycles, drafts and chart configuration come from the
//! `paradox` core crate; this crate supplies the gloo-net backend and the views.

use leptos::*;

mod api;
mod app;
mod components;
mod js_bridge;
mod pages;
mod state;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    js_bridge::init();

    mount_to_body(|| view! { <app::App /> });
}
