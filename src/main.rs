//! ConsultaBot Dashboard
//!
//! Operations dashboard for the ConsultaBot WhatsApp booking chatbot,
//! built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. The chatbot's REST API is an external collaborator
//! reached through an injected API client; everything here is fetch,
//! filter and render.

use leptos::*;

mod api;
mod app;
mod components;
mod panels;
mod state;
mod storage;
mod utils;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
