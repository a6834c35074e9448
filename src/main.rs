//! Quill Dashboard
//!
//! Personal blogging frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Account signup and login with bearer-token sessions
//! - Post composer that doubles as an editor via a hidden post id
//! - Comments on every post
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Quill REST API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
