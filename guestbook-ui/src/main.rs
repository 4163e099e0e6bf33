//! Guestbook Page
//!
//! Single-page guestbook built with Leptos (WASM): a form to sign or edit
//! an entry and the list of entries, kept in sync with the guestbook API.
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! All reads and writes go to the remote API over HTTP; the list shown is
//! always the server's last answer.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
