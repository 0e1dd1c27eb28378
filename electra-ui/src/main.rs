//! Electra web client
//!
//! Client-side rendered Leptos application compiled to WebAssembly. Session
//! state lives in `localStorage`; every route passes the navigation guard
//! from the `electra` crate before its page renders.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
