//! Workout Tracker Web Client
//!
//! Browser front end for the workout service, built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered. Session handling, response decoding, form rules
//! and list updates come from the `workout-tracker` core crate; this
//! crate supplies the gloo-net transport, the localStorage token store
//! and the views.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
