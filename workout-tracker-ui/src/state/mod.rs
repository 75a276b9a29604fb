//! State Management
//!
//! Session and notification state shared through Leptos context.

pub mod notify;
pub mod session;

pub use notify::{provide_notices, use_notices};
pub use session::{guard_route, provide_user_context, use_user};

/// Write a failure to the browser console
pub fn log_error(message: &str) {
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(message));
}
