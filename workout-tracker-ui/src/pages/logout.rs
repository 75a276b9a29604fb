//! Logout Page

use leptos::*;
use leptos_router::Redirect;

use crate::state::{use_notices, use_user};

/// Clears the session and moves on to the login page
#[component]
pub fn Logout() -> impl IntoView {
    use_user().logout();
    use_notices().success("You have been logged out.");

    view! { <Redirect path="/login" /> }
}
