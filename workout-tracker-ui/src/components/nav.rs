//! Navigation Component
//!
//! Header bar whose links follow the session.

use leptos::*;
use leptos_router::A;
use workout_tracker::{nav_links, Route};

use crate::state::use_user;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let user = use_user();

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🏋"</span>
                        <span class="text-xl font-bold text-white">"Workout Tracker"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        {move || {
                            user.session
                                .with(nav_links)
                                .into_iter()
                                .map(|route| view! { <NavLink route=route /> })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(route: Route) -> impl IntoView {
    view! {
        <A
            href=route.path()
            exact=true
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {route.label()}
        </A>
    }
}
