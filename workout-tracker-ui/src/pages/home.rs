//! Home Page

use leptos::*;
use leptos_router::A;

use crate::state::use_user;

#[component]
pub fn Home() -> impl IntoView {
    let user = use_user();

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-4xl font-bold mb-4">"Welcome to Workout Tracker"</h1>
            <p class="text-gray-400 mb-8">"Track and manage your daily workouts."</p>

            {move || {
                if user.is_authenticated() {
                    view! {
                        <A
                            href="/workouts"
                            class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                        >
                            "View Workouts"
                        </A>
                    }.into_view()
                } else {
                    view! {
                        <A
                            href="/login"
                            class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                        >
                            "Get Started"
                        </A>
                    }.into_view()
                }
            }}
        </div>
    }
}
