//! Spinners shown while the service answers

use leptos::*;

/// Placeholder for the workout list until the first fetch settles
#[component]
pub fn Loading(#[prop(default = "Loading workouts...")] label: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-3 py-16 text-gray-400" role="status" aria-live="polite">
            <div class="loading-spinner w-10 h-10" />
            <p class="text-sm">{label}</p>
        </div>
    }
}

/// Spinner inside a busy submit button
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="loading-spinner inline-block w-4 h-4 mr-2 align-middle" aria-hidden="true" />
    }
}
