//! Toast Notification Component
//!
//! Renders the notice queue in the top-right corner.

use leptos::*;
use workout_tracker::{Notice, NoticeLevel};

use crate::state::use_notices;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let notices = use_notices();

    view! {
        <div class="fixed top-20 right-4 z-50 space-y-2">
            <For
                each=move || notices.items.get()
                key=|(id, _)| *id
                children=move |(id, notice)| view! { <ToastMessage id=id notice=notice /> }
            />
        </div>
    }
}

#[component]
fn ToastMessage(id: u32, notice: Notice) -> impl IntoView {
    let notices = use_notices();

    let (icon, bg_class) = match notice.level {
        NoticeLevel::Success => ("✓", "bg-green-600"),
        NoticeLevel::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div
            class=format!(
                "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                 transform transition-all duration-300 ease-out animate-slide-in cursor-pointer",
                bg_class
            )
            on:click=move |_| notices.dismiss(id)
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{notice.message}</span>
        </div>
    }
}
