//! Workout Card Component
//!
//! One workout with its edit, delete and complete actions.

use leptos::*;
use workout_tracker::Workout;

#[component]
pub fn WorkoutCard(
    workout: Workout,
    #[prop(into)]
    on_edit: Callback<Workout>,
    #[prop(into)]
    on_delete: Callback<String>,
    #[prop(into)]
    on_complete: Callback<String>,
) -> impl IntoView {
    let completed = workout.is_completed();
    let status_class = if completed {
        "bg-green-600"
    } else {
        "bg-yellow-600"
    };

    let for_edit = workout.clone();
    let delete_id = workout.id.clone();
    let complete_id = workout.id.clone();

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors text-center">
            <h3 class="font-semibold text-lg">{workout.name.clone()}</h3>

            <div class="space-y-1 mt-3 text-sm text-gray-400">
                <p>"Duration: "{workout.duration.clone()}</p>
                <p>
                    "Status: "
                    <span class=format!("{} text-xs px-2 py-0.5 rounded-full text-white", status_class)>
                        {workout.status.as_str()}
                    </span>
                </p>
                <p>"Added: "{workout.added_label()}</p>
            </div>

            <div class="flex justify-center space-x-2 mt-4">
                <button
                    on:click=move |_| on_edit.call(for_edit.clone())
                    class="px-3 py-1 text-sm rounded-lg border border-primary-500 text-primary-400 hover:bg-primary-600 hover:text-white transition-colors"
                >
                    "Edit"
                </button>
                <button
                    on:click=move |_| on_delete.call(delete_id.clone())
                    class="px-3 py-1 text-sm rounded-lg border border-red-500 text-red-400 hover:bg-red-600 hover:text-white transition-colors"
                >
                    "Delete"
                </button>
                {(!completed).then(|| view! {
                    <button
                        on:click=move |_| on_complete.call(complete_id.clone())
                        class="px-3 py-1 text-sm rounded-lg border border-green-500 text-green-400 hover:bg-green-600 hover:text-white transition-colors"
                    >
                        "✓ Done"
                    </button>
                })}
            </div>
        </div>
    }
}
