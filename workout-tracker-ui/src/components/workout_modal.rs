//! Add / edit workout modal.

use leptos::*;
use workout_tracker::WorkoutForm;

use super::{FormField, InlineLoading};

#[component]
pub fn WorkoutModal(
    form: WorkoutForm,
    #[prop(into)]
    on_submit: Callback<WorkoutForm>,
    #[prop(into)]
    on_close: Callback<()>,
    #[prop(into)]
    submitting: Signal<bool>,
) -> impl IntoView {
    let title = form.title();
    let submit_label = form.submit_label();
    let draft = create_rw_signal(form);

    let ready = move || draft.with(WorkoutForm::is_ready);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ready() && !submitting.get_untracked() {
            on_submit.call(draft.get_untracked());
        }
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">{title}</h2>
                    <button
                        on:click=move |_| on_close.call(())
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=submit class="space-y-4">
                    <FormField
                        label="Name"
                        placeholder="e.g., Morning Run"
                        value=Signal::derive(move || draft.with(|f| f.name.clone()))
                        on_input=move |v: String| draft.update(|f| f.name = v)
                    />
                    <FormField
                        label="Duration"
                        placeholder="e.g., 30 mins, 1 hour"
                        value=Signal::derive(move || draft.with(|f| f.duration.clone()))
                        on_input=move |v: String| draft.update(|f| f.duration = v)
                    />

                    <div class="flex space-x-3 pt-4">
                        <button
                            type="button"
                            on:click=move |_| on_close.call(())
                            class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || !ready() || submitting.get()
                            class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   disabled:cursor-not-allowed rounded-lg font-medium transition-colors
                                   flex items-center justify-center space-x-2"
                        >
                            {move || submitting.get().then(|| view! { <InlineLoading /> })}
                            <span>{submit_label}</span>
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
