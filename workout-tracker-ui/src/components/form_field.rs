//! Labelled text input bound to a form field.

use leptos::*;

#[component]
pub fn FormField(
    label: &'static str,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional)]
    placeholder: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                required=true
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
