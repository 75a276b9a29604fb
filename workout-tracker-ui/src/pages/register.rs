//! Register Page

use leptos::*;
use leptos_router::{use_navigate, A};
use workout_tracker::forms::REGISTER_REDIRECT_MS;
use workout_tracker::session::{self, register_notices};
use workout_tracker::{FormProblem, RegisterForm, Route};

use crate::api;
use crate::components::{FormField, InlineLoading};
use crate::state::{guard_route, use_notices};

#[component]
pub fn Register() -> impl IntoView {
    guard_route(Route::Register);

    let notices = use_notices();
    let navigate = use_navigate();

    let form = create_rw_signal(RegisterForm::default());
    let (submitting, set_submitting) = create_signal(false);

    let submittable = move || form.with(RegisterForm::is_submittable);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !submittable() || submitting.get_untracked() {
            return;
        }

        let current = form.get_untracked();
        let navigate = navigate.clone();
        set_submitting.set(true);

        spawn_local(async move {
            let result = session::register(&api::client(), &current).await;
            for notice in register_notices(&result) {
                notices.push(notice);
            }

            if result.is_ok() {
                form.update(RegisterForm::reset);
                gloo_timers::callback::Timeout::new(REGISTER_REDIRECT_MS, move || {
                    navigate(Route::Login.path(), Default::default());
                })
                .forget();
            }
            set_submitting.set(false);
        });
    };

    // Only rules about what was typed; empty fields just keep submit disabled
    let hints = move || {
        form.with(|f| {
            f.problems()
                .into_iter()
                .filter(|p| !matches!(p, FormProblem::Missing(_)))
                .map(|p| view! { <li>{p.to_string()}</li> })
                .collect_view()
        })
    };

    view! {
        <div class="max-w-md mx-auto">
            <h1 class="text-3xl font-bold text-center my-8">"Register"</h1>

            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                <FormField
                    label="First Name"
                    placeholder="Enter your first name"
                    value=Signal::derive(move || form.with(|f| f.first_name.clone()))
                    on_input=move |v: String| form.update(|f| f.first_name = v)
                />
                <FormField
                    label="Last Name"
                    placeholder="Enter your last name"
                    value=Signal::derive(move || form.with(|f| f.last_name.clone()))
                    on_input=move |v: String| form.update(|f| f.last_name = v)
                />
                <FormField
                    label="Email"
                    input_type="email"
                    placeholder="Enter your email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=move |v: String| form.update(|f| f.email = v)
                />
                <FormField
                    label="Mobile Number"
                    placeholder="Enter your 11-digit mobile number"
                    value=Signal::derive(move || form.with(|f| f.mobile_no.clone()))
                    on_input=move |v: String| form.update(|f| f.mobile_no = v)
                />
                <FormField
                    label="Password"
                    input_type="password"
                    placeholder="Enter your password"
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_input=move |v: String| form.update(|f| f.password = v)
                />
                <FormField
                    label="Verify Password"
                    input_type="password"
                    placeholder="Verify your password"
                    value=Signal::derive(move || form.with(|f| f.verify_password.clone()))
                    on_input=move |v: String| form.update(|f| f.verify_password = v)
                />

                <ul class="text-sm text-red-400 space-y-1">{hints}</ul>

                <button
                    type="submit"
                    disabled=move || !submittable() || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors flex items-center justify-center space-x-2"
                >
                    {move || if submitting.get() {
                        view! {
                            <InlineLoading />
                            <span>"Registering..."</span>
                        }.into_view()
                    } else {
                        view! { <span>"Submit"</span> }.into_view()
                    }}
                </button>

                <p class="text-center text-sm text-gray-400">
                    "Already have an account? "
                    <A href="/login" class="text-primary-400 hover:underline">"Log in"</A>
                </p>
            </form>
        </div>
    }
}
