//! Login Page

use leptos::*;
use leptos_router::A;
use workout_tracker::session::login_notice;
use workout_tracker::{LoginForm, Route};

use crate::components::FormField;
use crate::state::{guard_route, use_notices, use_user};

#[component]
pub fn Login() -> impl IntoView {
    // Signed-in users are sent home, including right after a successful login
    guard_route(Route::Login);

    let user = use_user();
    let notices = use_notices();

    let form = create_rw_signal(LoginForm::default());
    let (submitting, set_submitting) = create_signal(false);

    let ready = move || form.with(LoginForm::is_ready);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !ready() || submitting.get_untracked() {
            return;
        }

        let current = form.get_untracked();
        set_submitting.set(true);

        spawn_local(async move {
            let result = user.login(&current).await;
            if result.is_ok() {
                form.update(LoginForm::clear);
            }
            notices.push(login_notice(&current.email, &result));
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto">
            <h1 class="text-3xl font-bold text-center my-8">"Log In"</h1>

            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                <FormField
                    label="Email"
                    input_type="email"
                    placeholder="Enter your email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=move |v: String| form.update(|f| f.email = v)
                />
                <FormField
                    label="Password"
                    input_type="password"
                    placeholder="Enter your password"
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_input=move |v: String| form.update(|f| f.password = v)
                />

                <button
                    type="submit"
                    disabled=move || !ready() || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold transition-colors"
                >
                    "Submit"
                </button>

                <p class="text-center text-sm text-gray-400">
                    "Don't have an account yet? "
                    <A href="/register" class="text-primary-400 hover:underline">"Click here"</A>
                    " to register."
                </p>
            </form>
        </div>
    }
}
