//! Workouts Page
//!
//! The caller's workouts with add, edit, delete and complete.
//!
//! Every action ends in a toast. A rejected token on any call logs the
//! user out and moves to the login page. Only a failed first load, with
//! nothing on screen yet, replaces the list with an error panel.

use leptos::*;
use leptos_router::use_navigate;
use workout_tracker::workouts::{self, Feedback, Saved, WorkoutAction};
use workout_tracker::{ApiError, Route, Workout, WorkoutBoard, WorkoutForm};

use crate::api;
use crate::components::{Loading, WorkoutCard, WorkoutModal};
use crate::state::{guard_route, log_error, use_notices, use_user};

#[component]
pub fn Workouts() -> impl IntoView {
    guard_route(Route::Workouts);

    let user = use_user();
    let notices = use_notices();
    let navigate = use_navigate();

    let board = create_rw_signal(WorkoutBoard::new());
    let (load_error, set_load_error) = create_signal(None::<String>);
    let editor = create_rw_signal(None::<WorkoutForm>);
    let (saving, set_saving) = create_signal(false);
    let load_requested = store_value(false);

    let expire = Callback::new(move |_: ()| {
        user.logout();
        navigate(Route::Login.path(), Default::default());
    });

    let report = move |feedback: Feedback| match feedback {
        Feedback::Notify(notice) => notices.push(notice),
        Feedback::RedirectToLogin => expire.call(()),
    };

    let refresh_failed = move |e: ApiError| {
        log_error(&format!("Failed to refresh workouts: {}", e));
        if let Some(feedback) = Saved::Stale(e).followup() {
            report(feedback);
        }
    };

    // Fetch once the session restore has settled
    create_effect(move |_| {
        if !user.restored.get() || load_requested.get_value() {
            return;
        }
        let Some(token) = user.token() else {
            return;
        };
        load_requested.set_value(true);

        spawn_local(async move {
            match workouts::fetch(&api::client(), &token).await {
                Ok(update) => board.update(|b| {
                    b.apply(update);
                }),
                Err(e) if e.requires_login() => report(Feedback::RedirectToLogin),
                Err(e) => {
                    log_error(&format!("Failed to load workouts: {}", e));
                    set_load_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let on_save = move |form: WorkoutForm| {
        let Some(token) = user.token() else {
            return report(Feedback::RedirectToLogin);
        };
        let action = WorkoutAction::for_form(&form);
        set_saving.set(true);

        spawn_local(async move {
            let client = api::client();
            let result = workouts::submit(&client, &token, &form).await;
            set_saving.set(false);
            report(Feedback::from_result(action, &result));
            if result.is_err() {
                return;
            }
            editor.set(None);

            // The change is stored; a failed refresh only leaves the list stale
            match workouts::fetch(&client, &token).await {
                Ok(update) => {
                    board.update(|b| {
                        b.apply(update);
                    });
                    set_load_error.set(None);
                }
                Err(e) => refresh_failed(e),
            }
        });
    };

    let on_delete = move |id: String| {
        let Some(token) = user.token() else {
            return report(Feedback::RedirectToLogin);
        };

        spawn_local(async move {
            let result = workouts::remove(&api::client(), &token, &id).await;
            report(Feedback::from_result(WorkoutAction::Delete, &result));
            if let Ok(update) = result {
                board.update(|b| {
                    b.apply(update);
                });
            }
        });
    };

    let on_complete = move |id: String| {
        let Some(token) = user.token() else {
            return report(Feedback::RedirectToLogin);
        };

        spawn_local(async move {
            let result = workouts::mark_complete(&api::client(), &token, &id).await;
            report(Feedback::from_result(WorkoutAction::Complete, &result));
            if let Ok(update) = result {
                board.update(|b| {
                    if !b.apply(update) {
                        log_error(&format!("Completed workout {} is not in the list", id));
                    }
                });
            }
        });
    };

    let on_edit = move |workout: Workout| editor.set(Some(WorkoutForm::for_existing(&workout)));

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Workouts"</h1>

                <button
                    title="Add Workout"
                    on:click=move |_| editor.set(Some(WorkoutForm::for_new()))
                    class="w-11 h-11 rounded-full bg-green-600 hover:bg-green-700 text-2xl font-bold transition-colors"
                >
                    "+"
                </button>
            </div>

            {move || {
                editor.get().map(|form| view! {
                    <WorkoutModal
                        form=form
                        on_submit=on_save
                        on_close=move |_| editor.set(None)
                        submitting=saving
                    />
                })
            }}

            {move || {
                let loaded = board.with(WorkoutBoard::is_loaded);

                if !loaded {
                    return match load_error.get() {
                        Some(err) => view! {
                            <div class="bg-red-900/50 border border-red-700 text-red-200 rounded-lg px-4 py-3" role="alert">
                                "Error: "{err}
                            </div>
                        }.into_view(),
                        None => view! { <Loading /> }.into_view(),
                    };
                }

                let list = board.with(|b| b.workouts().to_vec());
                if list.is_empty() {
                    view! {
                        <div class="bg-blue-900/40 border border-blue-700 text-blue-200 rounded-lg px-4 py-6 text-center">
                            "No workouts found. Add your first workout!"
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                            {list.into_iter().map(|workout| view! {
                                <WorkoutCard
                                    workout=workout
                                    on_edit=on_edit
                                    on_delete=on_delete
                                    on_complete=on_complete
                                />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}
