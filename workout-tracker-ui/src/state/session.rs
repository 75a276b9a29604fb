//! User Context
//!
//! The signed-in identity as reactive state, backed by a token in
//! `localStorage`. Flows come from the core `session` module.

use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen::JsValue;
use web_sys::Storage;
use workout_tracker::session::{self, SessionStore, SignInError, StoreError};
use workout_tracker::{LoginForm, Route, Session};

use super::log_error;
use crate::api;

const TOKEN_KEY: &str = "token";

/// Token persisted in the browser's `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

fn storage() -> Result<Storage, StoreError> {
    web_sys::window()
        .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Unavailable(format!("{:?}", err))
}

impl SessionStore for LocalStorageStore {
    fn load_token(&self) -> Result<Option<String>, StoreError> {
        let token = storage()?.get_item(TOKEN_KEY).map_err(js_error)?;
        Ok(token.filter(|t| !t.is_empty()))
    }

    fn save_token(&self, token: &str) -> Result<(), StoreError> {
        storage()?.set_item(TOKEN_KEY, token).map_err(js_error)
    }

    fn clear(&self) -> Result<(), StoreError> {
        storage()?.remove_item(TOKEN_KEY).map_err(js_error)
    }
}

/// Session state provided to all components
#[derive(Clone, Copy)]
pub struct UserContext {
    pub session: RwSignal<Session>,
    /// Set once the startup identity fetch has settled
    pub restored: RwSignal<bool>,
    restore_started: StoredValue<bool>,
}

/// Provide the user context, seeded with whatever token is stored
pub fn provide_user_context() {
    let token = LocalStorageStore.load_token().unwrap_or_else(|e| {
        log_error(&format!("Cannot read session: {}", e));
        None
    });

    provide_context(UserContext {
        session: create_rw_signal(Session { token, user: None }),
        restored: create_rw_signal(false),
        restore_started: store_value(false),
    });
}

pub fn use_user() -> UserContext {
    use_context::<UserContext>().expect("UserContext not found")
}

impl UserContext {
    /// Fetch the identity for the stored token. Runs once per page load.
    pub fn restore(self) {
        if self.restore_started.get_value() {
            return;
        }
        self.restore_started.set_value(true);

        spawn_local(async move {
            match session::restore(&api::client(), &LocalStorageStore).await {
                Ok(restored) => self.session.set(restored),
                // Token kept; protected calls decide whether it still works
                Err(e) => log_error(&format!("Failed to restore session: {}", e)),
            }
            self.restored.set(true);
        });
    }

    /// Sign in, keeping the token even if the identity fetch fails
    pub async fn login(self, form: &LoginForm) -> Result<Session, SignInError> {
        let result = session::sign_in(&api::client(), &LocalStorageStore, form).await;

        match &result {
            Ok(signed_in) => self.session.set(signed_in.clone()),
            Err(SignInError::Details(e)) => {
                log_error(&format!("User details fetch failed: {}", e));
                self.session.set(Session {
                    token: LocalStorageStore.load_token().ok().flatten(),
                    user: None,
                });
            }
            Err(SignInError::Login(e)) => log_error(&format!("Login failed: {}", e)),
        }
        self.restored.set(true);
        result
    }

    /// Forget the session everywhere
    pub fn logout(self) {
        if let Err(e) = session::sign_out(&LocalStorageStore) {
            log_error(&format!("Failed to clear session: {}", e));
        }
        self.session.set(Session::anonymous());
    }

    pub fn token(self) -> Option<String> {
        self.session.with_untracked(|s| s.token.clone())
    }

    pub fn is_authenticated(self) -> bool {
        self.session.with(Session::is_authenticated)
    }
}

/// Redirect away from `route` when it does not apply to the current
/// session. Waits for the startup restore to settle.
pub fn guard_route(route: Route) {
    let user = use_user();
    let navigate = use_navigate();

    create_effect(move |_| {
        if !user.restored.get() {
            return;
        }
        if let Some(target) = user.session.with(|s| route.redirect_for(s)) {
            navigate(target.path(), Default::default());
        }
    });
}
