//! Authentication Flows
//!
//! Restore, sign in, sign out and register, written against
//! [`WorkoutApi`] and [`SessionStore`] so every front end runs the same
//! steps.

use thiserror::Error;

use super::store::{SessionStore, StoreError};
use crate::api::WorkoutApi;
use crate::error::{ApiError, ApiResult};
use crate::forms::{LoginForm, RegisterForm};
use crate::model::Session;
use crate::notice::Notice;

/// Why signing in did not produce an authenticated session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignInError {
    /// The service refused the credentials, or the call never completed
    #[error(transparent)]
    Login(ApiError),

    /// A token was issued and stored, but the identity fetch failed
    #[error("Failed to retrieve user details: {0}")]
    Details(ApiError),
}

/// Rebuild the session from the stored token.
///
/// No token: anonymous, no network call. A rejected token is cleared.
/// Other failures keep the token and return the error.
pub async fn restore<A, S>(api: &A, store: &S) -> ApiResult<Session>
where
    A: WorkoutApi + ?Sized,
    S: SessionStore + ?Sized,
{
    let Some(token) = store.load_token()? else {
        return Ok(Session::anonymous());
    };

    match api.fetch_details(&token).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "Session restored");
            Ok(Session::new(token, user))
        }
        Err(ApiError::Unauthorized) => {
            tracing::info!("Stored token rejected, clearing session");
            store.clear()?;
            Ok(Session::anonymous())
        }
        Err(e) => Err(e),
    }
}

/// Log in, persist the token, then fetch and return the full identity
pub async fn sign_in<A, S>(api: &A, store: &S, form: &LoginForm) -> Result<Session, SignInError>
where
    A: WorkoutApi + ?Sized,
    S: SessionStore + ?Sized,
{
    let token = api
        .login(&form.credentials())
        .await
        .map_err(SignInError::Login)?;

    store
        .save_token(&token)
        .map_err(|e| SignInError::Login(e.into()))?;

    let user = api
        .fetch_details(&token)
        .await
        .map_err(SignInError::Details)?;

    tracing::info!(user_id = %user.id, "Signed in");
    Ok(Session::new(token, user))
}

/// Clear the persisted token; the returned session is anonymous
pub fn sign_out<S>(store: &S) -> Result<Session, StoreError>
where
    S: SessionStore + ?Sized,
{
    store.clear()?;
    tracing::info!("Signed out");
    Ok(Session::anonymous())
}

/// Check the form locally, then create the account
pub async fn register<A>(api: &A, form: &RegisterForm) -> ApiResult<String>
where
    A: WorkoutApi + ?Sized,
{
    let problems = form.problems();
    if !problems.is_empty() {
        return Err(ApiError::Validation(
            problems.iter().map(ToString::to_string).collect(),
        ));
    }

    let message = api.register(&form.registration()).await?;
    tracing::info!(email = %form.email, "Registered");
    Ok(message)
}

/// Notification for a finished sign-in attempt
pub fn login_notice(email: &str, result: &Result<Session, SignInError>) -> Notice {
    match result {
        Ok(_) => Notice::success("You are now logged in!"),
        Err(SignInError::Login(ApiError::InvalidCredentials)) => {
            Notice::error("Incorrect email or password")
        }
        Err(SignInError::Login(ApiError::UserNotFound)) => {
            Notice::error(format!("{} does not exist", email))
        }
        Err(SignInError::Login(_)) => Notice::error("An error occurred during login."),
        Err(SignInError::Details(_)) => Notice::error("Failed to retrieve user details."),
    }
}

/// Notifications for a finished registration: one per field error
pub fn register_notices(result: &ApiResult<String>) -> Vec<Notice> {
    match result {
        Ok(_) => vec![Notice::success(
            "Successfully registered! Redirecting to login...",
        )],
        Err(err) => err.messages().into_iter().map(Notice::error).collect(),
    }
}
