//! Response Decoding
//!
//! Turns a raw status + body into typed results. Shared by every
//! transport so the browser and the terminal client agree on the
//! contract.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{classify, ApiError, ApiResult, ErrorBody, ErrorCode};
use crate::model::{UserProfile, Workout};

/// Message some service versions send with a 200 instead of a 401.
/// Only consulted when the login answer carries neither a token nor a code.
pub const LEGACY_INVALID_CREDENTIALS: &str = "Incorrect email or password";

/// Default text when registration succeeds without a message
pub const REGISTERED: &str = "Successfully registered!";

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn failure(status: u16, body: &str, login: bool) -> ApiError {
    let parsed = ErrorBody::parse(body);
    let err = classify(status, &parsed, login);
    tracing::warn!(status, error = %err, "request rejected");
    err
}

/// Decode `POST /users/login` into the access token
pub fn login(status: u16, body: &str) -> ApiResult<String> {
    if !is_success(status) {
        return Err(failure(status, body, true));
    }

    let parsed: Value = serde_json::from_str(body)?;
    let token = parsed.get("access").and_then(Value::as_str).unwrap_or_default();
    if !token.is_empty() {
        return Ok(token.to_string());
    }

    let answer = ErrorBody::from_value(&parsed);
    match answer.code {
        Some(code) if code != ErrorCode::Unknown => Err(classify(status, &answer, true)),
        _ if answer.message.as_deref() == Some(LEGACY_INVALID_CREDENTIALS) => {
            Err(ApiError::InvalidCredentials)
        }
        _ => Err(ApiError::UserNotFound),
    }
}

/// Decode `POST /users/register`.
///
/// Success is the `success` flag alone; the message text never decides
/// the outcome.
pub fn register(status: u16, body: &str) -> ApiResult<String> {
    if !is_success(status) {
        let parsed = ErrorBody::parse(body);
        if parsed.code.is_none() && !parsed.errors.is_empty() {
            return Err(ApiError::Validation(parsed.errors));
        }
        return Err(failure(status, body, false));
    }

    let parsed: Value = serde_json::from_str(body)?;
    let success = parsed.get("success").and_then(Value::as_bool).unwrap_or(false);
    let answer = ErrorBody::from_value(&parsed);

    if success {
        Ok(answer.message.unwrap_or_else(|| REGISTERED.to_string()))
    } else if !answer.errors.is_empty() {
        Err(ApiError::Validation(answer.errors))
    } else {
        Err(ApiError::Server {
            status,
            message: answer
                .message
                .unwrap_or_else(|| "Registration failed".to_string()),
        })
    }
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    #[serde(default)]
    user: Option<UserProfile>,
}

/// Decode `GET /users/details`
pub fn details(status: u16, body: &str) -> ApiResult<UserProfile> {
    if !is_success(status) {
        return Err(failure(status, body, false));
    }

    let parsed: DetailsResponse = serde_json::from_str(body)?;
    parsed
        .user
        .ok_or_else(|| ApiError::Decode("No user data found".to_string()))
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WorkoutListResponse {
    Bare(Vec<Workout>),
    Wrapped { workouts: Vec<Workout> },
}

/// Decode `GET /workouts/getMyWorkouts`; records without an id are dropped
pub fn workouts(status: u16, body: &str) -> ApiResult<Vec<Workout>> {
    if !is_success(status) {
        return Err(failure(status, body, false));
    }

    let mut list = match serde_json::from_str::<WorkoutListResponse>(body)? {
        WorkoutListResponse::Bare(list) => list,
        WorkoutListResponse::Wrapped { workouts } => workouts,
    };
    list.retain(|w| !w.id.is_empty());
    Ok(list)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CompletedResponse {
    #[serde(rename_all = "camelCase")]
    Wrapped { updated_workout: Workout },
    Bare(Workout),
}

/// Decode `PATCH /workouts/completeWorkoutStatus/{id}` into the updated record
pub fn completed(status: u16, body: &str) -> ApiResult<Workout> {
    if !is_success(status) {
        return Err(failure(status, body, false));
    }

    let workout = match serde_json::from_str::<CompletedResponse>(body)? {
        CompletedResponse::Wrapped { updated_workout } => updated_workout,
        CompletedResponse::Bare(workout) => workout,
    };
    if workout.id.is_empty() {
        return Err(ApiError::Decode("No updated workout in response".to_string()));
    }
    Ok(workout)
}

/// Decode calls whose body is not used (add, update, delete)
pub fn acknowledged(status: u16, body: &str) -> ApiResult<()> {
    if is_success(status) {
        Ok(())
    } else {
        Err(failure(status, body, false))
    }
}
