//! Error Types
//!
//! Structured failure kinds for every call against the workout service,
//! and the rules that turn an HTTP status plus error body into one.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by API calls and session flows
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failed before a response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// Token missing, expired or rejected (401)
    #[error("Your session has expired, please log in again")]
    Unauthorized,

    /// Token valid but not allowed to touch the resource (403)
    #[error("You are not authorized to perform this action")]
    Forbidden,

    /// Login rejected the email/password pair
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Login for an email the service does not know
    #[error("User not found")]
    UserNotFound,

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// One or more field errors
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    /// Any other non-success answer
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Persisted session could not be read or written
    #[error("Session storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// True for failures that should send the user back to the login view
    pub fn requires_login(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Individual messages, one per field error for validation failures
    pub fn messages(&self) -> Vec<String> {
        match self {
            ApiError::Validation(errors) if !errors.is_empty() => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Machine-readable error code carried in the `code` field of error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidCredentials,
    UserNotFound,
    Unauthorized,
    Forbidden,
    ValidationFailed,
    #[serde(other)]
    Unknown,
}

/// Error body as sent by the service. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    pub code: Option<ErrorCode>,
    pub message: Option<String>,
    pub error: Option<String>,
    pub errors: Vec<String>,
}

impl ErrorBody {
    /// Parse a body leniently; anything that is not JSON becomes the message
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) if value.is_object() => Self::from_value(&value),
            Ok(Value::String(text)) => Self::with_message(&text),
            _ => Self::with_message(body),
        }
    }

    /// Pick the known fields out of a JSON object one by one. A field of
    /// the wrong type is skipped, the rest still count.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

        let code = value
            .get("code")
            .filter(|code| code.is_string())
            .and_then(|code| ErrorCode::deserialize(code).ok());

        let errors = value
            .get("errors")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(field_error).collect())
            .unwrap_or_default();

        ErrorBody {
            code,
            message: text("message"),
            error: text("error"),
            errors,
        }
    }

    fn with_message(text: &str) -> Self {
        let text = text.trim();
        ErrorBody {
            message: (!text.is_empty()).then(|| text.to_string()),
            ..Default::default()
        }
    }

    /// Best human-readable message in the body
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .filter(|m| !m.is_empty())
    }

    fn text_or(&self, fallback: &str) -> String {
        self.text().unwrap_or(fallback).to_string()
    }
}

/// Classify a non-success response.
///
/// An explicit `code` wins. Without one the status decides; `login` only
/// changes how 401 and 404 read (bad credentials / unknown user rather
/// than an expired session / missing resource).
pub fn classify(status: u16, body: &ErrorBody, login: bool) -> ApiError {
    match body.code {
        Some(ErrorCode::InvalidCredentials) => return ApiError::InvalidCredentials,
        Some(ErrorCode::UserNotFound) => return ApiError::UserNotFound,
        Some(ErrorCode::Unauthorized) => return ApiError::Unauthorized,
        Some(ErrorCode::Forbidden) => return ApiError::Forbidden,
        Some(ErrorCode::ValidationFailed) => return validation(status, body),
        Some(ErrorCode::Unknown) | None => {}
    }

    match status {
        401 if login => ApiError::InvalidCredentials,
        404 if login => ApiError::UserNotFound,
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        404 => ApiError::NotFound(body.text_or("Resource not found")),
        400 | 409 | 422 if !body.errors.is_empty() => validation(status, body),
        _ => ApiError::Server {
            status,
            message: body.text_or("Request failed"),
        },
    }
}

/// One entry of an `errors` list: a string, or an object carrying `message`/`msg`
fn field_error(item: &Value) -> Option<String> {
    match item {
        Value::String(text) => Some(text.clone()),
        Value::Object(fields) => fields
            .get("message")
            .or_else(|| fields.get("msg"))
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

fn validation(status: u16, body: &ErrorBody) -> ApiError {
    if body.errors.is_empty() {
        match body.text() {
            Some(message) => ApiError::Validation(vec![message.to_string()]),
            None => ApiError::Server {
                status,
                message: "Validation failed".to_string(),
            },
        }
    } else {
        ApiError::Validation(body.errors.clone())
    }
}
