//! Workout Service Client
//!
//! The API contract of the remote workout service, split in two layers:
//!
//! - [`Transport`]: sends one request and hands back status + body text.
//!   Implemented with reqwest natively and with gloo-net in the browser.
//! - [`ApiClient`]: builds requests for each [`Endpoint`] and decodes the
//!   answers through [`response`], so every front end shares one set of
//!   rules.
//!
//! [`WorkoutApi`] is the seam the session and workout flows depend on.
//!
//! # Endpoints
//!
//! - `POST /users/register`
//! - `POST /users/login`
//! - `GET /users/details`
//! - `GET /workouts/getMyWorkouts`
//! - `POST /workouts/addWorkout`
//! - `PATCH /workouts/updateWorkout/{id}`
//! - `DELETE /workouts/deleteWorkout/{id}`
//! - `PATCH /workouts/completeWorkoutStatus/{id}`

pub mod endpoint;
pub mod response;

#[cfg(feature = "native")]
pub mod http;

pub use endpoint::{Endpoint, Method};

#[cfg(feature = "native")]
pub use http::{HttpClient, ReqwestTransport};

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::model::{Credentials, Registration, UserProfile, Workout, WorkoutDraft};

/// One outgoing request, independent of the HTTP library
#[derive(Debug, Clone, PartialEq)]
pub struct RawRequest {
    pub endpoint: Endpoint,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl RawRequest {
    /// Request for `endpoint`. The token is attached only when the
    /// endpoint is a protected one.
    fn new(endpoint: Endpoint, token: Option<&str>) -> Self {
        let bearer = token
            .filter(|_| endpoint.requires_auth())
            .map(str::to_string);
        Self {
            endpoint,
            bearer,
            body: None,
        }
    }

    fn json<T: Serialize>(mut self, body: &T) -> ApiResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn method(&self) -> Method {
        self.endpoint.method()
    }

    /// Full URL against the transport's base
    pub fn url(&self, base: &str) -> String {
        self.endpoint.url(base)
    }

    /// `Authorization` header value, if any
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|t| format!("Bearer {}", t))
    }
}

/// Raw answer: status code and body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends requests to the service.
///
/// Futures are not `Send` so browser implementations fit the same trait.
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: RawRequest) -> ApiResult<RawResponse>;
}

/// Every call the client makes against the workout service
#[async_trait(?Send)]
pub trait WorkoutApi {
    /// Create an account; returns the service's success message
    async fn register(&self, registration: &Registration) -> ApiResult<String>;

    /// Exchange credentials for an access token
    async fn login(&self, credentials: &Credentials) -> ApiResult<String>;

    /// Identity bound to a token
    async fn fetch_details(&self, token: &str) -> ApiResult<UserProfile>;

    async fn list_workouts(&self, token: &str) -> ApiResult<Vec<Workout>>;

    async fn add_workout(&self, token: &str, draft: &WorkoutDraft) -> ApiResult<()>;

    async fn update_workout(&self, token: &str, id: &str, draft: &WorkoutDraft) -> ApiResult<()>;

    async fn delete_workout(&self, token: &str, id: &str) -> ApiResult<()>;

    /// Mark a workout completed; returns the updated record
    async fn complete_workout(&self, token: &str, id: &str) -> ApiResult<Workout>;
}

/// [`WorkoutApi`] over any [`Transport`]
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, request: RawRequest) -> ApiResult<RawResponse> {
        tracing::debug!(method = %request.method(), path = %request.endpoint.path(), "sending request");
        let response = self.transport.execute(request).await?;
        tracing::debug!(status = response.status, "response received");
        Ok(response)
    }
}

#[async_trait(?Send)]
impl<T: Transport> WorkoutApi for ApiClient<T> {
    async fn register(&self, registration: &Registration) -> ApiResult<String> {
        let request = RawRequest::new(Endpoint::Register, None).json(registration)?;
        let response = self.send(request).await?;
        response::register(response.status, &response.body)
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        let request = RawRequest::new(Endpoint::Login, None).json(credentials)?;
        let response = self.send(request).await?;
        response::login(response.status, &response.body)
    }

    async fn fetch_details(&self, token: &str) -> ApiResult<UserProfile> {
        let request = RawRequest::new(Endpoint::Details, Some(token));
        let response = self.send(request).await?;
        response::details(response.status, &response.body)
    }

    async fn list_workouts(&self, token: &str) -> ApiResult<Vec<Workout>> {
        let request = RawRequest::new(Endpoint::ListWorkouts, Some(token));
        let response = self.send(request).await?;
        response::workouts(response.status, &response.body)
    }

    async fn add_workout(&self, token: &str, draft: &WorkoutDraft) -> ApiResult<()> {
        let request = RawRequest::new(Endpoint::AddWorkout, Some(token)).json(draft)?;
        let response = self.send(request).await?;
        response::acknowledged(response.status, &response.body)
    }

    async fn update_workout(&self, token: &str, id: &str, draft: &WorkoutDraft) -> ApiResult<()> {
        let request = RawRequest::new(Endpoint::UpdateWorkout(id.to_string()), Some(token))
            .json(draft)?;
        let response = self.send(request).await?;
        response::acknowledged(response.status, &response.body)
    }

    async fn delete_workout(&self, token: &str, id: &str) -> ApiResult<()> {
        let request = RawRequest::new(Endpoint::DeleteWorkout(id.to_string()), Some(token));
        let response = self.send(request).await?;
        response::acknowledged(response.status, &response.body)
    }

    async fn complete_workout(&self, token: &str, id: &str) -> ApiResult<Workout> {
        // The service expects an (empty) JSON body on this PATCH
        let request = RawRequest::new(Endpoint::CompleteWorkout(id.to_string()), Some(token))
            .json(&serde_json::json!({}))?;
        let response = self.send(request).await?;
        response::completed(response.status, &response.body)
    }
}

/// Convert a transport-level failure into [`ApiError::Network`]
pub fn network_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Network(err.to_string())
}
