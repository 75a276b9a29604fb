//! Service Endpoints
//!
//! Method, path and auth requirement for every call the client makes.

/// HTTP methods used by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A call against the workout service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Register,
    Login,
    Details,
    ListWorkouts,
    AddWorkout,
    UpdateWorkout(String),
    DeleteWorkout(String),
    CompleteWorkout(String),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Register | Endpoint::Login | Endpoint::AddWorkout => Method::Post,
            Endpoint::Details | Endpoint::ListWorkouts => Method::Get,
            Endpoint::UpdateWorkout(_) | Endpoint::CompleteWorkout(_) => Method::Patch,
            Endpoint::DeleteWorkout(_) => Method::Delete,
        }
    }

    /// Path relative to the API base, identifiers percent-encoded
    pub fn path(&self) -> String {
        match self {
            Endpoint::Register => "/users/register".to_string(),
            Endpoint::Login => "/users/login".to_string(),
            Endpoint::Details => "/users/details".to_string(),
            Endpoint::ListWorkouts => "/workouts/getMyWorkouts".to_string(),
            Endpoint::AddWorkout => "/workouts/addWorkout".to_string(),
            Endpoint::UpdateWorkout(id) => {
                format!("/workouts/updateWorkout/{}", urlencoding::encode(id))
            }
            Endpoint::DeleteWorkout(id) => {
                format!("/workouts/deleteWorkout/{}", urlencoding::encode(id))
            }
            Endpoint::CompleteWorkout(id) => {
                format!("/workouts/completeWorkoutStatus/{}", urlencoding::encode(id))
            }
        }
    }

    /// Whether the call carries `Authorization: Bearer <token>`
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Endpoint::Register | Endpoint::Login)
    }

    /// Full URL against a base such as `http://localhost:4000`
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}
