//! Domain Types
//!
//! Session identity and workout records as exchanged with the service.
//! Wire names follow the service (`_id`, camelCase fields).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity of the signed-in user, as returned by `GET /users/details`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl UserProfile {
    /// "First Last", falling back to the email when no name is known
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}

/// The authenticated identity bound to a stored token.
///
/// A session can hold a token whose identity has not been fetched yet
/// (or could not be); only a loaded `user` makes it authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    /// Session with no token and no identity
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
        }
    }

    /// True once the identity has been loaded for the token
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }
}

/// Status of a workout; the only transition is pending → completed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutStatus {
    #[default]
    Pending,
    Completed,
}

impl WorkoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutStatus::Pending => "pending",
            WorkoutStatus::Completed => "completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, WorkoutStatus::Completed)
    }
}

impl std::fmt::Display for WorkoutStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-owned workout record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Free-form, e.g. "30 mins"
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub status: WorkoutStatus,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
}

impl Workout {
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Creation date as "March 4, 2025"
    pub fn added_label(&self) -> String {
        self.date_added
            .map(|dt| dt.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Body of the add and update calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDraft {
    pub name: String,
    pub duration: String,
}

/// Body of `POST /users/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /users/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_no: String,
    pub password: String,
}
