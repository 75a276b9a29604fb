//! Form State
//!
//! Field state and submit rules for the login, registration and workout
//! forms. Front ends bind inputs to these fields and ask whether submit
//! is enabled.

use crate::model::{Credentials, Registration, Workout, WorkoutDraft};

/// Mobile numbers are exactly this many characters
pub const MOBILE_NUMBER_LEN: usize = 11;

/// Delay between a successful registration and the redirect to login
pub const REGISTER_REDIRECT_MS: u32 = 1500;

/// Login form: submit once both fields are non-empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A rule the registration form does not satisfy yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormProblem {
    Missing(&'static str),
    MobileLength(usize),
    PasswordMismatch,
}

impl std::fmt::Display for FormProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormProblem::Missing(field) => write!(f, "{} is required", field),
            FormProblem::MobileLength(len) => write!(
                f,
                "Mobile number must be {} characters (got {})",
                MOBILE_NUMBER_LEN, len
            ),
            FormProblem::PasswordMismatch => f.write_str("Passwords don't match"),
        }
    }
}

/// Registration form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_no: String,
    pub password: String,
    pub verify_password: String,
}

impl RegisterForm {
    /// Every unmet rule, in field order
    pub fn problems(&self) -> Vec<FormProblem> {
        let mut problems = Vec::new();

        let required = [
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Email", &self.email),
            ("Mobile number", &self.mobile_no),
            ("Password", &self.password),
            ("Password confirmation", &self.verify_password),
        ];
        for (label, value) in required {
            if value.is_empty() {
                problems.push(FormProblem::Missing(label));
            }
        }

        let mobile_len = self.mobile_no.chars().count();
        if !self.mobile_no.is_empty() && mobile_len != MOBILE_NUMBER_LEN {
            problems.push(FormProblem::MobileLength(mobile_len));
        }

        if self.password != self.verify_password {
            problems.push(FormProblem::PasswordMismatch);
        }

        problems
    }

    /// True iff every field is filled, the mobile number has 11
    /// characters and both passwords match
    pub fn is_submittable(&self) -> bool {
        self.problems().is_empty()
    }

    pub fn registration(&self) -> Registration {
        Registration {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            mobile_no: self.mobile_no.clone(),
            password: self.password.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Whether the workout modal creates or edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Add,
    Edit(String),
}

/// Add/Edit workout modal state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutForm {
    pub mode: EditorMode,
    pub name: String,
    pub duration: String,
}

impl WorkoutForm {
    /// Empty form for a new workout
    pub fn for_new() -> Self {
        Self {
            mode: EditorMode::Add,
            name: String::new(),
            duration: String::new(),
        }
    }

    /// Form pre-filled from an existing record
    pub fn for_existing(workout: &Workout) -> Self {
        Self {
            mode: EditorMode::Edit(workout.id.clone()),
            name: workout.name.clone(),
            duration: workout.duration.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, EditorMode::Edit(_))
    }

    pub fn is_ready(&self) -> bool {
        !self.name.trim().is_empty() && !self.duration.trim().is_empty()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Workout"
        } else {
            "Add New Workout"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() {
            "Update Workout"
        } else {
            "Add Workout"
        }
    }

    pub fn draft(&self) -> WorkoutDraft {
        WorkoutDraft {
            name: self.name.trim().to_string(),
            duration: self.duration.trim().to_string(),
        }
    }
}

impl Default for WorkoutForm {
    fn default() -> Self {
        Self::for_new()
    }
}
