//! In-memory stand-in for the workout service, used by unit tests

use async_trait::async_trait;
use chrono::Utc;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::api::WorkoutApi;
use crate::error::{ApiError, ApiResult};
use crate::model::{
    Credentials, Registration, UserProfile, Workout, WorkoutDraft, WorkoutStatus,
};

#[derive(Default)]
pub struct FakeApi {
    accounts: Vec<(String, String, UserProfile)>,
    tokens: RefCell<HashMap<String, UserProfile>>,
    details_error: Option<ApiError>,
    workouts: RefCell<Vec<Workout>>,
    workout_error: RefCell<Option<ApiError>>,
    list_error: RefCell<Option<ApiError>>,
    details_calls: Cell<usize>,
    register_calls: Cell<usize>,
    list_calls: Cell<usize>,
    next_id: Cell<usize>,
}

impl FakeApi {
    pub fn with_user(mut self, id: &str, email: &str, password: &str) -> Self {
        let profile = UserProfile {
            id: id.to_string(),
            is_admin: false,
            email: email.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
        };
        self.accounts
            .push((email.to_string(), password.to_string(), profile));
        self
    }

    /// Accept `token` as already issued
    pub fn with_token(self, token: &str) -> Self {
        self.tokens.borrow_mut().insert(
            token.to_string(),
            UserProfile {
                id: "owner".to_string(),
                is_admin: false,
                email: "owner@example.com".to_string(),
                first_name: "Owner".to_string(),
                last_name: "User".to_string(),
            },
        );
        self
    }

    pub fn failing_details(mut self, err: ApiError) -> Self {
        self.details_error = Some(err);
        self
    }

    pub fn with_workouts(self, names: &[&str]) -> Self {
        for name in names {
            self.insert(name, "30 mins");
        }
        self
    }

    /// Every following workout call fails with `err`
    pub fn fail_workouts_with(&self, err: ApiError) {
        *self.workout_error.borrow_mut() = Some(err);
    }

    /// Only listing fails from now on; mutations still go through
    pub fn fail_list_with(&self, err: ApiError) {
        *self.list_error.borrow_mut() = Some(err);
    }

    pub fn workouts(&self) -> Vec<Workout> {
        self.workouts.borrow().clone()
    }

    pub fn details_calls(&self) -> usize {
        self.details_calls.get()
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.get()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    fn insert(&self, name: &str, duration: &str) {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.workouts.borrow_mut().push(Workout {
            id: format!("w{}", id),
            name: name.to_string(),
            duration: duration.to_string(),
            status: WorkoutStatus::Pending,
            date_added: Some(Utc::now()),
        });
    }

    fn authorize(&self, token: &str) -> ApiResult<()> {
        if let Some(err) = self.workout_error.borrow().clone() {
            return Err(err);
        }
        if self.tokens.borrow().contains_key(token) {
            Ok(())
        } else {
            Err(ApiError::Unauthorized)
        }
    }

    fn position(&self, id: &str) -> ApiResult<usize> {
        self.workouts
            .borrow()
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| ApiError::NotFound("Workout not found".to_string()))
    }
}

#[async_trait(?Send)]
impl WorkoutApi for FakeApi {
    async fn register(&self, _registration: &Registration) -> ApiResult<String> {
        self.register_calls.set(self.register_calls.get() + 1);
        Ok("Registered".to_string())
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        let (_, password, profile) = self
            .accounts
            .iter()
            .find(|(email, _, _)| *email == credentials.email)
            .ok_or(ApiError::UserNotFound)?;

        if *password != credentials.password {
            return Err(ApiError::InvalidCredentials);
        }

        let token = format!("token-{}", profile.id);
        self.tokens
            .borrow_mut()
            .insert(token.clone(), profile.clone());
        Ok(token)
    }

    async fn fetch_details(&self, token: &str) -> ApiResult<UserProfile> {
        self.details_calls.set(self.details_calls.get() + 1);
        if let Some(err) = &self.details_error {
            return Err(err.clone());
        }
        self.tokens
            .borrow()
            .get(token)
            .cloned()
            .ok_or(ApiError::Unauthorized)
    }

    async fn list_workouts(&self, token: &str) -> ApiResult<Vec<Workout>> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.authorize(token)?;
        if let Some(err) = self.list_error.borrow().clone() {
            return Err(err);
        }
        Ok(self.workouts())
    }

    async fn add_workout(&self, token: &str, draft: &WorkoutDraft) -> ApiResult<()> {
        self.authorize(token)?;
        self.insert(&draft.name, &draft.duration);
        Ok(())
    }

    async fn update_workout(&self, token: &str, id: &str, draft: &WorkoutDraft) -> ApiResult<()> {
        self.authorize(token)?;
        let idx = self.position(id)?;
        let mut workouts = self.workouts.borrow_mut();
        workouts[idx].name = draft.name.clone();
        workouts[idx].duration = draft.duration.clone();
        Ok(())
    }

    async fn delete_workout(&self, token: &str, id: &str) -> ApiResult<()> {
        self.authorize(token)?;
        let idx = self.position(id)?;
        self.workouts.borrow_mut().remove(idx);
        Ok(())
    }

    async fn complete_workout(&self, token: &str, id: &str) -> ApiResult<Workout> {
        self.authorize(token)?;
        let idx = self.position(id)?;
        let mut workouts = self.workouts.borrow_mut();
        workouts[idx].status = WorkoutStatus::Completed;
        Ok(workouts[idx].clone())
    }
}
