//! Workout List
//!
//! Local snapshot of the caller's workouts and the CRUD flows that keep
//! it in step with the service.
//!
//! - Add / update: call, then re-fetch the whole list
//! - Delete: call, then drop the record locally by id
//! - Complete: call, then merge the returned record in place by id
//!
//! Every action produces [`Feedback`]: a transient notice, or a redirect
//! to login when the token was rejected. Loaded data stays on screen
//! when an action fails.
//!
//! The network half of each flow ([`fetch`], [`submit`], [`remove`],
//! [`mark_complete`]) hands back a [`BoardUpdate`] instead of touching a
//! board, for front ends that cannot hold the board across the call.

use crate::api::WorkoutApi;
use crate::error::{ApiError, ApiResult};
use crate::forms::{EditorMode, WorkoutForm};
use crate::model::Workout;
use crate::notice::Notice;

/// Ordered snapshot of the caller's workouts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutBoard {
    workouts: Vec<Workout>,
    loaded: bool,
}

impl WorkoutBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a list has been received from the service
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// Replace the snapshot with a full list from the service
    pub fn replace(&mut self, workouts: Vec<Workout>) {
        self.workouts = workouts
            .into_iter()
            .filter(|w| !w.id.is_empty())
            .collect();
        self.loaded = true;
    }

    /// Remove exactly the record with `id`
    pub fn remove(&mut self, id: &str) -> Option<Workout> {
        let idx = self.workouts.iter().position(|w| w.id == id)?;
        Some(self.workouts.remove(idx))
    }

    /// Swap in `updated` where its id matches; order is untouched.
    /// Returns false when no record has that id.
    pub fn merge(&mut self, updated: Workout) -> bool {
        match self.workouts.iter_mut().find(|w| w.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Returns false when the update names a record that is not here
    pub fn apply(&mut self, update: BoardUpdate) -> bool {
        match update {
            BoardUpdate::Replace(workouts) => {
                self.replace(workouts);
                true
            }
            BoardUpdate::Remove(id) => self.remove(&id).is_some(),
            BoardUpdate::Merge(updated) => self.merge(updated),
        }
    }
}

/// Change to the local list once the service has accepted a call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardUpdate {
    Replace(Vec<Workout>),
    Remove(String),
    Merge(Workout),
}

/// An add or update the service accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Saved {
    Refreshed,
    /// Stored, but re-fetching the list failed
    Stale(ApiError),
}

impl Saved {
    /// Extra feedback for a save whose refresh failed
    pub fn followup(&self) -> Option<Feedback> {
        match self {
            Saved::Refreshed => None,
            Saved::Stale(ApiError::Unauthorized) => Some(Feedback::RedirectToLogin),
            Saved::Stale(e) => Some(Feedback::Notify(Notice::error(format!(
                "Could not refresh workouts: {}",
                e
            )))),
        }
    }
}

/// A user action against the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutAction {
    Load,
    Add,
    Update,
    Delete,
    Complete,
}

impl WorkoutAction {
    fn verb(&self) -> &'static str {
        match self {
            WorkoutAction::Load => "view",
            WorkoutAction::Add => "add",
            WorkoutAction::Update => "update",
            WorkoutAction::Delete => "delete",
            WorkoutAction::Complete => "complete",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            WorkoutAction::Load => "Workouts loaded",
            WorkoutAction::Add => "Workout added successfully!",
            WorkoutAction::Update => "Workout updated successfully!",
            WorkoutAction::Delete => "Workout deleted successfully!",
            WorkoutAction::Complete => "Workout marked as completed!",
        }
    }

    pub fn for_form(form: &WorkoutForm) -> Self {
        match form.mode {
            EditorMode::Add => WorkoutAction::Add,
            EditorMode::Edit(_) => WorkoutAction::Update,
        }
    }
}

/// What the view should do after an action settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Notify(Notice),
    RedirectToLogin,
}

impl Feedback {
    pub fn success(action: WorkoutAction) -> Self {
        Feedback::Notify(Notice::success(action.success_message()))
    }

    /// 401 anywhere sends the user to login; 403 names the action
    pub fn failure(action: WorkoutAction, err: &ApiError) -> Self {
        match err {
            ApiError::Unauthorized => Feedback::RedirectToLogin,
            ApiError::Forbidden => Feedback::Notify(Notice::error(format!(
                "You are not authorized to {} this workout.",
                action.verb()
            ))),
            other => Feedback::Notify(Notice::error(other.to_string())),
        }
    }

    pub fn from_result<T>(action: WorkoutAction, result: &ApiResult<T>) -> Self {
        match result {
            Ok(_) => Feedback::success(action),
            Err(e) => Feedback::failure(action, e),
        }
    }
}

/// Fetch the caller's full list
pub async fn fetch<A>(api: &A, token: &str) -> ApiResult<BoardUpdate>
where
    A: WorkoutApi + ?Sized,
{
    let workouts = api.list_workouts(token).await?;
    tracing::debug!(count = workouts.len(), "Workouts loaded");
    Ok(BoardUpdate::Replace(workouts))
}

/// Send the add/edit form without refreshing anything
pub async fn submit<A>(api: &A, token: &str, form: &WorkoutForm) -> ApiResult<()>
where
    A: WorkoutApi + ?Sized,
{
    let draft = form.draft();
    match &form.mode {
        EditorMode::Add => api.add_workout(token, &draft).await,
        EditorMode::Edit(id) => api.update_workout(token, id, &draft).await,
    }
}

pub async fn remove<A>(api: &A, token: &str, id: &str) -> ApiResult<BoardUpdate>
where
    A: WorkoutApi + ?Sized,
{
    api.delete_workout(token, id).await?;
    Ok(BoardUpdate::Remove(id.to_string()))
}

pub async fn mark_complete<A>(api: &A, token: &str, id: &str) -> ApiResult<BoardUpdate>
where
    A: WorkoutApi + ?Sized,
{
    let updated = api.complete_workout(token, id).await?;
    Ok(BoardUpdate::Merge(updated))
}

/// Fetch the full list into `board`
pub async fn load<A>(api: &A, token: &str, board: &mut WorkoutBoard) -> ApiResult<()>
where
    A: WorkoutApi + ?Sized,
{
    board.apply(fetch(api, token).await?);
    Ok(())
}

/// Submit the add/edit form, then re-fetch the list.
///
/// Only a rejected submit is an error. A failed re-fetch after an
/// accepted submit comes back as [`Saved::Stale`] with `board` untouched.
pub async fn save<A>(api: &A, token: &str, form: &WorkoutForm, board: &mut WorkoutBoard) -> ApiResult<Saved>
where
    A: WorkoutApi + ?Sized,
{
    submit(api, token, form).await?;
    match load(api, token, board).await {
        Ok(()) => Ok(Saved::Refreshed),
        Err(e) => {
            tracing::warn!(error = %e, "Workout saved but the list could not be refreshed");
            Ok(Saved::Stale(e))
        }
    }
}

/// Delete `id` on the service, then drop it locally
pub async fn delete<A>(api: &A, token: &str, id: &str, board: &mut WorkoutBoard) -> ApiResult<()>
where
    A: WorkoutApi + ?Sized,
{
    board.apply(remove(api, token, id).await?);
    Ok(())
}

/// Mark `id` completed, then merge the returned record
pub async fn complete<A>(api: &A, token: &str, id: &str, board: &mut WorkoutBoard) -> ApiResult<()>
where
    A: WorkoutApi + ?Sized,
{
    if !board.apply(mark_complete(api, token, id).await?) {
        tracing::warn!(id, "Completed workout not in local list");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WorkoutStatus;
    use crate::testing::FakeApi;

    async fn loaded(api: &FakeApi) -> WorkoutBoard {
        let mut board = WorkoutBoard::new();
        load(api, "tok", &mut board).await.unwrap();
        board
    }

    fn api() -> FakeApi {
        FakeApi::default()
            .with_token("tok")
            .with_workouts(&["Run", "Swim", "Lift"])
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let api = api();
        let mut board = loaded(&api).await;
        let before = board.clone();

        delete(&api, "tok", "w2", &mut board).await.unwrap();

        let expected: Vec<Workout> = before
            .workouts()
            .iter()
            .filter(|w| w.id != "w2")
            .cloned()
            .collect();
        assert_eq!(board.workouts(), expected.as_slice());
        // No re-fetch on delete
        assert_eq!(api.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_complete_updates_in_place() {
        let api = api();
        let mut board = loaded(&api).await;
        let before = board.clone();

        complete(&api, "tok", "w2", &mut board).await.unwrap();

        assert_eq!(board.len(), before.len());
        for (old, new) in before.workouts().iter().zip(board.workouts()) {
            assert_eq!(old.id, new.id);
            assert_eq!(old.name, new.name);
            if new.id == "w2" {
                assert_eq!(new.status, WorkoutStatus::Completed);
            } else {
                assert_eq!(old, new);
            }
        }
        assert_eq!(api.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_save_refetches() {
        let api = api();
        let mut board = loaded(&api).await;

        let mut form = WorkoutForm::for_new();
        form.name = "Yoga".into();
        form.duration = "1 hour".into();
        assert_eq!(save(&api, "tok", &form, &mut board).await.unwrap(), Saved::Refreshed);
        assert_eq!(board.len(), 4);

        let mut edit = WorkoutForm::for_existing(board.get("w1").unwrap());
        edit.name = "Long Run".into();
        assert_eq!(save(&api, "tok", &edit, &mut board).await.unwrap(), Saved::Refreshed);
        assert_eq!(board.get("w1").unwrap().name, "Long Run");
        assert_eq!(api.list_calls(), 3);
    }

    #[tokio::test]
    async fn test_unauthorized_redirects_for_every_action() {
        let api = api();
        let mut board = loaded(&api).await;
        let edit = WorkoutForm::for_existing(board.get("w1").unwrap());
        api.fail_workouts_with(ApiError::Unauthorized);

        let results = [
            (WorkoutAction::Load, load(&api, "tok", &mut board).await),
            (
                WorkoutAction::Add,
                save(&api, "tok", &WorkoutForm::for_new(), &mut board)
                    .await
                    .map(|_| ()),
            ),
            (
                WorkoutAction::Update,
                save(&api, "tok", &edit, &mut board).await.map(|_| ()),
            ),
            (WorkoutAction::Delete, delete(&api, "tok", "w1", &mut board).await),
            (
                WorkoutAction::Complete,
                complete(&api, "tok", "w1", &mut board).await,
            ),
        ];
        for (action, result) in results {
            assert_eq!(Feedback::from_result(action, &result), Feedback::RedirectToLogin);
        }
        // Loaded data survives the failures
        assert_eq!(board.len(), 3);
    }

    #[tokio::test]
    async fn test_refresh_failure_after_save_is_not_a_failed_save() {
        let api = api();
        let mut board = loaded(&api).await;
        api.fail_list_with(ApiError::Network("connection reset".into()));

        let mut form = WorkoutForm::for_new();
        form.name = "Yoga".into();
        form.duration = "1 hour".into();
        let result = save(&api, "tok", &form, &mut board).await;

        assert_eq!(
            Feedback::from_result(WorkoutAction::Add, &result),
            Feedback::success(WorkoutAction::Add)
        );
        let saved = result.unwrap();
        assert!(matches!(saved, Saved::Stale(ApiError::Network(_))));
        assert!(matches!(saved.followup(), Some(Feedback::Notify(n)) if n.is_error()));
        // Stored once on the service, local list left as it was
        assert_eq!(api.workouts().len(), 4);
        assert_eq!(board.len(), 3);

        api.fail_list_with(ApiError::Unauthorized);
        let saved = save(&api, "tok", &form, &mut board).await.unwrap();
        assert_eq!(saved.followup(), Some(Feedback::RedirectToLogin));
    }

    #[tokio::test]
    async fn test_updates_apply_to_board() {
        let api = api();
        let mut board = WorkoutBoard::new();
        assert!(board.apply(fetch(&api, "tok").await.unwrap()));
        assert!(board.apply(mark_complete(&api, "tok", "w3").await.unwrap()));
        assert!(board.apply(remove(&api, "tok", "w1").await.unwrap()));

        let ids: Vec<&str> = board.workouts().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["w2", "w3"]);
        assert_eq!(board.get("w3").unwrap().status, WorkoutStatus::Completed);
        assert!(!board.apply(BoardUpdate::Remove("w1".into())));
    }

    #[tokio::test]
    async fn test_forbidden_names_the_action() {
        let api = api();
        let mut board = loaded(&api).await;
        api.fail_workouts_with(ApiError::Forbidden);

        let result = delete(&api, "tok", "w1", &mut board).await;
        assert_eq!(
            Feedback::from_result(WorkoutAction::Delete, &result),
            Feedback::Notify(Notice::error("You are not authorized to delete this workout."))
        );
        assert!(board.get("w1").is_some());
    }

    #[test]
    fn test_merge_unknown_id() {
        let mut board = WorkoutBoard::new();
        board.replace(vec![]);
        let stray = Workout {
            id: "x".into(),
            name: "X".into(),
            duration: "1".into(),
            status: WorkoutStatus::Completed,
            date_added: None,
        };
        assert!(!board.merge(stray));
        assert!(board.is_empty());
        assert!(board.is_loaded());
    }

    #[test]
    fn test_success_messages() {
        assert_eq!(
            Feedback::success(WorkoutAction::Complete),
            Feedback::Notify(Notice::success("Workout marked as completed!"))
        );
        assert_eq!(
            WorkoutAction::for_form(&WorkoutForm::for_new()),
            WorkoutAction::Add
        );
    }
}
