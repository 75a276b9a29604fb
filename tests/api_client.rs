//! End-to-end tests of the reqwest client against an in-process mock of
//! the workout service.

#![cfg(feature = "native")]

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use workout_tracker::session::{self, login_notice};
use workout_tracker::workouts::{self, Feedback, WorkoutAction};
use workout_tracker::{
    ApiError, FileStore, HttpClient, LoginForm, MemoryStore, Notice, RegisterForm, Registration,
    SessionContext, SessionStore, SignInError, WorkoutApi, WorkoutBoard, WorkoutForm,
    WorkoutStatus,
};

#[derive(Default)]
struct Mock {
    /// (id, email, password)
    users: Vec<(String, String, String)>,
    workouts: Vec<(String, Value)>,
    next_id: usize,
}

type Shared = Arc<Mutex<Mock>>;
type Reply = (StatusCode, Json<Value>);

fn caller(state: &Shared, headers: &HeaderMap) -> Option<String> {
    let token = headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?;
    let user_id = token.strip_prefix("token-")?;
    let mock = state.lock().unwrap();
    mock.users
        .iter()
        .any(|(id, _, _)| id == user_id)
        .then(|| user_id.to_string())
}

fn unauthorized() -> Reply {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "auth": "Failed", "message": "Action Forbidden" })),
    )
}

async fn register(State(state): State<Shared>, Json(body): Json<Value>) -> Reply {
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default().to_string();

    let mut errors = Vec::new();
    if !email.contains('@') {
        errors.push("Email invalid");
    }
    if body["mobileNo"].as_str().map(str::len) != Some(11) {
        errors.push("Mobile number invalid");
    }
    if password.len() < 8 {
        errors.push("Password must be at least 8 characters");
    }
    if !errors.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors })));
    }

    let mut mock = state.lock().unwrap();
    if mock.users.iter().any(|(_, e, _)| *e == email) {
        return (
            StatusCode::OK,
            Json(json!({ "success": false, "errors": ["Email already registered"] })),
        );
    }
    mock.next_id += 1;
    let id = format!("u{}", mock.next_id);
    mock.users.push((id, email, password));
    (
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": "Registered Successfully" })),
    )
}

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> Reply {
    let mock = state.lock().unwrap();
    let email = body["email"].as_str().unwrap_or_default();
    match mock.users.iter().find(|(_, e, _)| e == email) {
        None => (StatusCode::OK, Json(json!({ "message": "No email found" }))),
        Some((_, _, pw)) if Some(pw.as_str()) != body["password"].as_str() => (
            StatusCode::OK,
            Json(json!({ "message": "Incorrect email or password" })),
        ),
        Some((id, _, _)) => (
            StatusCode::OK,
            Json(json!({ "access": format!("token-{}", id) })),
        ),
    }
}

async fn details(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let Some(user_id) = caller(&state, &headers) else {
        return unauthorized();
    };
    let mock = state.lock().unwrap();
    let Some((id, email, _)) = mock.users.iter().find(|(id, _, _)| *id == user_id) else {
        return unauthorized();
    };
    (
        StatusCode::OK,
        Json(json!({
            "user": {
                "_id": id,
                "isAdmin": false,
                "email": email,
                "firstName": "Ada",
                "lastName": "Lovelace",
            }
        })),
    )
}

async fn list(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let Some(user_id) = caller(&state, &headers) else {
        return unauthorized();
    };
    let mock = state.lock().unwrap();
    let mine: Vec<Value> = mock
        .workouts
        .iter()
        .filter(|(owner, _)| *owner == user_id)
        .map(|(_, w)| w.clone())
        .collect();
    (StatusCode::OK, Json(Value::Array(mine)))
}

async fn add(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    let Some(user_id) = caller(&state, &headers) else {
        return unauthorized();
    };
    let mut mock = state.lock().unwrap();
    mock.next_id += 1;
    let workout = json!({
        "_id": format!("w{}", mock.next_id),
        "userId": user_id,
        "name": body["name"],
        "duration": body["duration"],
        "status": "pending",
        "dateAdded": chrono::Utc::now().to_rfc3339(),
    });
    mock.workouts.push((user_id, workout.clone()));
    (StatusCode::CREATED, Json(workout))
}

/// Apply `change` to the caller's workout `id`: 404 if missing, 403 if not theirs
fn with_owned(
    state: &Shared,
    headers: &HeaderMap,
    id: &str,
    change: impl FnOnce(&mut Mock, usize) -> Reply,
) -> Reply {
    let Some(user_id) = caller(state, headers) else {
        return unauthorized();
    };
    let mut mock = state.lock().unwrap();
    let Some(idx) = mock.workouts.iter().position(|(_, w)| w["_id"] == id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Workout not found" })),
        );
    };
    if mock.workouts[idx].0 != user_id {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "Not your workout" })),
        );
    }
    change(&mut *mock, idx)
}

async fn update(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Reply {
    with_owned(&state, &headers, &id, |mock, idx| {
        let workout = &mut mock.workouts[idx].1;
        workout["name"] = body["name"].clone();
        workout["duration"] = body["duration"].clone();
        (
            StatusCode::OK,
            Json(json!({ "message": "Workout updated successfully", "updatedWorkout": workout })),
        )
    })
}

async fn remove(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    with_owned(&state, &headers, &id, |mock, idx| {
        mock.workouts.remove(idx);
        (
            StatusCode::OK,
            Json(json!({ "message": "Workout deleted successfully" })),
        )
    })
}

async fn complete(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<String>) -> Reply {
    with_owned(&state, &headers, &id, |mock, idx| {
        let workout = &mut mock.workouts[idx].1;
        workout["status"] = json!("completed");
        (
            StatusCode::OK,
            Json(json!({ "message": "Workout status updated successfully", "updatedWorkout": workout })),
        )
    })
}

async fn spawn_service() -> (String, Shared) {
    let state = Shared::default();
    let app = Router::new()
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/users/details", get(details))
        .route("/workouts/getMyWorkouts", get(list))
        .route("/workouts/addWorkout", post(add))
        .route("/workouts/updateWorkout/:id", patch(update))
        .route("/workouts/deleteWorkout/:id", delete(remove))
        .route("/workouts/completeWorkoutStatus/:id", patch(complete))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), state)
}

fn ada() -> RegisterForm {
    RegisterForm {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        mobile_no: "09171234567".into(),
        password: "analytical".into(),
        verify_password: "analytical".into(),
    }
}

async fn signed_in(base: &str) -> (HttpClient, SessionContext<MemoryStore>) {
    let api = HttpClient::connect(base, None).unwrap();
    session::register(&api, &ada()).await.unwrap();

    let mut ctx = SessionContext::new(MemoryStore::new());
    ctx.login(&api, &LoginForm::new("ada@example.com", "analytical"))
        .await
        .unwrap();
    (api, ctx)
}

fn form(name: &str, duration: &str) -> WorkoutForm {
    let mut form = WorkoutForm::for_new();
    form.name = name.into();
    form.duration = duration.into();
    form
}

#[tokio::test]
async fn test_register_login_and_restore() {
    let (base, _state) = spawn_service().await;
    let (api, ctx) = signed_in(&base).await;

    let user = ctx.current().user.clone().unwrap();
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.display_name(), "Ada Lovelace");

    // A fresh front end holding the same token picks the identity back up
    let token = ctx.token().unwrap().to_string();
    let mut fresh = SessionContext::new(MemoryStore::with_token(token));
    let restored = fresh.restore(&api).await.unwrap();
    assert_eq!(restored.user_id(), Some(user.id.as_str()));
}

#[tokio::test]
async fn test_login_failures_are_distinguished() {
    let (base, _state) = spawn_service().await;
    let (api, _ctx) = signed_in(&base).await;
    let store = MemoryStore::new();

    let wrong = session::sign_in(&api, &store, &LoginForm::new("ada@example.com", "nope")).await;
    assert_eq!(wrong, Err(SignInError::Login(ApiError::InvalidCredentials)));
    assert_eq!(
        login_notice("ada@example.com", &wrong).message,
        "Incorrect email or password"
    );

    let unknown = session::sign_in(&api, &store, &LoginForm::new("bob@example.com", "x")).await;
    assert_eq!(
        login_notice("bob@example.com", &unknown).message,
        "bob@example.com does not exist"
    );
    assert!(store.load_token().unwrap().is_none());
}

#[tokio::test]
async fn test_server_validation_errors_are_listed() {
    let (base, _state) = spawn_service().await;
    let api = HttpClient::connect(&base, None).unwrap();

    let err = api
        .register(&Registration {
            first_name: "A".into(),
            last_name: "B".into(),
            email: "not-an-email".into(),
            mobile_no: "123".into(),
            password: "short".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.messages().len(), 3);
    assert!(matches!(err, ApiError::Validation(_)));

    // Duplicate address: 200 with success=false
    session::register(&api, &ada()).await.unwrap();
    let dup = session::register(&api, &ada()).await.unwrap_err();
    assert_eq!(dup.messages(), vec!["Email already registered".to_string()]);
}

#[tokio::test]
async fn test_rejected_token_redirects_and_clears() {
    let (base, _state) = spawn_service().await;
    let api = HttpClient::connect(&base, None).unwrap();

    let mut board = WorkoutBoard::new();
    let result = workouts::load(&api, "token-ghost", &mut board).await;
    assert_eq!(
        Feedback::from_result(WorkoutAction::Load, &result),
        Feedback::RedirectToLogin
    );
    assert!(!board.is_loaded());

    let store = MemoryStore::with_token("token-ghost");
    let session = session::restore(&api, &store).await.unwrap();
    assert!(!session.has_token());
    assert!(store.load_token().unwrap().is_none());
}

#[tokio::test]
async fn test_workout_lifecycle() {
    let (base, state) = spawn_service().await;
    let (api, ctx) = signed_in(&base).await;
    let token = ctx.token().unwrap();

    let mut board = WorkoutBoard::new();
    workouts::load(&api, token, &mut board).await.unwrap();
    assert!(board.is_loaded());
    assert!(board.is_empty());

    workouts::save(&api, token, &form("Run", "30 mins"), &mut board).await.unwrap();
    workouts::save(&api, token, &form(" Swim ", "1 hour"), &mut board).await.unwrap();
    assert_eq!(board.len(), 2);
    assert_eq!(board.workouts()[1].name, "Swim");
    assert!(board.workouts().iter().all(|w| w.date_added.is_some()));

    let run_id = board.workouts()[0].id.clone();
    let swim_id = board.workouts()[1].id.clone();

    let mut edit = WorkoutForm::for_existing(board.get(&run_id).unwrap());
    edit.duration = "45 mins".into();
    workouts::save(&api, token, &edit, &mut board).await.unwrap();
    assert_eq!(board.get(&run_id).unwrap().duration, "45 mins");

    workouts::complete(&api, token, &swim_id, &mut board).await.unwrap();
    assert_eq!(board.get(&swim_id).unwrap().status, WorkoutStatus::Completed);
    assert_eq!(board.get(&run_id).unwrap().status, WorkoutStatus::Pending);

    workouts::delete(&api, token, &run_id, &mut board).await.unwrap();
    assert!(board.get(&run_id).is_none());
    assert_eq!(board.len(), 1);

    // Local state matches the service
    assert_eq!(state.lock().unwrap().workouts.len(), 1);
}

#[tokio::test]
async fn test_other_users_workout_is_forbidden() {
    let (base, state) = spawn_service().await;
    let (api, ctx) = signed_in(&base).await;
    let token = ctx.token().unwrap();

    state.lock().unwrap().workouts.push((
        "someone-else".to_string(),
        json!({ "_id": "theirs", "name": "Row", "duration": "20 mins", "status": "pending" }),
    ));

    let mut board = WorkoutBoard::new();
    let result = workouts::delete(&api, token, "theirs", &mut board).await;
    assert_eq!(result, Err(ApiError::Forbidden));
    assert_eq!(
        Feedback::from_result(WorkoutAction::Delete, &result),
        Feedback::Notify(Notice::error("You are not authorized to delete this workout."))
    );

    let missing = workouts::complete(&api, token, "nope", &mut board).await;
    assert!(matches!(missing, Err(ApiError::NotFound(ref m)) if m == "Workout not found"));
}

#[tokio::test]
async fn test_file_store_survives_restart() {
    let (base, _state) = spawn_service().await;
    let api = HttpClient::connect(&base, None).unwrap();
    session::register(&api, &ada()).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("session.toml");

    let mut first = SessionContext::new(FileStore::new(&path));
    first
        .login(&api, &LoginForm::new("ada@example.com", "analytical"))
        .await
        .unwrap();

    let mut second = SessionContext::new(FileStore::new(&path));
    assert!(second.restore(&api).await.unwrap().is_authenticated());

    second.unset().unwrap();
    let mut third = SessionContext::new(FileStore::new(&path));
    assert!(!third.restore(&api).await.unwrap().has_token());
}
