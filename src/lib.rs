//! # Workout Tracker
//!
//! Client core for a personal workout-tracking service: accounts, a
//! persisted session and a per-user list of workouts kept in step with
//! a remote REST API.
//!
//! The crate holds everything that does not depend on where it runs.
//! The browser front end (`workout-tracker-ui`) and the `workouts`
//! terminal client are thin shells over it.
//!
//! ## Modules
//!
//! - [`api`]: endpoint table, response decoding and the [`WorkoutApi`] seam
//! - [`session`]: token persistence and the sign-in / restore flows
//! - [`workouts`]: the local workout list and its CRUD flows
//! - [`routes`]: pages, navigation links and session guards
//! - [`forms`]: form state and local validation
//! - [`config`], [`logging`]: terminal client setup (`native` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use workout_tracker::{HttpClient, LoginForm, MemoryStore, SessionContext, WorkoutBoard};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpClient::connect("http://localhost:4000", None)?;
//!     let mut ctx = SessionContext::new(MemoryStore::new());
//!
//!     ctx.login(&api, &LoginForm::new("ada@example.com", "secret")).await?;
//!
//!     let mut board = WorkoutBoard::new();
//!     if let Some(token) = ctx.token() {
//!         workout_tracker::workouts::load(&api, token, &mut board).await?;
//!     }
//!     println!("{} workouts", board.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod forms;
pub mod model;
pub mod notice;
pub mod routes;
pub mod session;
pub mod workouts;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

#[cfg(test)]
mod testing;

pub use api::{ApiClient, Endpoint, Method, RawRequest, RawResponse, Transport, WorkoutApi};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use forms::{EditorMode, FormProblem, LoginForm, RegisterForm, WorkoutForm};
pub use model::{Credentials, Registration, Session, UserProfile, Workout, WorkoutDraft, WorkoutStatus};
pub use notice::{Notice, NoticeLevel};
pub use routes::{nav_links, Route};
pub use session::{MemoryStore, SessionContext, SessionStore, SignInError, StoreError};
pub use workouts::{BoardUpdate, Feedback, Saved, WorkoutAction, WorkoutBoard};

#[cfg(feature = "native")]
pub use api::{HttpClient, ReqwestTransport};
#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
#[cfg(feature = "native")]
pub use session::FileStore;
