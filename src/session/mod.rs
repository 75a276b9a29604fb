//! Session Management
//!
//! The signed-in identity and where its token is kept.
//!
//! - [`store`]: token persistence (memory, file)
//! - [`flow`]: restore / sign in / sign out / register
//! - [`SessionContext`]: owns the current session for a front end and
//!   restores it from the store at most once

pub mod flow;
pub mod store;

pub use flow::{login_notice, register, register_notices, restore, sign_in, sign_out, SignInError};
pub use store::{MemoryStore, SessionStore, StoreError};

#[cfg(feature = "native")]
pub use store::FileStore;

use crate::api::WorkoutApi;
use crate::error::ApiResult;
use crate::forms::LoginForm;
use crate::model::Session;

/// Current session plus the store backing it
pub struct SessionContext<S> {
    store: S,
    session: Session,
    restored: bool,
}

impl<S: SessionStore> SessionContext<S> {
    /// Anonymous context; call [`restore`](Self::restore) to pick up a stored token
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: Session::anonymous(),
            restored: false,
        }
    }

    pub fn current(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }

    /// Load identity for the stored token. Only the first call per
    /// context reaches the service; later calls return the current
    /// session.
    ///
    /// On failure the token is kept so protected calls can still try it.
    pub async fn restore<A>(&mut self, api: &A) -> ApiResult<&Session>
    where
        A: WorkoutApi + ?Sized,
    {
        if self.restored {
            return Ok(&self.session);
        }
        self.restored = true;

        match flow::restore(api, &self.store).await {
            Ok(session) => {
                self.session = session;
                Ok(&self.session)
            }
            Err(e) => {
                self.session = Session {
                    token: self.store.load_token().ok().flatten(),
                    user: None,
                };
                Err(e)
            }
        }
    }

    /// Replace the session, persisting its token
    pub fn set(&mut self, session: Session) -> Result<(), StoreError> {
        match session.token() {
            Some(token) => self.store.save_token(token)?,
            None => self.store.clear()?,
        }
        self.session = session;
        self.restored = true;
        Ok(())
    }

    /// Drop the session from memory and from the store
    pub fn unset(&mut self) -> Result<(), StoreError> {
        self.session = flow::sign_out(&self.store)?;
        Ok(())
    }

    /// Sign in and adopt the resulting session.
    ///
    /// When only the identity fetch fails the token is still adopted.
    pub async fn login<A>(&mut self, api: &A, form: &LoginForm) -> Result<&Session, SignInError>
    where
        A: WorkoutApi + ?Sized,
    {
        self.restored = true;
        match flow::sign_in(api, &self.store, form).await {
            Ok(session) => {
                self.session = session;
                Ok(&self.session)
            }
            Err(e) => {
                if matches!(e, SignInError::Details(_)) {
                    self.session = Session {
                        token: self.store.load_token().ok().flatten(),
                        user: None,
                    };
                }
                Err(e)
            }
        }
    }

    /// Token for protected calls, if any
    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }
}
