//! Routes
//!
//! URL paths, navigation links and the session guards that keep users
//! off pages that do not apply to them.

use crate::model::Session;

/// Pages of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Register,
    Login,
    Logout,
    Workouts,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Register => "/register",
            Route::Login => "/login",
            Route::Logout => "/logout",
            Route::Workouts => "/workouts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Register => "Register",
            Route::Login => "Login",
            Route::Logout => "Logout",
            Route::Workouts => "Workouts",
        }
    }

    /// Where to send the user instead, if this page does not apply.
    ///
    /// Signed-in users skip login and registration. Workouts needs at
    /// least a token; whether the service still accepts it is decided by
    /// the first call.
    pub fn redirect_for(&self, session: &Session) -> Option<Route> {
        match self {
            Route::Login | Route::Register if session.is_authenticated() => Some(Route::Home),
            Route::Workouts if !session.has_token() => Some(Route::Login),
            _ => None,
        }
    }
}

/// Links shown in the navigation bar for this session
pub fn nav_links(session: &Session) -> Vec<Route> {
    if session.is_authenticated() {
        vec![Route::Home, Route::Workouts, Route::Logout]
    } else {
        vec![Route::Home, Route::Register, Route::Login]
    }
}
