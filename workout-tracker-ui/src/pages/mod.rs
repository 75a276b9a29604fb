//! Pages
//!
//! Top-level route views.

pub mod home;
pub mod login;
pub mod logout;
pub mod register;
pub mod workouts;

pub use home::Home;
pub use login::Login;
pub use logout::Logout;
pub use register::Register;
pub use workouts::Workouts;
