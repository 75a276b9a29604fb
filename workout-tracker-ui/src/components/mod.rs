//! UI Components
//!
//! Reusable Leptos components for the workout client.

pub mod form_field;
pub mod loading;
pub mod nav;
pub mod toast;
pub mod workout_card;
pub mod workout_modal;

pub use form_field::FormField;
pub use loading::{InlineLoading, Loading};
pub use nav::Nav;
pub use toast::Toast;
pub use workout_card::WorkoutCard;
pub use workout_modal::WorkoutModal;
