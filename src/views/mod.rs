//! View Logic
//!
//! Everything a screen does apart from rendering: form validation, the data
//! each view loads on mount, and the mutations it issues. Rendering lives in
//! the `octofit-ui` package.

pub mod activities;
pub mod auth;
pub mod dashboard;
mod lifecycle;
pub mod leaderboard;
pub mod teams;
pub mod workouts;

pub use lifecycle::{Resource, Ticket, ViewModel, ViewState};

use thiserror::Error;

use crate::api::ApiError;

/// Client-side validation failure; blocks submission
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Duration must be a positive number of minutes")]
    InvalidDuration,

    #[error("Distance must be a non-negative number")]
    InvalidDistance,

    #[error("Date must be in YYYY-MM-DD format")]
    InvalidDate,
}

/// Failure of a form submission
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("{}", .0.user_message())]
    Api(#[from] ApiError),
}
