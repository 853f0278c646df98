//! Pages
//!
//! Top-level page components for each route.

pub mod activities;
pub mod auth;
pub mod dashboard;
pub mod home;
pub mod leaderboard;
pub mod not_found;
pub mod teams;
pub mod workouts;

pub use activities::Activities;
pub use auth::{Login, Register};
pub use dashboard::Dashboard;
pub use home::Home;
pub use leaderboard::Leaderboard;
pub use not_found::NotFound;
pub use teams::Teams;
pub use workouts::Workouts;
