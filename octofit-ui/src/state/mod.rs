//! State Management
//!
//! Global application state, browser session storage and view model
//! helpers.

pub mod browser_store;
pub mod global;
pub mod view;

pub use global::{provide_global_state, use_global_state};
pub use view::{spawn_load, use_view_model};
