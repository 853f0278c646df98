//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod guard;
pub mod loading;
pub mod nav;
pub mod toast;

pub use guard::{Protected, UnauthorizedRedirect};
pub use loading::{LoadError, Loading};
pub use nav::Nav;
pub use toast::Toast;
