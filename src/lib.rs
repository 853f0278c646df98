//! # OctoFit
//!
//! Client core for the OctoFit Tracker: activity logging, teams,
//! leaderboards and workout suggestions against the OctoFit REST API.
//!
//! ## Modules
//!
//! - [`api`]: REST client over a pluggable [`Transport`]
//! - [`session`]: persisted token and user, shared as a [`SessionContext`]
//! - [`router`]: route table and session guard
//! - [`views`]: per-view data loading, forms and the [`ViewModel`] lifecycle
//! - [`models`]: API payloads
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use octofit::api::{ApiClient, ReqwestTransport};
//! use octofit::session::{MemoryStore, SessionContext};
//! use octofit::views::{auth, dashboard};
//! use octofit::Config;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.apply_overrides(|name| std::env::var(name).ok());
//!     let session = SessionContext::hydrate(MemoryStore::new(), config.storage.clone());
//!     let client = ApiClient::new(ReqwestTransport::new(&config.api)?, config.api_base(), session);
//!
//!     let form = auth::LoginForm {
//!         username: "john_runner".into(),
//!         password: "secret123".into(),
//!     };
//!     let user = auth::login(&client, &form).await?;
//!     let data = dashboard::load_dashboard(&client).await?;
//!
//!     println!("{} has {} points", user.username, data.statistics.total_points);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod models;
pub mod router;
pub mod session;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiClient, ApiError, ApiResult, ErrorKind, Transport};
pub use config::{Config, ConfigError};
pub use router::{guard, nav_links, Route, RouteDecision};
pub use session::{KeyValueStore, MemoryStore, Session, SessionContext};
pub use views::{FormError, ViewModel, ViewState};
