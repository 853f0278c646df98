//! OctoFit REST API
//!
//! Client for the OctoFit backend. Requests carry `Authorization: Token <key>`
//! when a session exists.
//!
//! # Endpoints
//!
//! ## Auth
//! - `POST /auth/login/` - Exchange credentials for a token
//! - `POST /auth/registration/` - Create an account
//! - `POST /auth/logout/` - Invalidate the token
//! - `GET /auth/user/` - Current user
//!
//! ## Profile & Activities
//! - `GET /profiles/me/` - Current user's profile
//! - `GET /activities/statistics/` - Totals and per-type breakdown
//! - `GET /activities/my_activities/` - Current user's activities
//! - `POST /activities/` - Log an activity
//! - `GET /achievements/` - Earned achievements
//!
//! ## Teams
//! - `GET /teams/` - All teams
//! - `GET /teams/my_teams/` - Teams the user belongs to
//! - `POST /teams/` - Create a team
//! - `POST /teams/:id/join/` - Join a team
//! - `POST /teams/:id/leave/` - Leave a team
//!
//! ## Leaderboards (public)
//! - `GET /leaderboard/` - Users by points
//! - `GET /team-leaderboard/` - Teams by points
//!
//! ## Workouts
//! - `GET /workout-suggestions/` - Suggestions for the user
//! - `POST /workout-suggestions/generate/` - Generate new suggestions
//! - `POST /workout-suggestions/:id/mark_completed/` - Complete a suggestion
//!
//! # Example
//!
//! ```rust,ignore
//! use octofit::api::{ApiClient, ReqwestTransport};
//! use octofit::session::{MemoryStore, SessionContext};
//! use octofit::Config;
//!
//! let mut config = Config::default();
//! config.apply_overrides(|name| std::env::var(name).ok());
//! let session = SessionContext::hydrate(MemoryStore::new(), config.storage.clone());
//! let client = ApiClient::new(ReqwestTransport::new(&config.api)?, config.api_base(), session);
//! let leaders = client.user_leaderboard().await?;
//! ```

mod client;
pub mod dto;
mod endpoints;
pub mod error;
#[cfg(feature = "native-client")]
mod http;
mod transport;

pub use client::ApiClient;
pub use endpoints::Endpoint;
pub use error::{ApiError, ApiResult, ErrorKind};
#[cfg(feature = "native-client")]
pub use http::ReqwestTransport;
pub use transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};
