//! Global Application State
//!
//! The API client, the session and reactive mirrors of both, provided to
//! all components.

use leptos::*;
use octofit::models::User;
use octofit::session::SessionContext;
use octofit::{ApiClient, Config};
use std::rc::Rc;

use super::browser_store::BrowserStore;
use crate::api::GlooTransport;

pub type Client = ApiClient<GlooTransport>;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// REST client carrying the session token
    pub client: Rc<Client>,
    /// Persisted session; only auth flows and the 401 handler write to it
    pub session: SessionContext,
    /// Signed-in user, kept in sync with `session`
    pub user: RwSignal<Option<User>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state(config: &Config) {
    let session = SessionContext::hydrate(BrowserStore, config.storage.clone());
    let user = create_rw_signal(session.user());

    session.subscribe(move |current| {
        user.set(current.map(|s| s.user.clone()));
    });

    let client = Rc::new(ApiClient::new(
        GlooTransport,
        config.api_base(),
        session.clone(),
    ));

    provide_context(GlobalState {
        client,
        session,
        user,
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    });
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}
