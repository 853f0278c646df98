//! Route guard for views that need a session.

use leptos::*;
use leptos_router::*;
use octofit::router::{guard, Route, RouteDecision};

use crate::state::use_global_state;

/// Renders `children` when signed in, otherwise redirects to login
#[component]
pub fn Protected(route: Route, children: ChildrenFn) -> impl IntoView {
    let user = use_global_state().user;

    move || match guard(route, user.get().is_some()) {
        RouteDecision::Render(_) => children().into_view(),
        RouteDecision::Redirect(target) => view! { <Redirect path=target.path() /> }.into_view(),
    }
}

/// Subscribes the app to 401 responses: clear the session and go to login
#[component]
pub fn UnauthorizedRedirect() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();
    let session = state.session.clone();

    state.client.on_unauthorized(move || {
        tracing::warn!("Session rejected by server, signing out");
        session.clear();
        navigate(Route::Login.path(), Default::default());
    });
}
