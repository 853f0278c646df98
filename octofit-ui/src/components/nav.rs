//! Navigation Component
//!
//! Header navigation bar; links depend on whether a user is signed in.

use leptos::*;
use leptos_router::*;
use octofit::router::{nav_links, Route};
use octofit::views::auth;

use crate::state::use_global_state;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();

    let user = state.user;
    let client = state.client.clone();
    let on_logout = move |_| {
        let client = client.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            auth::logout(&client).await;
            navigate(Route::Home.path(), Default::default());
        });
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🐙"</span>
                        <span class="text-xl font-bold text-white">"OctoFit Tracker"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        {move || {
                            nav_links(user.get().is_some())
                                .iter()
                                .map(|route| view! { <NavLink route=*route /> })
                                .collect_view()
                        }}
                        <Show when=move || user.get().is_some()>
                            <button
                                on:click=on_logout.clone()
                                class="ml-2 px-4 py-2 rounded-lg border border-gray-500 text-gray-200
                                       hover:bg-gray-700 transition-colors"
                            >
                                "Logout"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(route: Route) -> impl IntoView {
    view! {
        <A
            href=route.path()
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {route.title()}
        </A>
    }
}
