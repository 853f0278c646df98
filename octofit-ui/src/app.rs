//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;
use octofit::router::Route as View;
use octofit::Config;

use crate::components::{Nav, Protected, Toast, UnauthorizedRedirect};
use crate::pages::{
    Activities, Dashboard, Home, Leaderboard, Login, NotFound, Register, Teams, Workouts,
};

/// Root application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    crate::state::provide_global_state(&config);

    view! {
        <Router>
            <UnauthorizedRedirect />
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path=View::Home.path() view=Home />
                        <Route path=View::Login.path() view=Login />
                        <Route path=View::Register.path() view=Register />
                        <Route path=View::Leaderboard.path() view=Leaderboard />
                        <Route
                            path=View::Dashboard.path()
                            view=|| view! { <Protected route=View::Dashboard><Dashboard /></Protected> }
                        />
                        <Route
                            path=View::Activities.path()
                            view=|| view! { <Protected route=View::Activities><Activities /></Protected> }
                        />
                        <Route
                            path=View::Teams.path()
                            view=|| view! { <Protected route=View::Teams><Teams /></Protected> }
                        />
                        <Route
                            path=View::Workouts.path()
                            view=|| view! { <Protected route=View::Workouts><Workouts /></Protected> }
                        />
                        <Route path=View::NotFound.path() view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}
