//! Route table and session guard.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    Activities,
    Teams,
    Leaderboard,
    Workouts,
    NotFound,
}

impl Route {
    /// Every routable view, `NotFound` excluded
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::Login,
        Route::Register,
        Route::Dashboard,
        Route::Activities,
        Route::Teams,
        Route::Leaderboard,
        Route::Workouts,
    ];

    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/dashboard" => Route::Dashboard,
            "/activities" => Route::Activities,
            "/teams" => Route::Teams,
            "/leaderboard" => Route::Leaderboard,
            "/workouts" => Route::Workouts,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
            Route::Activities => "/activities",
            Route::Teams => "/teams",
            Route::Leaderboard => "/leaderboard",
            Route::Workouts => "/workouts",
            Route::NotFound => "/*any",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Login",
            Route::Register => "Register",
            Route::Dashboard => "Dashboard",
            Route::Activities => "Activities",
            Route::Teams => "Teams",
            Route::Leaderboard => "Leaderboard",
            Route::Workouts => "Workouts",
            Route::NotFound => "Not Found",
        }
    }

    /// Requires a session to render
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::Dashboard | Route::Activities | Route::Teams | Route::Workouts
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    Redirect(Route),
}

pub fn guard(route: Route, authenticated: bool) -> RouteDecision {
    if route.is_protected() && !authenticated {
        tracing::debug!(route = %route, "Protected route without session, redirecting");
        RouteDecision::Redirect(Route::Login)
    } else {
        RouteDecision::Render(route)
    }
}

/// Navigation bar entries for the current session state
pub fn nav_links(authenticated: bool) -> &'static [Route] {
    if authenticated {
        &[
            Route::Dashboard,
            Route::Activities,
            Route::Teams,
            Route::Leaderboard,
            Route::Workouts,
        ]
    } else {
        &[Route::Leaderboard, Route::Login, Route::Register]
    }
}
