//! REST endpoints consumed by the client.

use super::transport::Method;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Registration,
    Logout,
    CurrentUser,
    MyProfile,
    ActivityStatistics,
    MyActivities,
    CreateActivity,
    Teams,
    MyTeams,
    CreateTeam,
    JoinTeam(u64),
    LeaveTeam(u64),
    UserLeaderboard,
    TeamLeaderboard,
    WorkoutSuggestions,
    GenerateSuggestions,
    CompleteSuggestion(u64),
    Achievements,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::CurrentUser
            | Endpoint::MyProfile
            | Endpoint::ActivityStatistics
            | Endpoint::MyActivities
            | Endpoint::Teams
            | Endpoint::MyTeams
            | Endpoint::UserLeaderboard
            | Endpoint::TeamLeaderboard
            | Endpoint::WorkoutSuggestions
            | Endpoint::Achievements => Method::Get,
            Endpoint::Login
            | Endpoint::Registration
            | Endpoint::Logout
            | Endpoint::CreateActivity
            | Endpoint::CreateTeam
            | Endpoint::JoinTeam(_)
            | Endpoint::LeaveTeam(_)
            | Endpoint::GenerateSuggestions
            | Endpoint::CompleteSuggestion(_) => Method::Post,
        }
    }

    /// Path suffix appended to the API base URL
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/auth/login/".to_string(),
            Endpoint::Registration => "/auth/registration/".to_string(),
            Endpoint::Logout => "/auth/logout/".to_string(),
            Endpoint::CurrentUser => "/auth/user/".to_string(),
            Endpoint::MyProfile => "/profiles/me/".to_string(),
            Endpoint::ActivityStatistics => "/activities/statistics/".to_string(),
            Endpoint::MyActivities => "/activities/my_activities/".to_string(),
            Endpoint::CreateActivity => "/activities/".to_string(),
            Endpoint::Teams | Endpoint::CreateTeam => "/teams/".to_string(),
            Endpoint::MyTeams => "/teams/my_teams/".to_string(),
            Endpoint::JoinTeam(id) => format!("/teams/{}/join/", id),
            Endpoint::LeaveTeam(id) => format!("/teams/{}/leave/", id),
            Endpoint::UserLeaderboard => "/leaderboard/".to_string(),
            Endpoint::TeamLeaderboard => "/team-leaderboard/".to_string(),
            Endpoint::WorkoutSuggestions => "/workout-suggestions/".to_string(),
            Endpoint::GenerateSuggestions => "/workout-suggestions/generate/".to_string(),
            Endpoint::CompleteSuggestion(id) => {
                format!("/workout-suggestions/{}/mark_completed/", id)
            }
            Endpoint::Achievements => "/achievements/".to_string(),
        }
    }
}
