//! Public leaderboards for users and teams.

use futures_util::future::join;
use std::fmt;

use super::Resource;
use crate::api::{ApiClient, ApiError, Transport};
use crate::models::{LeaderboardRow, TeamLeaderboardEntry, UserLeaderboardEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankBadge {
    Gold,
    Silver,
    Bronze,
    Number(u32),
}

impl fmt::Display for RankBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankBadge::Gold => f.write_str("🥇"),
            RankBadge::Silver => f.write_str("🥈"),
            RankBadge::Bronze => f.write_str("🥉"),
            RankBadge::Number(n) => write!(f, "{}", n),
        }
    }
}

pub fn rank_badge(rank: u32) -> RankBadge {
    match rank {
        1 => RankBadge::Gold,
        2 => RankBadge::Silver,
        3 => RankBadge::Bronze,
        n => RankBadge::Number(n),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeaderboardTab {
    #[default]
    Users,
    Teams,
}

impl LeaderboardTab {
    pub fn label(&self) -> &'static str {
        match self {
            LeaderboardTab::Users => "Users",
            LeaderboardTab::Teams => "Teams",
        }
    }

    /// Column headers: rank, name, points, secondary count
    pub fn headers(&self) -> [&'static str; 4] {
        match self {
            LeaderboardTab::Users => ["Rank", "Username", "Points", "Activities"],
            LeaderboardTab::Teams => ["Rank", "Team Name", "Points", "Members"],
        }
    }
}

/// One rendered table row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    pub badge: RankBadge,
    pub name: String,
    pub points: i64,
    pub secondary: u32,
}

impl RowView {
    pub fn from_row(row: &dyn LeaderboardRow) -> Self {
        Self {
            badge: rank_badge(row.rank()),
            name: row.display_name().to_string(),
            points: row.points(),
            secondary: row.secondary_count(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Leaderboards {
    pub users: Vec<UserLeaderboardEntry>,
    pub teams: Vec<TeamLeaderboardEntry>,
}

impl Resource for Leaderboards {}

impl Leaderboards {
    pub fn rows(&self, tab: LeaderboardTab) -> Vec<RowView> {
        match tab {
            LeaderboardTab::Users => self.users.iter().map(|r| RowView::from_row(r)).collect(),
            LeaderboardTab::Teams => self.teams.iter().map(|r| RowView::from_row(r)).collect(),
        }
    }
}

/// Both boards in parallel; a failed board renders empty
pub async fn load_leaderboards<T: Transport>(client: &ApiClient<T>) -> Result<Leaderboards, ApiError> {
    let (users, teams) = join(client.user_leaderboard(), client.team_leaderboard()).await;

    match (users, teams) {
        (Err(e), Err(_)) => Err(e),
        (users, teams) => Ok(Leaderboards {
            users: users.unwrap_or_else(|e| {
                tracing::error!(error = %e, "Failed to load user leaderboard");
                Vec::new()
            }),
            teams: teams.unwrap_or_else(|e| {
                tracing::error!(error = %e, "Failed to load team leaderboard");
                Vec::new()
            }),
        }),
    }
}
