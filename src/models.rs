//! Domain Models
//!
//! Payloads returned by the OctoFit REST API. The client renders what the
//! server returns; these types only carry display helpers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Authenticated user as returned by `/auth/user/`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(alias = "pk")]
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    /// Full name when set, username otherwise
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    #[serde(other)]
    Other,
}

impl FitnessLevel {
    pub fn label(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
            FitnessLevel::Expert => "Expert",
            FitnessLevel::Other => "Other",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of logged activity
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    #[default]
    Running,
    Walking,
    Cycling,
    Swimming,
    StrengthTraining,
    Yoga,
    Cardio,
    Sports,
    #[serde(other)]
    Other,
}

impl ActivityType {
    pub const ALL: [ActivityType; 9] = [
        ActivityType::Running,
        ActivityType::Walking,
        ActivityType::Cycling,
        ActivityType::Swimming,
        ActivityType::StrengthTraining,
        ActivityType::Yoga,
        ActivityType::Cardio,
        ActivityType::Sports,
        ActivityType::Other,
    ];

    /// Wire value, e.g. `strength_training`
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Running => "running",
            ActivityType::Walking => "walking",
            ActivityType::Cycling => "cycling",
            ActivityType::Swimming => "swimming",
            ActivityType::StrengthTraining => "strength_training",
            ActivityType::Yoga => "yoga",
            ActivityType::Cardio => "cardio",
            ActivityType::Sports => "sports",
            ActivityType::Other => "other",
        }
    }

    /// Select option label, e.g. `Strength Training`
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Running => "Running",
            ActivityType::Walking => "Walking",
            ActivityType::Cycling => "Cycling",
            ActivityType::Swimming => "Swimming",
            ActivityType::StrengthTraining => "Strength Training",
            ActivityType::Yoga => "Yoga",
            ActivityType::Cardio => "Cardio",
            ActivityType::Sports => "Sports",
            ActivityType::Other => "Other",
        }
    }

    /// Card title: wire value with underscores as spaces
    pub fn display_name(&self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn parse(value: &str) -> Option<ActivityType> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    #[default]
    Moderate,
    High,
    Extreme,
    /// Any level this client does not know; never offered in forms
    #[serde(other)]
    Other,
}

impl Intensity {
    pub const ALL: [Intensity; 4] = [
        Intensity::Low,
        Intensity::Moderate,
        Intensity::High,
        Intensity::Extreme,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Moderate => "moderate",
            Intensity::High => "high",
            Intensity::Extreme => "extreme",
            Intensity::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Low => "Low",
            Intensity::Moderate => "Moderate",
            Intensity::High => "High",
            Intensity::Extreme => "Extreme",
            Intensity::Other => "Other",
        }
    }

    /// Points per minute the server awards at this intensity
    pub fn points_multiplier(&self) -> f64 {
        match self {
            Intensity::Low => 1.0,
            Intensity::Moderate => 1.5,
            Intensity::High => 2.0,
            Intensity::Extreme => 2.5,
            Intensity::Other => 1.0,
        }
    }

    pub fn parse(value: &str) -> Option<Intensity> {
        Self::ALL.into_iter().find(|i| i.as_str() == value)
    }
}

/// Current user's profile from `/profiles/me/`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub fitness_level: FitnessLevel,
    #[serde(default)]
    pub fitness_goals: Option<String>,
    #[serde(default)]
    pub total_points: i64,
}

/// A logged activity
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: u64,
    pub activity_type: ActivityType,
    pub duration: u32,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub calories_burned: Option<u32>,
    #[serde(default)]
    pub intensity: Intensity,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub points_earned: i64,
    pub date_performed: NaiveDate,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Aggregates from `/activities/statistics/`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ActivityStatistics {
    pub total_activities: u32,
    pub total_duration: u64,
    pub total_distance: f64,
    pub total_points: i64,
    pub activity_breakdown: BTreeMap<String, u32>,
}

impl ActivityStatistics {
    /// Distance with one decimal, as shown on the dashboard
    pub fn distance_display(&self) -> String {
        format!("{:.1}", self.total_distance)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub total_points: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub creator_username: String,
    #[serde(default)]
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub total_points: i64,
}

/// Shared shape of user and team leaderboard rows
pub trait LeaderboardRow {
    fn rank(&self) -> u32;
    fn display_name(&self) -> &str;
    fn points(&self) -> i64;
    /// Activities for users, members for teams
    fn secondary_count(&self) -> u32;
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserLeaderboardEntry {
    pub rank: u32,
    pub username: String,
    pub total_points: i64,
    pub activity_count: u32,
}

impl LeaderboardRow for UserLeaderboardEntry {
    fn rank(&self) -> u32 {
        self.rank
    }
    fn display_name(&self) -> &str {
        &self.username
    }
    fn points(&self) -> i64 {
        self.total_points
    }
    fn secondary_count(&self) -> u32 {
        self.activity_count
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TeamLeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub total_points: i64,
    pub member_count: u32,
}

impl LeaderboardRow for TeamLeaderboardEntry {
    fn rank(&self) -> u32 {
        self.rank
    }
    fn display_name(&self) -> &str {
        &self.name
    }
    fn points(&self) -> i64 {
        self.total_points
    }
    fn secondary_count(&self) -> u32 {
        self.member_count
    }
}

/// Server-generated workout recommendation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSuggestion {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub activity_type: ActivityType,
    pub recommended_duration: u32,
    pub recommended_intensity: Intensity,
    #[serde(default)]
    pub fitness_level: FitnessLevel,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub badge_type: String,
    #[serde(default)]
    pub earned_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_accepts_pk_alias() {
        let user: User = serde_json::from_str(
            r#"{"pk": 3, "username": "john_runner", "email": "john@example.com"}"#,
        )
        .unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.display_name(), "john_runner");
    }

    #[test]
    fn test_activity_from_server_payload() {
        let activity: Activity = serde_json::from_str(
            r#"{
                "id": 7,
                "user": 3,
                "username": "john_runner",
                "activity_type": "strength_training",
                "duration": 40,
                "distance": null,
                "calories_burned": null,
                "intensity": "high",
                "notes": "",
                "points_earned": 80,
                "date_performed": "2024-05-02",
                "created_at": "2024-05-02T08:30:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(activity.activity_type, ActivityType::StrengthTraining);
        assert_eq!(activity.activity_type.display_name(), "strength training");
        assert_eq!(activity.points_earned, 80);
        assert_eq!(activity.distance, None);
    }

    #[test]
    fn test_unknown_activity_type_maps_to_other() {
        let t: ActivityType = serde_json::from_str(r#""rowing""#).unwrap();
        assert_eq!(t, ActivityType::Other);
    }

    #[test]
    fn test_unknown_intensity_keeps_the_list_decodable() {
        let activities: Vec<Activity> = serde_json::from_str(
            r#"[
                {"id": 1, "activity_type": "running", "duration": 30,
                 "intensity": "very_high", "date_performed": "2024-05-01"},
                {"id": 2, "activity_type": "yoga", "duration": 45,
                 "intensity": "low", "date_performed": "2024-05-02"}
            ]"#,
        )
        .unwrap();

        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].intensity, Intensity::Other);
        assert_eq!(activities[0].intensity.label(), "Other");
        assert_eq!(activities[1].intensity, Intensity::Low);
        assert_eq!(Intensity::parse("other"), None);
    }

    #[test]
    fn test_unknown_fitness_level_maps_to_other() {
        let suggestion: WorkoutSuggestion = serde_json::from_str(
            r#"{"id": 4, "title": "Tempo Run", "activity_type": "running",
                "recommended_duration": 40, "recommended_intensity": "moderate",
                "fitness_level": "elite"}"#,
        )
        .unwrap();
        assert_eq!(suggestion.fitness_level, FitnessLevel::Other);
    }

    #[test]
    fn test_statistics_defaults_missing_fields() {
        let stats: ActivityStatistics =
            serde_json::from_str(r#"{"total_activities": 2, "total_distance": 12.345}"#).unwrap();
        assert_eq!(stats.total_points, 0);
        assert_eq!(stats.total_duration, 0);
        assert_eq!(stats.distance_display(), "12.3");
    }

    #[test]
    fn test_leaderboard_rows_share_shape() {
        let user = UserLeaderboardEntry {
            rank: 1,
            username: "ana".into(),
            total_points: 500,
            activity_count: 12,
        };
        let team = TeamLeaderboardEntry {
            rank: 4,
            name: "Octocats".into(),
            total_points: 900,
            member_count: 5,
        };
        let rows: [&dyn LeaderboardRow; 2] = [&user, &team];
        assert_eq!(rows[0].display_name(), "ana");
        assert_eq!(rows[0].secondary_count(), 12);
        assert_eq!(rows[1].display_name(), "Octocats");
        assert_eq!(rows[1].secondary_count(), 5);
    }

    #[test]
    fn test_enum_parse_round_trips_wire_values() {
        for t in ActivityType::ALL {
            assert_eq!(ActivityType::parse(t.as_str()), Some(t));
        }
        assert_eq!(Intensity::parse("extreme"), Some(Intensity::Extreme));
        assert_eq!(Intensity::parse("brutal"), None);
    }
}
