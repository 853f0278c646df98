//! Dashboard data: profile, totals, recent activities and achievements.

use futures_util::future::join4;

use super::Resource;
use crate::api::{ApiClient, ApiResult, Transport};
use crate::models::{Achievement, Activity, ActivityStatistics, Profile};

/// Activities listed under "Recent Activities"
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub profile: Profile,
    pub statistics: ActivityStatistics,
    pub recent_activities: Vec<Activity>,
    pub achievements: Vec<Achievement>,
}

impl Resource for DashboardData {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub value: String,
    pub label: &'static str,
}

impl DashboardData {
    pub fn stat_cards(&self) -> [StatCard; 4] {
        let s = &self.statistics;
        [
            StatCard {
                value: s.total_points.to_string(),
                label: "Total Points",
            },
            StatCard {
                value: s.total_activities.to_string(),
                label: "Activities",
            },
            StatCard {
                value: s.total_duration.to_string(),
                label: "Minutes",
            },
            StatCard {
                value: s.distance_display(),
                label: "KM",
            },
        ]
    }

    /// Profile information rows as (label, value)
    pub fn profile_rows(&self) -> Vec<(&'static str, String)> {
        let p = &self.profile;
        vec![
            ("Fitness Level", p.fitness_level.label().to_string()),
            ("Height", measurement(p.height, "cm")),
            ("Weight", measurement(p.weight, "kg")),
            (
                "Goals",
                p.fitness_goals
                    .as_deref()
                    .filter(|g| !g.trim().is_empty())
                    .unwrap_or("Not set")
                    .to_string(),
            ),
        ]
    }
}

fn measurement(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{} {}", v, unit),
        None => "Not set".to_string(),
    }
}

/// Fetch all dashboard sections in parallel.
///
/// Only the profile is required; the other sections fall back to empty.
pub async fn load_dashboard<T: Transport>(client: &ApiClient<T>) -> ApiResult<DashboardData> {
    let (profile, statistics, activities, achievements) = join4(
        client.my_profile(),
        client.activity_statistics(),
        client.my_activities(),
        client.achievements(),
    )
    .await;

    let profile = profile?;
    let statistics = statistics.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to load activity statistics");
        ActivityStatistics::default()
    });
    let mut recent_activities = activities.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to load activities");
        Vec::new()
    });
    recent_activities.truncate(RECENT_ACTIVITY_LIMIT);
    let achievements = achievements.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to load achievements");
        Vec::new()
    });

    Ok(DashboardData {
        profile,
        statistics,
        recent_activities,
        achievements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Method};
    use crate::session::SessionContext;
    use crate::testing::MockTransport;

    const PROFILE: &str = r#"{"id": 1, "username": "john_runner", "height": 180.0,
        "weight": null, "fitness_level": "intermediate", "fitness_goals": "", "total_points": 420}"#;

    fn activities(n: u64) -> String {
        let rows: Vec<String> = (1..=n)
            .map(|id| {
                format!(
                    r#"{{"id": {}, "activity_type": "running", "duration": 30,
                        "intensity": "moderate", "points_earned": 45, "date_performed": "2024-05-0{}"}}"#,
                    id,
                    id.min(9)
                )
            })
            .collect();
        format!("[{}]", rows.join(","))
    }

    fn client(transport: &MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(transport.clone(), "http://api.test/api", SessionContext::in_memory())
    }

    #[tokio::test]
    async fn test_load_dashboard() {
        let transport = MockTransport::new();
        transport.route(Method::Get, "/profiles/me/", 200, PROFILE);
        transport.route(
            Method::Get,
            "/activities/statistics/",
            200,
            r#"{"total_activities": 7, "total_duration": 210, "total_distance": 31.46,
                "total_points": 420, "activity_breakdown": {"running": 7}}"#,
        );
        transport.route(Method::Get, "/activities/my_activities/", 200, &activities(7));
        transport.route(Method::Get, "/achievements/", 200, "[]");

        let data = load_dashboard(&client(&transport)).await.unwrap();
        assert_eq!(data.recent_activities.len(), RECENT_ACTIVITY_LIMIT);
        assert_eq!(data.recent_activities[0].id, 1);

        let cards = data.stat_cards();
        assert_eq!(cards[0].value, "420");
        assert_eq!(cards[2].value, "210");
        assert_eq!(cards[3].value, "31.5");
        assert_eq!(cards[3].label, "KM");

        let rows = data.profile_rows();
        assert_eq!(rows[0].1, "Intermediate");
        assert_eq!(rows[1].1, "180 cm");
        assert_eq!(rows[2].1, "Not set");
        assert_eq!(rows[3].1, "Not set");
    }

    #[tokio::test]
    async fn test_secondary_failures_fall_back() {
        let transport = MockTransport::new();
        transport.route(Method::Get, "/profiles/me/", 200, PROFILE);
        transport.route(Method::Get, "/activities/statistics/", 500, "");
        transport.route(Method::Get, "/activities/my_activities/", 500, "");
        transport.route(Method::Get, "/achievements/", 404, "");

        let data = load_dashboard(&client(&transport)).await.unwrap();
        assert_eq!(data.statistics, ActivityStatistics::default());
        assert!(data.recent_activities.is_empty());
        assert_eq!(data.stat_cards()[3].value, "0.0");
    }

    #[tokio::test]
    async fn test_profile_failure_fails_view() {
        let transport = MockTransport::new();
        transport.route(Method::Get, "/profiles/me/", 500, "");
        transport.route(Method::Get, "/activities/statistics/", 200, "{}");
        transport.route(Method::Get, "/activities/my_activities/", 200, "[]");
        transport.route(Method::Get, "/achievements/", 200, "[]");

        let err = load_dashboard(&client(&transport)).await.unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, .. }));
        assert_eq!(transport.requests().len(), 4);
    }
}
