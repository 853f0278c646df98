//! Teams: membership, join/leave and team creation.

use futures_util::future::join;

use super::{FormError, Resource, SubmitError};
use crate::api::dto::NewTeam;
use crate::api::{ApiClient, ApiResult, Transport};
use crate::models::Team;

/// Current user's relation to a team in the "All Teams" list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Membership {
    Member,
    NotMember,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TeamsData {
    pub all_teams: Vec<Team>,
    pub my_teams: Vec<Team>,
}

impl Resource for TeamsData {}

impl TeamsData {
    pub fn is_member(&self, team_id: u64) -> bool {
        self.my_teams.iter().any(|t| t.id == team_id)
    }

    pub fn membership(&self, team_id: u64) -> Membership {
        if self.is_member(team_id) {
            Membership::Member
        } else {
            Membership::NotMember
        }
    }

    /// All teams paired with the user's membership
    pub fn cards(&self) -> impl Iterator<Item = (&Team, Membership)> + '_ {
        self.all_teams.iter().map(|t| (t, self.membership(t.id)))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TeamForm {
    pub name: String,
    pub description: String,
}

impl TeamForm {
    pub fn validate(&self) -> Result<NewTeam, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::Required("Team Name"));
        }
        Ok(NewTeam {
            name: name.to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

/// All teams (required) and the user's teams, fetched in parallel
pub async fn load_teams<T: Transport>(client: &ApiClient<T>) -> ApiResult<TeamsData> {
    let (all_teams, my_teams) = join(client.teams(), client.my_teams()).await;
    let my_teams = my_teams.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to load my teams");
        Vec::new()
    });
    Ok(TeamsData {
        all_teams: all_teams?,
        my_teams,
    })
}

pub async fn create_team<T: Transport>(
    client: &ApiClient<T>,
    form: &TeamForm,
) -> Result<Team, SubmitError> {
    let team = form.validate()?;
    let created = client.create_team(&team).await?;
    tracing::info!(id = created.id, name = %created.name, "Team created");
    Ok(created)
}

/// Join a team; returns the server's acknowledgement text
pub async fn join_team<T: Transport>(client: &ApiClient<T>, team_id: u64) -> ApiResult<String> {
    let detail = client.join_team(team_id).await?;
    tracing::info!(team_id, "Joined team");
    Ok(detail.detail)
}

pub async fn leave_team<T: Transport>(client: &ApiClient<T>, team_id: u64) -> ApiResult<String> {
    let detail = client.leave_team(team_id).await?;
    tracing::info!(team_id, "Left team");
    Ok(detail.detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use crate::session::SessionContext;
    use crate::testing::MockTransport;

    const OCTOCATS: &str = r#"{"id": 1, "name": "Octocats", "description": "Morning runners",
        "creator_username": "ana", "members": [], "member_count": 3, "total_points": 900}"#;
    const HUBBERS: &str = r#"{"id": 2, "name": "Hubbers", "description": "",
        "creator_username": "ben", "members": [], "member_count": 1, "total_points": 120}"#;

    fn client(transport: &MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(transport.clone(), "http://api.test/api", SessionContext::in_memory())
    }

    #[test]
    fn test_team_form_requires_name() {
        assert_eq!(
            TeamForm::default().validate(),
            Err(FormError::Required("Team Name"))
        );
        let team = TeamForm {
            name: " Octocats ".into(),
            description: String::new(),
        }
        .validate()
        .unwrap();
        assert_eq!(team.name, "Octocats");
    }

    #[tokio::test]
    async fn test_join_then_leave_flips_membership() {
        let transport = MockTransport::new();
        let all = format!("[{},{}]", OCTOCATS, HUBBERS);
        transport.route(Method::Get, "/teams/", 200, &all);
        transport.route(Method::Get, "/teams/my_teams/", 200, "[]");
        transport.route(Method::Get, "/teams/my_teams/", 200, &format!("[{}]", HUBBERS));
        transport.route(Method::Get, "/teams/my_teams/", 200, "[]");
        transport.route(
            Method::Post,
            "/teams/2/join/",
            200,
            r#"{"detail": "Successfully joined the team."}"#,
        );
        transport.route(
            Method::Post,
            "/teams/2/leave/",
            200,
            r#"{"detail": "Successfully left the team."}"#,
        );
        let client = client(&transport);

        let before = load_teams(&client).await.unwrap();
        assert_eq!(before.membership(2), Membership::NotMember);

        assert_eq!(
            join_team(&client, 2).await.unwrap(),
            "Successfully joined the team."
        );
        let joined = load_teams(&client).await.unwrap();
        let cards: Vec<_> = joined.cards().map(|(t, m)| (t.id, m)).collect();
        assert_eq!(cards, vec![(1, Membership::NotMember), (2, Membership::Member)]);

        leave_team(&client, 2).await.unwrap();
        let left = load_teams(&client).await.unwrap();
        assert!(!left.is_member(2));
    }

    #[tokio::test]
    async fn test_creator_cannot_leave() {
        let transport = MockTransport::new();
        transport.route(
            Method::Post,
            "/teams/1/leave/",
            400,
            r#"{"detail": "Team creator cannot leave the team. Delete the team instead."}"#,
        );
        let err = leave_team(&client(&transport), 1).await.unwrap_err();
        assert_eq!(
            err.user_message(),
            "Team creator cannot leave the team. Delete the team instead."
        );
    }

    #[tokio::test]
    async fn test_my_teams_failure_is_not_fatal() {
        let transport = MockTransport::new();
        transport.route(Method::Get, "/teams/", 200, &format!("[{}]", OCTOCATS));
        transport.route(Method::Get, "/teams/my_teams/", 500, "");

        let data = load_teams(&client(&transport)).await.unwrap();
        assert_eq!(data.all_teams.len(), 1);
        assert!(data.my_teams.is_empty());
    }

    #[tokio::test]
    async fn test_create_team_posts_form() {
        let transport = MockTransport::new();
        transport.route(Method::Post, "/teams/", 201, OCTOCATS);
        let client = client(&transport);

        let team = create_team(
            &client,
            &TeamForm {
                name: "Octocats".into(),
                description: "Morning runners".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(team.id, 1);

        let body: serde_json::Value =
            serde_json::from_str(transport.last_request().unwrap().body.as_deref().unwrap())
                .unwrap();
        assert_eq!(body["name"], "Octocats");
        assert_eq!(body["description"], "Morning runners");
    }
}
