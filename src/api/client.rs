//! REST API Client
//!
//! Wraps a [`Transport`] with the base URL, JSON headers and the session
//! token. Any 401 response is reported to the registered unauthorized
//! handlers before the response is handed back.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

use super::dto::{Detail, LoginRequest, NewActivity, NewTeam, RegistrationRequest, TokenResponse};
use super::endpoints::Endpoint;
use super::error::{ApiError, ApiResult};
use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::models::{
    Achievement, Activity, ActivityStatistics, Profile, Team, TeamLeaderboardEntry, User,
    UserLeaderboardEntry, WorkoutSuggestion,
};
use crate::session::SessionContext;

type Handler = Rc<dyn Fn()>;

pub struct ApiClient<T> {
    transport: T,
    base_url: String,
    session: SessionContext,
    unauthorized: RefCell<Vec<Handler>>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: &str, session: SessionContext) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            unauthorized: RefCell::new(Vec::new()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Register a reaction to 401 responses
    pub fn on_unauthorized(&self, handler: impl Fn() + 'static) {
        self.unauthorized.borrow_mut().push(Rc::new(handler));
    }

    /// Issue a request with the session token, if any.
    ///
    /// Returns the raw response whatever its status; only a transport
    /// failure is an error here.
    pub async fn call(
        &self,
        endpoint: Endpoint,
        body: Option<serde_json::Value>,
    ) -> ApiResult<ApiResponse> {
        let token = self.session.token();
        self.execute(endpoint, body, token.as_deref()).await
    }

    async fn execute(
        &self,
        endpoint: Endpoint,
        body: Option<serde_json::Value>,
        token: Option<&str>,
    ) -> ApiResult<ApiResponse> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = token {
            headers.push(("Authorization".to_string(), format!("Token {}", token)));
        }

        let request = ApiRequest {
            method: endpoint.method(),
            url: format!("{}{}", self.base_url, endpoint.path()),
            headers,
            body: body.map(|b| b.to_string()),
        };

        tracing::debug!(method = request.method.as_str(), url = %request.url, "API request");

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::error!(endpoint = %endpoint.path(), error = %e, "API request failed");
            ApiError::Transport(e)
        })?;

        if response.is_unauthorized() {
            tracing::warn!(endpoint = %endpoint.path(), "Unauthorized response");
            self.notify_unauthorized();
        } else if !response.ok() {
            tracing::warn!(
                endpoint = %endpoint.path(),
                status = response.status,
                "API request rejected"
            );
        }

        Ok(response)
    }

    fn notify_unauthorized(&self) {
        let handlers: Vec<Handler> = self.unauthorized.borrow().clone();
        for handler in handlers {
            handler();
        }
    }

    async fn fetch<R: DeserializeOwned>(&self, endpoint: Endpoint) -> ApiResult<R> {
        let response = self.call(endpoint, None).await?;
        decode(&response)
    }

    async fn submit<B: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> ApiResult<R> {
        let response = self.call(endpoint, Some(serde_json::to_value(body)?)).await?;
        decode(&response)
    }

    // ============ Auth ============

    pub async fn login(&self, request: &LoginRequest) -> ApiResult<TokenResponse> {
        self.submit(Endpoint::Login, request).await
    }

    pub async fn register(&self, request: &RegistrationRequest) -> ApiResult<TokenResponse> {
        self.submit(Endpoint::Registration, request).await
    }

    pub async fn logout(&self) -> ApiResult<Detail> {
        let response = self.call(Endpoint::Logout, None).await?;
        if !response.ok() {
            return Err(ApiError::from_response(&response));
        }
        Ok(serde_json::from_str(&response.body).unwrap_or_default())
    }

    /// Current user for the stored session
    pub async fn current_user(&self) -> ApiResult<User> {
        self.fetch(Endpoint::CurrentUser).await
    }

    /// Current user for a token that is not yet stored
    pub async fn current_user_with_token(&self, token: &str) -> ApiResult<User> {
        let response = self.execute(Endpoint::CurrentUser, None, Some(token)).await?;
        decode(&response)
    }

    // ============ Profile & Activities ============

    pub async fn my_profile(&self) -> ApiResult<Profile> {
        self.fetch(Endpoint::MyProfile).await
    }

    pub async fn activity_statistics(&self) -> ApiResult<ActivityStatistics> {
        self.fetch(Endpoint::ActivityStatistics).await
    }

    pub async fn my_activities(&self) -> ApiResult<Vec<Activity>> {
        self.fetch(Endpoint::MyActivities).await
    }

    pub async fn create_activity(&self, activity: &NewActivity) -> ApiResult<Activity> {
        self.submit(Endpoint::CreateActivity, activity).await
    }

    pub async fn achievements(&self) -> ApiResult<Vec<Achievement>> {
        self.fetch(Endpoint::Achievements).await
    }

    // ============ Teams ============

    pub async fn teams(&self) -> ApiResult<Vec<Team>> {
        self.fetch(Endpoint::Teams).await
    }

    pub async fn my_teams(&self) -> ApiResult<Vec<Team>> {
        self.fetch(Endpoint::MyTeams).await
    }

    pub async fn create_team(&self, team: &NewTeam) -> ApiResult<Team> {
        self.submit(Endpoint::CreateTeam, team).await
    }

    pub async fn join_team(&self, id: u64) -> ApiResult<Detail> {
        self.fetch(Endpoint::JoinTeam(id)).await
    }

    pub async fn leave_team(&self, id: u64) -> ApiResult<Detail> {
        self.fetch(Endpoint::LeaveTeam(id)).await
    }

    // ============ Leaderboards ============

    pub async fn user_leaderboard(&self) -> ApiResult<Vec<UserLeaderboardEntry>> {
        self.fetch(Endpoint::UserLeaderboard).await
    }

    pub async fn team_leaderboard(&self) -> ApiResult<Vec<TeamLeaderboardEntry>> {
        self.fetch(Endpoint::TeamLeaderboard).await
    }

    // ============ Workouts ============

    pub async fn workout_suggestions(&self) -> ApiResult<Vec<WorkoutSuggestion>> {
        self.fetch(Endpoint::WorkoutSuggestions).await
    }

    pub async fn generate_suggestions(&self) -> ApiResult<Vec<WorkoutSuggestion>> {
        self.fetch(Endpoint::GenerateSuggestions).await
    }

    pub async fn complete_suggestion(&self, id: u64) -> ApiResult<Detail> {
        self.fetch(Endpoint::CompleteSuggestion(id)).await
    }
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> ApiResult<R> {
    if !response.ok() {
        return Err(ApiError::from_response(response));
    }
    Ok(serde_json::from_str(&response.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::Method;
    use crate::models::{ActivityType, Intensity};
    use crate::session::Session;
    use crate::testing::MockTransport;
    use chrono::NaiveDate;
    use std::cell::Cell;

    fn signed_in() -> SessionContext {
        let session = SessionContext::in_memory();
        session
            .establish(Session {
                token: "abc123".into(),
                user: User {
                    id: 1,
                    username: "john_runner".into(),
                    email: String::new(),
                    first_name: String::new(),
                    last_name: String::new(),
                },
            })
            .unwrap();
        session
    }

    #[tokio::test]
    async fn test_token_header_attached_when_signed_in() {
        let transport = MockTransport::new();
        transport.respond(200, "[]");
        let client = ApiClient::new(transport.clone(), "http://api.test/api/", signed_in());

        client.teams().await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "http://api.test/api/teams/");
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.header("authorization"), Some("Token abc123"));
        assert_eq!(request.header("content-type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_no_token_header_when_signed_out() {
        let transport = MockTransport::new();
        transport.respond(200, "[]");
        let client = ApiClient::new(transport.clone(), "http://api.test/api", SessionContext::in_memory());

        client.user_leaderboard().await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.header("Authorization"), None);
        assert_eq!(request.header("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_call_returns_raw_response_for_any_status() {
        let transport = MockTransport::new();
        transport.respond(500, "boom");
        let client = ApiClient::new(transport, "http://api.test/api", SessionContext::in_memory());

        let response = client.call(Endpoint::Teams, None).await.unwrap();
        assert_eq!(response.status, 500);
        assert_eq!(response.body, "boom");
    }

    #[tokio::test]
    async fn test_unauthorized_handlers_run_on_401() {
        let transport = MockTransport::new();
        transport.respond(401, r#"{"detail": "Invalid token."}"#);
        let session = signed_in();
        let client = ApiClient::new(transport, "http://api.test/api", session.clone());

        let fired = Rc::new(Cell::new(0));
        {
            let fired = fired.clone();
            let session = session.clone();
            client.on_unauthorized(move || {
                session.clear();
                fired.set(fired.get() + 1);
            });
        }

        let err = client.my_profile().await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
        assert_eq!(fired.get(), 1);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_transport_failure_skips_handlers() {
        let transport = MockTransport::new();
        transport.fail("connection refused");
        let client = ApiClient::new(transport, "http://api.test/api", signed_in());
        let fired = Rc::new(Cell::new(false));
        {
            let fired = fired.clone();
            client.on_unauthorized(move || fired.set(true));
        }

        let err = client.teams().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(!fired.get());
    }

    #[tokio::test]
    async fn test_create_activity_body() {
        let transport = MockTransport::new();
        transport.respond(
            201,
            r#"{"id": 9, "activity_type": "cycling", "duration": 45, "distance": 15.5,
                "intensity": "high", "points_earned": 90, "date_performed": "2024-05-02"}"#,
        );
        let client = ApiClient::new(transport.clone(), "http://api.test/api", signed_in());

        let created = client
            .create_activity(&NewActivity {
                activity_type: ActivityType::Cycling,
                duration: 45,
                distance: Some(15.5),
                intensity: Intensity::High,
                date_performed: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                notes: String::new(),
            })
            .await
            .unwrap();
        assert_eq!(created.points_earned, 90);

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["activity_type"], "cycling");
        assert_eq!(body["intensity"], "high");
        assert_eq!(body["date_performed"], "2024-05-02");
        assert_eq!(body["duration"], 45);
    }

    #[tokio::test]
    async fn test_rejection_keeps_payload() {
        let transport = MockTransport::new();
        transport.respond(
            400,
            r#"{"detail": "Team creator cannot leave the team. Delete the team instead."}"#,
        );
        let client = ApiClient::new(transport.clone(), "http://api.test/api", signed_in());

        let err = client.leave_team(3).await.unwrap_err();
        assert_eq!(
            err.user_message(),
            "Team creator cannot leave the team. Delete the team instead."
        );
        assert_eq!(
            transport.last_request().unwrap().url,
            "http://api.test/api/teams/3/leave/"
        );
    }

    #[tokio::test]
    async fn test_current_user_with_explicit_token() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"pk": 1, "username": "john_runner"}"#);
        let client = ApiClient::new(transport.clone(), "http://api.test/api", SessionContext::in_memory());

        let user = client.current_user_with_token("fresh").await.unwrap();
        assert_eq!(user.username, "john_runner");
        assert_eq!(
            transport.last_request().unwrap().header("Authorization"),
            Some("Token fresh")
        );
    }

    #[tokio::test]
    async fn test_logout_tolerates_empty_body() {
        let transport = MockTransport::new();
        transport.respond(200, "");
        let client = ApiClient::new(transport, "http://api.test/api", signed_in());
        assert_eq!(client.logout().await.unwrap(), Detail::default());
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let transport = MockTransport::new();
        transport.respond(200, "<html>");
        let client = ApiClient::new(transport, "http://api.test/api", signed_in());
        let err = client.teams().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
