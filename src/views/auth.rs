//! Login, registration and logout flows.

use thiserror::Error;

use super::FormError;
use crate::api::dto::{LoginRequest, RegistrationRequest};
use crate::api::{ApiClient, ApiError, Transport};
use crate::models::User;
use crate::session::{Session, StorageError};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FormError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(FormError::Required("Username"));
        }
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        Ok(LoginRequest {
            username: username.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<RegistrationRequest, FormError> {
        let username = self.username.trim();
        let email = self.email.trim();
        if username.is_empty() {
            return Err(FormError::Required("Username"));
        }
        if email.is_empty() {
            return Err(FormError::Required("Email"));
        }
        if !email.contains('@') {
            return Err(FormError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        if self.confirm_password.is_empty() {
            return Err(FormError::Required("Confirm Password"));
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(RegistrationRequest {
            username: username.to_string(),
            email: email.to_string(),
            password1: self.password.clone(),
            password2: self.confirm_password.clone(),
        })
    }
}

/// Failure of a login or registration attempt; `Display` is the inline text
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Raw server payload for a rejected registration
    #[error("{0}")]
    Rejected(String),

    #[error("Login failed. Please try again.")]
    LoginFailed,

    #[error("Registration failed. Please try again.")]
    RegistrationFailed,

    #[error("Could not save session: {0}")]
    Storage(#[from] StorageError),
}

/// Exchange credentials for a token and establish the session.
///
/// Storage is only written once both the token and the user are known.
pub async fn login<T: Transport>(client: &ApiClient<T>, form: &LoginForm) -> Result<User, AuthError> {
    let request = form.validate()?;
    let token = match client.login(&request).await {
        Ok(token) => token,
        Err(ApiError::Transport(e)) => {
            tracing::error!(error = %e, "Login request failed");
            return Err(AuthError::LoginFailed);
        }
        Err(ApiError::Decode(e)) => {
            tracing::error!(error = %e, "Unreadable login response");
            return Err(AuthError::LoginFailed);
        }
        Err(e) => {
            tracing::warn!(username = %request.username, error = %e, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        }
    };

    establish(client, token.key)
        .await
        .map_err(|e| match e {
            AuthError::Storage(_) => e,
            _ => AuthError::LoginFailed,
        })
}

pub async fn register<T: Transport>(
    client: &ApiClient<T>,
    form: &RegistrationForm,
) -> Result<User, AuthError> {
    let request = form.validate()?;
    let token = match client.register(&request).await {
        Ok(token) => token,
        Err(e) => {
            return Err(match e.raw_payload() {
                Some(payload) => {
                    tracing::warn!(username = %request.username, "Registration rejected");
                    AuthError::Rejected(payload)
                }
                None => {
                    tracing::error!(error = %e, "Registration request failed");
                    AuthError::RegistrationFailed
                }
            });
        }
    };

    establish(client, token.key)
        .await
        .map_err(|e| match e {
            AuthError::Storage(_) => e,
            _ => AuthError::RegistrationFailed,
        })
}

async fn establish<T: Transport>(client: &ApiClient<T>, token: String) -> Result<User, AuthError> {
    let user = client.current_user_with_token(&token).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to fetch user after authentication");
        AuthError::LoginFailed
    })?;

    client.session().establish(Session {
        token,
        user: user.clone(),
    })?;
    Ok(user)
}

/// Invalidate the token server-side (best effort) and clear the session
pub async fn logout<T: Transport>(client: &ApiClient<T>) {
    if client.session().is_authenticated() {
        if let Err(e) = client.logout().await {
            tracing::warn!(error = %e, "Logout request failed");
        }
    }
    client.session().clear();
}
