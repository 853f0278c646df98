//! API Error Types
//!
//! Errors produced by the REST client and their classification into the
//! three failure kinds the UI reacts to.

use thiserror::Error;

use super::transport::{ApiResponse, TransportError};

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered 401
    #[error("Not authorized")]
    Unauthorized,

    /// 4xx other than 401; payload is the server's error body
    #[error("Request rejected ({status}): {payload}")]
    Rejected {
        status: u16,
        payload: serde_json::Value,
    },

    /// 5xx
    #[error("Server error ({status})")]
    Server { status: u16, body: String },

    /// No response at all
    #[error("Network error: {0}")]
    Transport(#[from] TransportError),

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// How the UI should react to a failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Session is gone; handled globally
    Authorization,
    /// Show the server's message next to the form
    Validation,
    /// Log it, show a generic message
    Failure,
}

impl ApiError {
    /// Map a non-success response to an error
    pub fn from_response(response: &ApiResponse) -> Self {
        match response.status {
            401 => ApiError::Unauthorized,
            status @ 400..=499 => ApiError::Rejected {
                status,
                payload: parse_payload(&response.body),
            },
            status => ApiError::Server {
                status,
                body: response.body.clone(),
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Unauthorized => ErrorKind::Authorization,
            ApiError::Rejected { .. } => ErrorKind::Validation,
            ApiError::Server { .. } | ApiError::Transport(_) | ApiError::Decode(_) => {
                ErrorKind::Failure
            }
        }
    }

    /// Server error body exactly as received, for rejected requests
    pub fn raw_payload(&self) -> Option<String> {
        match self {
            ApiError::Rejected { payload, .. } => Some(match payload {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
            _ => None,
        }
    }

    /// Text suitable for an inline error message
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            ApiError::Rejected { payload, .. } => match payload {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Object(map) => match map.get("detail") {
                    Some(serde_json::Value::String(detail)) if map.len() == 1 => detail.clone(),
                    _ => payload.to_string(),
                },
                other => other.to_string(),
            },
            ApiError::Server { .. } | ApiError::Transport(_) | ApiError::Decode(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

fn parse_payload(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.to_string()))
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
