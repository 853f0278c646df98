//! Data Transfer Objects
//!
//! Request bodies and auxiliary response shapes. Entity payloads live in
//! [`crate::models`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ActivityType, Intensity};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
}

/// Token issued by login and registration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub key: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewActivity {
    pub activity_type: ActivityType,
    pub duration: u32,
    pub distance: Option<f64>,
    pub intensity: Intensity,
    pub date_performed: NaiveDate,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewTeam {
    pub name: String,
    pub description: String,
}

/// `{"detail": "..."}` acknowledgement
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Detail {
    #[serde(default)]
    pub detail: String,
}
