//! Activity log: list, create form and points preview.

use chrono::NaiveDate;

use super::{FormError, SubmitError};
use crate::api::dto::NewActivity;
use crate::api::{ApiClient, ApiResult, Transport};
use crate::models::{Activity, ActivityType, Intensity};

/// Raw form input, as typed by the user
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityForm {
    pub activity_type: ActivityType,
    pub duration: String,
    pub distance: String,
    pub intensity: Intensity,
    pub date_performed: String,
    pub notes: String,
}

impl ActivityForm {
    /// Running, moderate, performed `today`, everything else blank
    pub fn default_for(today: NaiveDate) -> Self {
        Self {
            activity_type: ActivityType::Running,
            duration: String::new(),
            distance: String::new(),
            intensity: Intensity::Moderate,
            date_performed: today.format("%Y-%m-%d").to_string(),
            notes: String::new(),
        }
    }

    fn duration_minutes(&self) -> Option<u32> {
        self.duration.trim().parse::<u32>().ok().filter(|d| *d > 0)
    }

    pub fn validate(&self) -> Result<NewActivity, FormError> {
        if self.duration.trim().is_empty() {
            return Err(FormError::Required("Duration"));
        }
        let duration = self.duration_minutes().ok_or(FormError::InvalidDuration)?;

        let distance = match self.distance.trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(d) if d.is_finite() && d >= 0.0 => Some(d),
                _ => return Err(FormError::InvalidDistance),
            },
        };

        let date = self.date_performed.trim();
        if date.is_empty() {
            return Err(FormError::Required("Date"));
        }
        let date_performed =
            NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| FormError::InvalidDate)?;

        Ok(NewActivity {
            activity_type: self.activity_type,
            duration,
            distance,
            intensity: self.intensity,
            date_performed,
            notes: self.notes.trim().to_string(),
        })
    }

    /// Points the server will award, if the duration is valid
    pub fn estimated_points(&self) -> Option<i64> {
        self.duration_minutes()
            .map(|d| estimate_points(d, self.intensity))
    }
}

/// Duration times the intensity multiplier, truncated
pub fn estimate_points(duration: u32, intensity: Intensity) -> i64 {
    (duration as f64 * intensity.points_multiplier()) as i64
}

pub async fn load_activities<T: Transport>(client: &ApiClient<T>) -> ApiResult<Vec<Activity>> {
    client.my_activities().await
}

/// Validate and create; nothing is sent if validation fails
pub async fn submit_activity<T: Transport>(
    client: &ApiClient<T>,
    form: &ActivityForm,
) -> Result<Activity, SubmitError> {
    let activity = form.validate()?;
    let created = client.create_activity(&activity).await?;
    tracing::info!(
        id = created.id,
        activity_type = created.activity_type.as_str(),
        points = created.points_earned,
        "Activity logged"
    );
    Ok(created)
}
