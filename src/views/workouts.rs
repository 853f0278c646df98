//! Workout suggestions.

use crate::api::{ApiClient, ApiResult, Transport};
use crate::models::WorkoutSuggestion;

pub const EMPTY_MESSAGE: &str = "No workout suggestions yet. Click \"Generate Suggestions\" to get \
personalized workout recommendations based on your fitness level!";

pub async fn load_suggestions<T: Transport>(
    client: &ApiClient<T>,
) -> ApiResult<Vec<WorkoutSuggestion>> {
    client.workout_suggestions().await
}

/// Ask the server for new suggestions; returns how many were created
pub async fn generate<T: Transport>(client: &ApiClient<T>) -> ApiResult<usize> {
    let created = client.generate_suggestions().await?;
    tracing::info!(count = created.len(), "Workout suggestions generated");
    Ok(created.len())
}

pub async fn mark_completed<T: Transport>(client: &ApiClient<T>, id: u64) -> ApiResult<()> {
    client.complete_suggestion(id).await?;
    tracing::info!(id, "Workout marked as completed");
    Ok(())
}

/// Detail lines shown on a suggestion card
pub fn summary(suggestion: &WorkoutSuggestion) -> [(&'static str, String); 4] {
    [
        ("Type", suggestion.activity_type.display_name()),
        ("Duration", format!("{} min", suggestion.recommended_duration)),
        ("Intensity", suggestion.recommended_intensity.label().to_string()),
        ("Level", suggestion.fitness_level.label().to_string()),
    ]
}
