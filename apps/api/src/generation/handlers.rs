//! Axum route handlers for the stateless Recommendations API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::answers::{AnswerRecord, Aptitude, SLIDER_MAX};
use crate::models::recommendation::RecommendationResult;
use crate::state::AppState;

/// POST /api/v1/recommendations
///
/// Runs the configured generator on a complete answer record without a wizard session.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(mut answers): Json<AnswerRecord>,
) -> Result<Json<RecommendationResult>, AppError> {
    if let Some(aptitude) = Aptitude::ALL
        .into_iter()
        .find(|a| answers.slider(*a).is_some_and(|v| v > SLIDER_MAX))
    {
        return Err(AppError::Validation(format!(
            "{aptitude:?} must be between 0 and {SLIDER_MAX}"
        )));
    }

    answers.dedupe_selections();
    let result = state.generator.generate(&answers).await?;
    Ok(Json(result))
}
