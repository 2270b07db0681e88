//! Axum route handlers for the Assessment API.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::assessment::session::{submit_session, AssessmentSession, AssessmentView};
use crate::assessment::steps::{StepDefinition, INTEREST_OPTIONS, STEPS, STRENGTH_OPTIONS};
use crate::errors::AppError;
use crate::models::answers::{Aptitude, TextField, SLIDER_MAX};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssessmentRequest {
    pub initial_step: Option<usize>,
}

/// Partial overwrite of answer fields. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateAnswersRequest {
    pub name: Option<String>,
    pub age: Option<String>,
    pub education: Option<String>,
    pub skills: Option<String>,
    pub challenges: Option<String>,
    pub future_goals: Option<String>,
    pub analytical: Option<u8>,
    pub creative: Option<u8>,
    pub social: Option<u8>,
    pub practical: Option<u8>,
    pub leadership: Option<u8>,
    pub technology: Option<u8>,
}

impl UpdateAnswersRequest {
    fn into_updates(self) -> (Vec<(TextField, String)>, Vec<(Aptitude, u8)>) {
        let texts = [
            (TextField::Name, self.name),
            (TextField::Age, self.age),
            (TextField::Education, self.education),
            (TextField::Skills, self.skills),
            (TextField::Challenges, self.challenges),
            (TextField::FutureGoals, self.future_goals),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect();

        let sliders = [
            (Aptitude::Analytical, self.analytical),
            (Aptitude::Creative, self.creative),
            (Aptitude::Social, self.social),
            (Aptitude::Practical, self.practical),
            (Aptitude::Leadership, self.leadership),
            (Aptitude::Technology, self.technology),
        ]
        .into_iter()
        .filter_map(|(aptitude, value)| value.map(|v| (aptitude, v)))
        .collect();

        (texts, sliders)
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentOptionsResponse {
    pub steps: &'static [StepDefinition],
    pub interest_options: &'static [&'static str],
    pub strength_options: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/assessments/options
pub async fn handle_options() -> Json<AssessmentOptionsResponse> {
    Json(AssessmentOptionsResponse {
        steps: &STEPS,
        interest_options: INTEREST_OPTIONS,
        strength_options: STRENGTH_OPTIONS,
    })
}

/// POST /api/v1/assessments
///
/// Starts a wizard session. The body is optional; `initialStep` must be within 0..5.
/// A body that is present but malformed is rejected rather than defaulted.
pub async fn handle_create(
    State(state): State<AppState>,
    body: Result<Json<CreateAssessmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AssessmentView>), AppError> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => CreateAssessmentRequest::default(),
        Err(rejection) => return Err(AppError::Validation(rejection.body_text())),
    };
    let session = AssessmentSession::new(request.initial_step)?;
    let id = session.id;
    let view = session.view();

    state.assessments.insert(id, session).await;
    info!("Created assessment {id} at step {}", view.current_step);

    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/assessments/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentView>, AppError> {
    let session = find_session(&state, id).await?;
    let view = session.lock().await.view();
    Ok(Json(view))
}

/// DELETE /api/v1/assessments/:id
///
/// Cancels any in-flight submission and drops the session.
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let session = state
        .assessments
        .remove(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Assessment {id} not found")))?;

    if session.lock().await.wizard.cancel() {
        info!("Assessment {id} deleted mid-submission");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/assessments/:id/answers
///
/// Applies all edits or none: sliders are validated before anything is written.
pub async fn handle_update_answers(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAnswersRequest>,
) -> Result<Json<AssessmentView>, AppError> {
    let session = find_session(&state, id).await?;
    let mut guard = session.lock().await;

    let (texts, sliders) = request.into_updates();
    if let Some((aptitude, value)) = sliders
        .iter()
        .find(|(_, v)| *v > SLIDER_MAX)
    {
        return Err(AppError::Validation(format!(
            "{aptitude:?} must be between 0 and {SLIDER_MAX}, got {value}"
        )));
    }

    for (field, value) in texts {
        guard.wizard.set_text(field, value)?;
    }
    for (aptitude, value) in sliders {
        guard.wizard.set_aptitude(aptitude, value)?;
    }

    Ok(Json(guard.view()))
}

/// POST /api/v1/assessments/:id/interests/toggle
pub async fn handle_toggle_interest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<AssessmentView>, AppError> {
    let session = find_session(&state, id).await?;
    let mut guard = session.lock().await;
    guard.wizard.toggle_interest(&request.value)?;
    Ok(Json(guard.view()))
}

/// POST /api/v1/assessments/:id/strengths/toggle
pub async fn handle_toggle_strength(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<AssessmentView>, AppError> {
    let session = find_session(&state, id).await?;
    let mut guard = session.lock().await;
    guard.wizard.toggle_strength(&request.value)?;
    Ok(Json(guard.view()))
}

/// POST /api/v1/assessments/:id/next
pub async fn handle_next(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentView>, AppError> {
    let session = find_session(&state, id).await?;
    let mut guard = session.lock().await;
    guard.wizard.next()?;
    Ok(Json(guard.view()))
}

/// POST /api/v1/assessments/:id/prev
pub async fn handle_prev(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentView>, AppError> {
    let session = find_session(&state, id).await?;
    let mut guard = session.lock().await;
    guard.wizard.prev()?;
    Ok(Json(guard.view()))
}

/// POST /api/v1/assessments/:id/submit
///
/// Generates recommendations from the session's answers. Only valid on the final step.
/// On failure the session stays on the final step and can be resubmitted.
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentView>, AppError> {
    let session = find_session(&state, id).await?;
    let view = submit_session(session, state.generator.clone(), state.notifier.clone()).await?;
    Ok(Json(view))
}

async fn find_session(
    state: &AppState,
    id: Uuid,
) -> Result<Arc<Mutex<AssessmentSession>>, AppError> {
    state
        .assessments
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Assessment {id} not found")))
}
