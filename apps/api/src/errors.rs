use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assessment::wizard::WizardError;
use crate::chat::thread::ThreadBusy;
use crate::chat::ChatError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Recommendation generation failed: {0}")]
    GenerationFailed(String),

    #[error("Chat request failed: {0}")]
    ChatRequestFailed(#[from] ChatError),

    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code carried in the JSON error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Conflict(_) => "CONFLICT",
            AppError::GenerationFailed(_) => "GENERATION_FAILED",
            AppError::ChatRequestFailed(_) => "CHAT_REQUEST_FAILED",
            AppError::Cancelled(_) => "CANCELLED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<WizardError> for AppError {
    fn from(err: WizardError) -> Self {
        match err {
            WizardError::StepOutOfRange { .. }
            | WizardError::NotOnFinalStep { .. }
            | WizardError::SliderOutOfRange { .. }
            | WizardError::EmptyOption => AppError::Validation(err.to_string()),
            WizardError::Busy | WizardError::AlreadyComplete | WizardError::StaleSubmission => {
                AppError::Conflict(err.to_string())
            }
            WizardError::GenerationFailed(msg) => AppError::GenerationFailed(msg),
            WizardError::Cancelled => AppError::Cancelled(err.to_string()),
        }
    }
}

impl From<ThreadBusy> for AppError {
    fn from(err: ThreadBusy) -> Self {
        AppError::Conflict(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::GenerationFailed(msg) => {
                tracing::error!("Generation error: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Failed to generate recommendations. Please try again.".to_string(),
                )
            }
            AppError::ChatRequestFailed(e) => {
                tracing::error!("Chat error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "The chat assistant is unavailable".to_string(),
                )
            }
            AppError::Cancelled(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_wizard_maps_to_conflict() {
        let err: AppError = WizardError::Busy.into();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_step_out_of_range_maps_to_bad_request() {
        let err: AppError = WizardError::StepOutOfRange { index: 9, count: 5 }.into();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_generation_failure_keeps_its_kind() {
        let err: AppError = WizardError::GenerationFailed("model offline".to_string()).into();
        assert_eq!(err.code(), "GENERATION_FAILED");
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
