//! Server-hosted wizard sessions and the submission driver.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{error, info};
use uuid::Uuid;

use crate::assessment::steps::StepDefinition;
use crate::assessment::wizard::{AssessmentWizard, PendingSubmission, PhaseKind, WizardError};
use crate::errors::AppError;
use crate::generation::generator::RecommendationGenerator;
use crate::models::answers::AnswerRecord;
use crate::models::recommendation::RecommendationResult;
use crate::notify::Notifier;

pub struct AssessmentSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub wizard: AssessmentWizard,
}

impl AssessmentSession {
    pub fn new(initial_step: Option<usize>) -> Result<Self, WizardError> {
        let id = Uuid::new_v4();
        let wizard = AssessmentWizard::new(initial_step, move |result| {
            info!(
                "Assessment {id} completed; top recommendation: {}",
                result
                    .recommendations
                    .first()
                    .map(|r| r.title.as_str())
                    .unwrap_or("none")
            );
        })?;

        Ok(Self {
            id,
            created_at: Utc::now(),
            wizard,
        })
    }

    pub fn view(&self) -> AssessmentView {
        let wizard = &self.wizard;
        AssessmentView {
            id: self.id,
            created_at: self.created_at,
            current_step: wizard.current_step(),
            step_count: wizard.step_count(),
            step: *wizard.step(),
            progress_percent: wizard.progress_percent(),
            phase: wizard.phase(),
            can_go_back: !wizard.is_first_step() && wizard.phase() == PhaseKind::Editing,
            can_submit: wizard.can_submit(),
            answers: wizard.answers().clone(),
            result: wizard.result().cloned(),
        }
    }
}

/// Everything a frontend needs to render the current state of a session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub current_step: usize,
    pub step_count: usize,
    pub step: StepDefinition,
    pub progress_percent: u8,
    pub phase: PhaseKind,
    pub can_go_back: bool,
    pub can_submit: bool,
    pub answers: AnswerRecord,
    pub result: Option<RecommendationResult>,
}

/// Runs the generator for `pending`, resolving early if the submission is cancelled.
pub async fn run_pending(
    pending: &PendingSubmission,
    generator: &dyn RecommendationGenerator,
) -> Result<RecommendationResult, AppError> {
    tokio::select! {
        outcome = generator.generate(&pending.answers) => outcome,
        _ = pending.token.cancelled() => Err(AppError::Cancelled(format!(
            "submission {} was cancelled",
            pending.id
        ))),
    }
}

/// Drives one submission for a shared session.
///
/// The session lock is released while the generator runs. The work is spawned so a
/// dropped request cannot strand the wizard in `Submitting`.
pub async fn submit_session(
    session: Arc<Mutex<AssessmentSession>>,
    generator: Arc<dyn RecommendationGenerator>,
    notifier: Arc<dyn Notifier>,
) -> Result<AssessmentView, AppError> {
    let pending = session.lock().await.wizard.begin_submit()?;
    let submission_id = pending.id;

    let task = tokio::spawn({
        let session = session.clone();
        let notifier = notifier.clone();
        async move {
            let outcome = run_pending(&pending, generator.as_ref()).await;

            // Checked under the lock: a cancel may land while waiting for it.
            let mut guard = session.lock().await;
            if pending.token.is_cancelled() {
                return Err(WizardError::Cancelled);
            }
            guard
                .wizard
                .finish_submit(pending.id, outcome, notifier.as_ref())
                .map(|_| ())?;
            Ok::<_, WizardError>(guard.view())
        }
    });

    match task.await {
        Ok(outcome) => Ok(outcome?),
        Err(e) => {
            error!("Assessment submission {submission_id} task failed: {e}");
            // The task died before finishing; settle it as a failed generation so the
            // wizard drops back to editing.
            let outcome = Err(AppError::GenerationFailed(format!(
                "submission task failed: {e}"
            )));
            let mut guard = session.lock().await;
            let finished = guard
                .wizard
                .finish_submit(submission_id, outcome, notifier.as_ref())
                .map(|_| ());
            match finished {
                Ok(()) => Ok(guard.view()),
                // Only a cancel moves a submission out of `Submitting` without finishing it.
                Err(WizardError::StaleSubmission) => Err(WizardError::Cancelled.into()),
                Err(err) => Err(err.into()),
            }
        }
    }
}
