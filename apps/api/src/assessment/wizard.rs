//! Assessment wizard — the step state machine behind the multi-step form.
//!
//! Phases: `Editing` → (`submit` on the final step) → `Submitting` → `Complete`.
//! A failed generation drops back to `Editing` on the same step with answers intact.
//!
//! Submission is split in two halves (`begin_submit` / `finish_submit`) so a host
//! can run the generator without holding a lock on the wizard. Each submission
//! carries an id and a cancellation token; a result for a superseded id is discarded.

use serde::Serialize;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::assessment::steps::{progress_percent, StepDefinition, STEPS, STEP_COUNT};
use crate::errors::AppError;
use crate::generation::generator::RecommendationGenerator;
use crate::models::answers::{toggle_membership, AnswerRecord, Aptitude, TextField, SLIDER_MAX};
use crate::models::recommendation::RecommendationResult;
use crate::notify::{Notification, Notifier};

/// Invoked once with the generator output when the wizard completes.
pub type CompletionHandler = Box<dyn Fn(&RecommendationResult) + Send + Sync>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Step {index} is out of range (expected 0..{count})")]
    StepOutOfRange { index: usize, count: usize },

    #[error("Submit is only available on the final step (currently on step {index})")]
    NotOnFinalStep { index: usize },

    #[error("{aptitude:?} must be between 0 and 100, got {value}")]
    SliderOutOfRange { aptitude: Aptitude, value: u8 },

    #[error("Option value cannot be empty")]
    EmptyOption,

    #[error("A submission is already in progress")]
    Busy,

    #[error("The assessment is already complete")]
    AlreadyComplete,

    #[error("Submission is no longer current; result discarded")]
    StaleSubmission,

    #[error("Failed to generate recommendations: {0}")]
    GenerationFailed(String),

    #[error("Submission was cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Editing,
    Submitting,
    Complete,
}

enum Phase {
    Editing,
    Submitting {
        submission_id: u64,
        token: CancellationToken,
    },
    Complete(Box<RecommendationResult>),
}

/// Snapshot handed to whoever runs the generator for a submission.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub id: u64,
    pub answers: AnswerRecord,
    pub token: CancellationToken,
}

pub struct AssessmentWizard {
    current_step: usize,
    answers: AnswerRecord,
    phase: Phase,
    next_submission_id: u64,
    on_complete: CompletionHandler,
}

impl AssessmentWizard {
    /// Creates a wizard positioned at `initial_step` (default 0).
    /// An out-of-range initial step is rejected rather than clamped.
    pub fn new<F>(initial_step: Option<usize>, on_complete: F) -> Result<Self, WizardError>
    where
        F: Fn(&RecommendationResult) + Send + Sync + 'static,
    {
        let current_step = initial_step.unwrap_or(0);
        if current_step >= STEP_COUNT {
            return Err(WizardError::StepOutOfRange {
                index: current_step,
                count: STEP_COUNT,
            });
        }

        Ok(Self {
            current_step,
            answers: AnswerRecord::with_neutral_sliders(),
            phase: Phase::Editing,
            next_submission_id: 1,
            on_complete: Box::new(on_complete),
        })
    }

    // ── Views ──────────────────────────────────────────────────────────────

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step(&self) -> &'static StepDefinition {
        &STEPS[self.current_step]
    }

    pub fn step_count(&self) -> usize {
        STEP_COUNT
    }

    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.current_step)
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == STEP_COUNT - 1
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn phase(&self) -> PhaseKind {
        match self.phase {
            Phase::Editing => PhaseKind::Editing,
            Phase::Submitting { .. } => PhaseKind::Submitting,
            Phase::Complete(_) => PhaseKind::Complete,
        }
    }

    /// Generator output once the wizard is complete.
    pub fn result(&self) -> Option<&RecommendationResult> {
        match &self.phase {
            Phase::Complete(result) => Some(result.as_ref()),
            _ => None,
        }
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.phase, Phase::Editing) && self.is_last_step()
    }

    // ── Navigation ─────────────────────────────────────────────────────────

    /// Advances one step. A no-op on the final step. Returns the resulting index.
    pub fn next(&mut self) -> Result<usize, WizardError> {
        self.ensure_editing()?;
        if self.current_step < STEP_COUNT - 1 {
            self.current_step += 1;
            debug!("Wizard advanced to step {}", self.current_step);
        }
        Ok(self.current_step)
    }

    /// Goes back one step. A no-op on the first step. Returns the resulting index.
    pub fn prev(&mut self) -> Result<usize, WizardError> {
        self.ensure_editing()?;
        if self.current_step > 0 {
            self.current_step -= 1;
            debug!("Wizard moved back to step {}", self.current_step);
        }
        Ok(self.current_step)
    }

    // ── Field edits ────────────────────────────────────────────────────────

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_editing()?;
        *self.answers.text_mut(field) = value.into();
        Ok(())
    }

    pub fn set_aptitude(&mut self, aptitude: Aptitude, value: u8) -> Result<(), WizardError> {
        self.ensure_editing()?;
        if value > SLIDER_MAX {
            return Err(WizardError::SliderOutOfRange { aptitude, value });
        }
        *self.answers.slider_mut(aptitude) = Some(value);
        Ok(())
    }

    /// Adds or removes an interest. Returns whether it is selected afterwards.
    pub fn toggle_interest(&mut self, value: &str) -> Result<bool, WizardError> {
        self.ensure_editing()?;
        let value = non_empty(value)?;
        Ok(toggle_membership(&mut self.answers.interests, value))
    }

    /// Adds or removes a strength. Returns whether it is selected afterwards.
    pub fn toggle_strength(&mut self, value: &str) -> Result<bool, WizardError> {
        self.ensure_editing()?;
        let value = non_empty(value)?;
        Ok(toggle_membership(&mut self.answers.strengths, value))
    }

    // ── Submission ─────────────────────────────────────────────────────────

    /// Enters `Submitting` and returns the answer snapshot to generate from.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, WizardError> {
        self.ensure_editing()?;
        if !self.is_last_step() {
            return Err(WizardError::NotOnFinalStep {
                index: self.current_step,
            });
        }

        let id = self.next_submission_id;
        self.next_submission_id += 1;
        let token = CancellationToken::new();
        self.phase = Phase::Submitting {
            submission_id: id,
            token: token.clone(),
        };
        info!("Assessment submission {id} started");

        Ok(PendingSubmission {
            id,
            answers: self.answers.clone(),
            token,
        })
    }

    /// Applies the generator outcome for submission `id`.
    ///
    /// Success moves to `Complete`, runs the completion handler and notifies.
    /// Failure returns to `Editing` on the same step and emits a destructive notification.
    pub fn finish_submit(
        &mut self,
        id: u64,
        outcome: Result<RecommendationResult, AppError>,
        notifier: &dyn Notifier,
    ) -> Result<&RecommendationResult, WizardError> {
        match &self.phase {
            Phase::Submitting { submission_id, .. } if *submission_id == id => {}
            _ => {
                debug!("Discarding outcome of stale submission {id}");
                return Err(WizardError::StaleSubmission);
            }
        }

        match outcome {
            Ok(result) => {
                info!(
                    "Assessment submission {id} complete with {} recommendations",
                    result.recommendations.len()
                );
                (self.on_complete)(&result);
                self.phase = Phase::Complete(Box::new(result));
                notifier.notify(Notification::info(
                    "Assessment Complete!",
                    "Your career recommendations are ready.",
                ));
                self.result().ok_or(WizardError::StaleSubmission)
            }
            Err(err) => {
                warn!("Assessment submission {id} failed: {err}");
                self.phase = Phase::Editing;
                notifier.notify(Notification::destructive(
                    "Error",
                    "Failed to generate recommendations. Please try again.",
                ));
                Err(WizardError::GenerationFailed(err.to_string()))
            }
        }
    }

    /// Single-owner convenience: begin, run the generator, finish.
    pub async fn submit(
        &mut self,
        generator: &dyn RecommendationGenerator,
        notifier: &dyn Notifier,
    ) -> Result<&RecommendationResult, WizardError> {
        let pending = self.begin_submit()?;
        let outcome = generator.generate(&pending.answers).await;
        self.finish_submit(pending.id, outcome, notifier)
    }

    /// Aborts an in-flight submission. Its result, if it still arrives, is discarded.
    /// Returns `true` if something was cancelled.
    pub fn cancel(&mut self) -> bool {
        if let Phase::Submitting {
            submission_id,
            token,
        } = &self.phase
        {
            info!("Cancelling assessment submission {submission_id}");
            token.cancel();
            self.phase = Phase::Editing;
            return true;
        }
        false
    }

    fn ensure_editing(&self) -> Result<(), WizardError> {
        match self.phase {
            Phase::Editing => Ok(()),
            Phase::Submitting { .. } => Err(WizardError::Busy),
            Phase::Complete(_) => Err(WizardError::AlreadyComplete),
        }
    }
}

fn non_empty(value: &str) -> Result<&str, WizardError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(WizardError::EmptyOption)
    } else {
        Ok(trimmed)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::generator::CatalogRecommendationGenerator;
    use crate::notify::{NotificationVariant, RecordingNotifier};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    struct FailingGenerator;

    #[async_trait]
    impl RecommendationGenerator for FailingGenerator {
        async fn generate(&self, _answers: &AnswerRecord) -> Result<RecommendationResult, AppError> {
            Err(AppError::GenerationFailed("model offline".to_string()))
        }
    }

    /// Fails the first call, succeeds afterwards.
    struct FlakyGenerator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RecommendationGenerator for FlakyGenerator {
        async fn generate(&self, answers: &AnswerRecord) -> Result<RecommendationResult, AppError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(AppError::GenerationFailed("cold start".to_string()));
            }
            CatalogRecommendationGenerator::new(Duration::ZERO)
                .generate(answers)
                .await
        }
    }

    fn wizard_at(step: usize) -> AssessmentWizard {
        AssessmentWizard::new(Some(step), |_| {}).unwrap()
    }

    #[test]
    fn test_next_increments_until_last_step() {
        for i in 0..STEP_COUNT - 1 {
            let mut wizard = wizard_at(i);
            assert_eq!(wizard.next().unwrap(), i + 1);
        }
        let mut wizard = wizard_at(4);
        assert_eq!(wizard.next().unwrap(), 4);
        assert_eq!(wizard.current_step(), 4);
    }

    #[test]
    fn test_prev_decrements_until_first_step() {
        for i in 1..STEP_COUNT {
            let mut wizard = wizard_at(i);
            assert_eq!(wizard.prev().unwrap(), i - 1);
        }
        let mut wizard = wizard_at(0);
        assert_eq!(wizard.prev().unwrap(), 0);
    }

    #[test]
    fn test_initial_step_out_of_range_is_rejected() {
        let err = AssessmentWizard::new(Some(5), |_| {}).err().unwrap();
        assert_eq!(err, WizardError::StepOutOfRange { index: 5, count: 5 });
    }

    #[test]
    fn test_default_initial_step_is_zero() {
        let wizard = AssessmentWizard::new(None, |_| {}).unwrap();
        assert_eq!(wizard.current_step(), 0);
        assert_eq!(wizard.step().title, "Basic Information");
        assert_eq!(wizard.progress_percent(), 20);
        assert!(wizard.is_first_step());
        assert!(!wizard.can_submit());
    }

    #[test]
    fn test_toggle_interest_twice_restores_set() {
        let mut wizard = wizard_at(1);
        wizard.toggle_interest("Engineering").unwrap();
        let before = wizard.answers().interests.clone();

        assert!(wizard.toggle_interest("Arts & Design").unwrap());
        assert!(!wizard.toggle_interest("Arts & Design").unwrap());
        assert_eq!(wizard.answers().interests, before);
    }

    #[test]
    fn test_toggle_rejects_blank_value() {
        let mut wizard = wizard_at(2);
        assert_eq!(wizard.toggle_strength("   "), Err(WizardError::EmptyOption));
    }

    #[test]
    fn test_slider_overwrite_and_bounds() {
        let mut wizard = wizard_at(3);
        wizard.set_aptitude(Aptitude::Analytical, 0).unwrap();
        assert_eq!(wizard.answers().analytical, Some(0));

        let err = wizard.set_aptitude(Aptitude::Social, 101).unwrap_err();
        assert!(matches!(err, WizardError::SliderOutOfRange { value: 101, .. }));
        assert_eq!(wizard.answers().social, Some(50));
    }

    #[test]
    fn test_text_fields_overwrite() {
        let mut wizard = wizard_at(0);
        wizard.set_text(TextField::Name, "Ada").unwrap();
        wizard.set_text(TextField::Name, "Grace").unwrap();
        wizard.set_text(TextField::FutureGoals, "Teach").unwrap();
        assert_eq!(wizard.answers().name, "Grace");
        assert_eq!(wizard.answers().future_goals, "Teach");
    }

    #[test]
    fn test_submit_requires_final_step() {
        let mut wizard = wizard_at(2);
        assert_eq!(
            wizard.begin_submit().unwrap_err(),
            WizardError::NotOnFinalStep { index: 2 }
        );
        assert_eq!(wizard.phase(), PhaseKind::Editing);
    }

    #[test]
    fn test_navigation_disabled_while_submitting() {
        let mut wizard = wizard_at(4);
        let _pending = wizard.begin_submit().unwrap();

        assert_eq!(wizard.phase(), PhaseKind::Submitting);
        assert_eq!(wizard.prev(), Err(WizardError::Busy));
        assert_eq!(wizard.next(), Err(WizardError::Busy));
        assert_eq!(wizard.toggle_interest("Engineering"), Err(WizardError::Busy));
        assert_eq!(wizard.begin_submit().unwrap_err(), WizardError::Busy);
        assert_eq!(wizard.current_step(), 4);
    }

    #[tokio::test]
    async fn test_successful_submit_completes_and_calls_back() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let mut wizard = AssessmentWizard::new(Some(4), move |result| {
            assert_eq!(result.recommendations.len(), 5);
            seen.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        let notifier = RecordingNotifier::new();
        let generator = CatalogRecommendationGenerator::new(Duration::ZERO);

        let result = wizard.submit(&generator, &notifier).await.unwrap();
        assert_eq!(result.recommendations[0].title, "Data Scientist");

        assert_eq!(wizard.phase(), PhaseKind::Complete);
        assert!(wizard.result().is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let notes = notifier.drain();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Assessment Complete!");
        assert_eq!(wizard.next(), Err(WizardError::AlreadyComplete));
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_step_and_answers() {
        let mut wizard = wizard_at(4);
        wizard.set_text(TextField::Challenges, "Too many options").unwrap();
        let answers_before = wizard.answers().clone();
        let notifier = RecordingNotifier::new();

        let err = wizard.submit(&FailingGenerator, &notifier).await.unwrap_err();
        assert!(matches!(err, WizardError::GenerationFailed(_)));

        assert_eq!(wizard.phase(), PhaseKind::Editing);
        assert_eq!(wizard.current_step(), 4);
        assert_eq!(wizard.answers(), &answers_before);

        let notes = notifier.drain();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].variant, NotificationVariant::Destructive);
        assert_eq!(
            notes[0].description,
            "Failed to generate recommendations. Please try again."
        );
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_succeeds() {
        let mut wizard = wizard_at(4);
        let notifier = RecordingNotifier::new();
        let generator = FlakyGenerator {
            calls: AtomicUsize::new(0),
        };

        assert!(wizard.submit(&generator, &notifier).await.is_err());
        assert!(wizard.submit(&generator, &notifier).await.is_ok());
        assert_eq!(wizard.phase(), PhaseKind::Complete);
    }

    #[tokio::test]
    async fn test_cancel_discards_late_result() {
        let mut wizard = wizard_at(4);
        let notifier = RecordingNotifier::new();
        let pending = wizard.begin_submit().unwrap();

        assert!(wizard.cancel());
        assert!(pending.token.is_cancelled());
        assert_eq!(wizard.phase(), PhaseKind::Editing);

        let late = CatalogRecommendationGenerator::new(Duration::ZERO)
            .generate(&pending.answers)
            .await;
        assert_eq!(
            wizard.finish_submit(pending.id, late, &notifier).unwrap_err(),
            WizardError::StaleSubmission
        );
        assert_eq!(wizard.phase(), PhaseKind::Editing);
        assert!(notifier.drain().is_empty());
        assert!(!wizard.cancel());
    }
}
