//! Recommendation generation — pluggable, trait-based generator that maps an
//! `AnswerRecord` to ranked career recommendations plus a derived profile.
//!
//! Default: `CatalogRecommendationGenerator` (fixed table, simulated latency).
//! A model-backed generator must keep the same output shape and sort order.
//!
//! `AppState` holds an `Arc<dyn RecommendationGenerator>`, chosen at startup.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::generation::catalog::{career_catalog, FALLBACK_INTERESTS, FALLBACK_STRENGTHS};
use crate::models::answers::{AnswerRecord, Aptitude};
use crate::models::recommendation::{
    AptitudeScore, RecommendationRecord, RecommendationResult, UserProfile,
};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap the recommendation backend without touching the
/// wizard, handlers, or callers. Failures surface as `AppError::GenerationFailed`.
#[async_trait]
pub trait RecommendationGenerator: Send + Sync {
    async fn generate(&self, answers: &AnswerRecord) -> Result<RecommendationResult, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// CatalogRecommendationGenerator — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Returns the fixed catalog after a simulated latency. Never fails.
#[derive(Debug, Clone)]
pub struct CatalogRecommendationGenerator {
    latency: Duration,
}

impl CatalogRecommendationGenerator {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for CatalogRecommendationGenerator {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

#[async_trait]
impl RecommendationGenerator for CatalogRecommendationGenerator {
    async fn generate(&self, answers: &AnswerRecord) -> Result<RecommendationResult, AppError> {
        debug!("Simulating generation latency of {}ms", self.latency.as_millis());
        tokio::time::sleep(self.latency).await;

        let recommendations = rank_recommendations(career_catalog());
        let user_profile = build_user_profile(answers);

        info!(
            "Generated {} recommendations (top: {})",
            recommendations.len(),
            recommendations
                .first()
                .map(|r| r.title.as_str())
                .unwrap_or("none")
        );

        Ok(RecommendationResult {
            recommendations,
            user_profile,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking and profile derivation
// ────────────────────────────────────────────────────────────────────────────

/// Sorts descending by match score. `sort_by` is stable, so ties keep input order.
pub fn rank_recommendations(mut records: Vec<RecommendationRecord>) -> Vec<RecommendationRecord> {
    records.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    records
}

/// Builds the profile shown next to the recommendations.
///
/// Empty interest/strength lists fall back to fixed lists. An unset slider falls
/// back to its aptitude default; an explicit 0 is kept as 0.
pub fn build_user_profile(answers: &AnswerRecord) -> UserProfile {
    let strengths = or_fallback(&answers.strengths, FALLBACK_STRENGTHS);
    let interests = or_fallback(&answers.interests, FALLBACK_INTERESTS);

    let aptitudes = Aptitude::ALL
        .iter()
        .map(|&aptitude| AptitudeScore {
            name: aptitude.label().to_string(),
            score: answers
                .slider(aptitude)
                .unwrap_or_else(|| aptitude.fallback_score()),
        })
        .collect();

    UserProfile {
        strengths,
        interests,
        aptitudes,
    }
}

fn or_fallback(values: &[String], fallback: &[&str]) -> Vec<String> {
    if values.is_empty() {
        fallback.iter().map(|s| s.to_string()).collect()
    } else {
        values.to_vec()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
