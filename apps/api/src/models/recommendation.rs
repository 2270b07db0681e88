use serde::{Deserialize, Serialize};

/// A course suggested alongside a career recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub provider: String,
    pub url: String,
}

/// One ranked career suggestion.
///
/// Wire names match the frontend contract (`match`, `salary`, `growth`, `education`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRecord {
    pub title: String,
    pub description: String,
    #[serde(rename = "match")]
    pub match_score: u8, // 0 – 100
    #[serde(rename = "salary")]
    pub salary_range: String,
    #[serde(rename = "growth")]
    pub growth_text: String,
    #[serde(rename = "education")]
    pub education_requirement: String,
    pub key_skills: Vec<String>,
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AptitudeScore {
    pub name: String,
    pub score: u8,
}

/// Profile derived from the answers at generation time. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub strengths: Vec<String>,
    pub interests: Vec<String>,
    pub aptitudes: Vec<AptitudeScore>,
}

/// Output of a recommendation generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    /// Sorted descending by `match_score`; ties keep catalog order.
    pub recommendations: Vec<RecommendationRecord>,
    pub user_profile: UserProfile,
}
