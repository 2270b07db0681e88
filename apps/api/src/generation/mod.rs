// Recommendation generation: fixed catalog, profile derivation, ranking.
// Every caller goes through the `RecommendationGenerator` trait.

pub mod catalog;
pub mod generator;
pub mod handlers;
