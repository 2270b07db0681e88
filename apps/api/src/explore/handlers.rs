//! Axum route handlers for career exploration.

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;

use crate::explore::categories::{
    category_or_default, search_careers, CareerCategory, CareerSearchHit, TrendingCareer,
    CAREER_CATEGORIES, TRENDING_CAREERS,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/v1/careers/categories
pub async fn handle_list_categories() -> Json<&'static [CareerCategory]> {
    Json(CAREER_CATEGORIES)
}

/// GET /api/v1/careers/categories/:id
///
/// Unknown ids resolve to the first category rather than 404.
pub async fn handle_get_category(Path(id): Path<String>) -> Json<&'static CareerCategory> {
    Json(category_or_default(&id))
}

/// GET /api/v1/careers/trending
pub async fn handle_trending() -> Json<&'static [TrendingCareer]> {
    Json(TRENDING_CAREERS)
}

/// GET /api/v1/careers/search?q=
pub async fn handle_search(Query(query): Query<SearchQuery>) -> Json<Vec<CareerSearchHit>> {
    Json(search_careers(&query.q))
}
