pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::chat::handlers as chat;
use crate::explore::handlers as explore;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendations API
        .route("/api/v1/recommendations", post(generation::handle_generate))
        // Assessment API
        .route("/api/v1/assessments", post(assessment::handle_create))
        .route("/api/v1/assessments/options", get(assessment::handle_options))
        .route(
            "/api/v1/assessments/:id",
            get(assessment::handle_get).delete(assessment::handle_delete),
        )
        .route(
            "/api/v1/assessments/:id/answers",
            patch(assessment::handle_update_answers),
        )
        .route(
            "/api/v1/assessments/:id/interests/toggle",
            post(assessment::handle_toggle_interest),
        )
        .route(
            "/api/v1/assessments/:id/strengths/toggle",
            post(assessment::handle_toggle_strength),
        )
        .route("/api/v1/assessments/:id/next", post(assessment::handle_next))
        .route("/api/v1/assessments/:id/prev", post(assessment::handle_prev))
        .route("/api/v1/assessments/:id/submit", post(assessment::handle_submit))
        // Explore API
        .route("/api/v1/careers/categories", get(explore::handle_list_categories))
        .route(
            "/api/v1/careers/categories/:id",
            get(explore::handle_get_category),
        )
        .route("/api/v1/careers/trending", get(explore::handle_trending))
        .route("/api/v1/careers/search", get(explore::handle_search))
        // Chat relay
        .route("/api/v1/chat/threads", post(chat::handle_create_thread))
        .route(
            "/api/v1/chat/threads/:id",
            get(chat::handle_get_thread).delete(chat::handle_delete_thread),
        )
        .route(
            "/api/v1/chat/threads/:id/messages",
            post(chat::handle_send_message),
        )
        .with_state(state)
}
