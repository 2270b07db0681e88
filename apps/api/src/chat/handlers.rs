//! Axum route handlers for the chat relay.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::chat::thread::ChatThread;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

/// POST /api/v1/chat/threads
pub async fn handle_create_thread(
    State(state): State<AppState>,
) -> (StatusCode, Json<ChatThread>) {
    let thread = ChatThread::new();
    let id = thread.id;
    let snapshot = thread.clone();
    state.chat_threads.insert(id, thread).await;
    info!("Created chat thread {id}");
    (StatusCode::CREATED, Json(snapshot))
}

/// GET /api/v1/chat/threads/:id
pub async fn handle_get_thread(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ChatThread>, AppError> {
    let thread = find_thread(&state, id).await?;
    let snapshot = thread.lock().await.clone();
    Ok(Json(snapshot))
}

/// DELETE /api/v1/chat/threads/:id
pub async fn handle_delete_thread(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .chat_threads
        .remove(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Chat thread {id} not found")))?;
    info!("Deleted chat thread {id}");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/chat/threads/:id/messages
///
/// Relays the message upstream and returns the updated thread. Upstream failures
/// are absorbed into a fallback bot message; the request itself still succeeds.
pub async fn handle_send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<ChatThread>, AppError> {
    let thread = find_thread(&state, id).await?;

    let Some(message) = thread.lock().await.begin_send(&request.message)? else {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    };

    // Spawned so a dropped request still clears the loading flag.
    let transport = state.chat.clone();
    let task = tokio::spawn(async move {
        let outcome = transport.send_message(&message).await;
        let mut guard = thread.lock().await;
        guard.finish_send(outcome);
        guard.clone()
    });

    let snapshot = task
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("chat relay task failed: {e}")))?;
    Ok(Json(snapshot))
}

async fn find_thread(state: &AppState, id: Uuid) -> Result<Arc<Mutex<ChatThread>>, AppError> {
    state
        .chat_threads
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Chat thread {id} not found")))
}
