//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::RoomId,
    infrastructure::dto::http::{SaveSessionRequest, SessionDetailDto, SessionSummaryDto},
    ui::state::AppState,
    usecase::GetSessionError,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// List saved sessions, most recently active first
pub async fn list_sessions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SessionSummaryDto>>, StatusCode> {
    match state.list_sessions_usecase.execute().await {
        Ok(rooms) => Ok(Json(rooms.iter().map(SessionSummaryDto::from).collect())),
        Err(e) => {
            tracing::error!("Failed to list sessions: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Save a session under an optional display name
pub async fn save_session(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SaveSessionRequest>,
) -> Result<Json<SessionSummaryDto>, StatusCode> {
    let room_id = RoomId::try_from(request.room_id).map_err(|_| StatusCode::BAD_REQUEST)?;

    match state
        .save_session_usecase
        .execute(room_id, request.name)
        .await
    {
        Ok(room) => Ok(Json(SessionSummaryDto::from(&room))),
        Err(e) => {
            tracing::error!("Failed to save session: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Fetch a session record and its full ordered stroke history
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<SessionDetailDto>, StatusCode> {
    let room_id = RoomId::try_from(room_id).map_err(|_| StatusCode::BAD_REQUEST)?;

    match state.get_session_usecase.execute(room_id).await {
        Ok((room, history)) => Ok(Json(SessionDetailDto::from((room, history)))),
        Err(GetSessionError::RoomNotFound) => Err(StatusCode::NOT_FOUND),
        Err(GetSessionError::Repository(e)) => {
            tracing::error!("Failed to fetch session: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
