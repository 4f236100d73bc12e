//! HTTP API payload DTOs.

use serde::{Deserialize, Serialize};

use super::websocket::StrokeDto;

/// One room in the session-picker listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummaryDto {
    pub room_id: String,
    pub name: Option<String>,
    /// RFC 3339, UTC.
    pub created_at: String,
    pub updated_at: String,
}

/// A room record plus its full ordered stroke history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetailDto {
    pub room_id: String,
    pub name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub strokes: Vec<StrokeDto>,
}

/// Body of `POST /api/sessions/save`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSessionRequest {
    pub room_id: String,
    #[serde(default)]
    pub name: Option<String>,
}
