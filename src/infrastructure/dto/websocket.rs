//! WebSocket frame DTOs.
//!
//! Every frame carries a `type` discriminator. Inbound frames name the room
//! the client believes it is in; the server's registry binding stays
//! authoritative for routing.

use serde::{Deserialize, Serialize};

/// Frame type discriminator for outbound frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    #[serde(rename = "roomUsers")]
    RoomUsers,
    #[serde(rename = "draw")]
    Draw,
    #[serde(rename = "clear")]
    Clear,
    #[serde(rename = "loadWhiteboard")]
    LoadWhiteboard,
    #[serde(rename = "error")]
    Error,
}

/// Frames accepted from clients, dispatched on the `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    #[serde(rename = "joinRoom", rename_all = "camelCase")]
    JoinRoom { room_id: String },
    #[serde(rename = "draw", rename_all = "camelCase")]
    Draw {
        room_id: String,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        color: String,
        width: f64,
        #[serde(default)]
        timestamp: Option<i64>,
    },
    #[serde(rename = "clear", rename_all = "camelCase")]
    Clear { room_id: String },
}

/// One persisted segment on the wire, flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeDto {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub color: String,
    pub width: f64,
    pub timestamp: i64,
}

/// Membership count update, delivered to an entire room.
#[derive(Debug, Clone, Serialize)]
pub struct RoomUsersMessage {
    pub r#type: MessageType,
    pub count: usize,
}

/// A peer's segment, delivered to everyone in the room but the sender.
#[derive(Debug, Clone, Serialize)]
pub struct DrawMessage {
    pub r#type: MessageType,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub color: String,
    pub width: f64,
    pub timestamp: i64,
}

/// A peer's canvas reset, delivered to everyone in the room but the sender.
#[derive(Debug, Clone, Serialize)]
pub struct ClearMessage {
    pub r#type: MessageType,
}

/// Replayed history, delivered privately to a session right after it joins.
#[derive(Debug, Clone, Serialize)]
pub struct LoadWhiteboardMessage {
    pub r#type: MessageType,
    pub strokes: Vec<StrokeDto>,
}

/// Rejection of a malformed or invalid-state frame, to the sender only.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    pub r#type: MessageType,
    pub message: String,
}
