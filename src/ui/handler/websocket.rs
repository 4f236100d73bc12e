//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    common::time::get_utc_timestamp,
    domain::{RoomId, SegmentEvent, SessionId, StrokeEvent, Timestamp},
    infrastructure::dto::websocket::{
        ClearMessage, ClientMessage, DrawMessage, ErrorMessage, LoadWhiteboardMessage, MessageType,
        RoomUsersMessage,
    },
    ui::state::AppState,
    usecase::PublishError,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that drains the session's channel into its WebSocket sink.
///
/// This is the only place the socket is written to, so deliveries from other
/// sessions' tasks serialize through the channel in arrival order.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    // Every connection gets a fresh server-side identity; there is nothing
    // for a client to collide with.
    let session_id = SessionId::generate();
    let (tx, rx) = mpsc::unbounded_channel();
    state.message_pusher.register_session(session_id, tx).await;
    tracing::info!("Session '{}' connected", session_id);

    let (sender, mut receiver) = socket.split();
    let mut send_task = pusher_loop(rx, sender);

    let recv_state = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_client_message(&recv_state, &session_id, &text).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                }
                Message::Close(_) => {
                    tracing::info!("Session '{}' requested close", session_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Leave the bound room (if any) and tell the remaining members
    if let Some((room_id, count)) = state.disconnect_session_usecase.execute(&session_id).await {
        broadcast_room_users(&state, &room_id, count).await;
        tracing::info!(
            "Session '{}' disconnected from room '{}' ({} remaining)",
            session_id,
            room_id,
            count
        );
    } else {
        tracing::info!("Session '{}' disconnected", session_id);
    }
}

async fn handle_client_message(state: &Arc<AppState>, session_id: &SessionId, text: &str) {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!("Failed to parse frame from '{}': {}", session_id, e);
            send_error(state, session_id, "unrecognized message").await;
            return;
        }
    };

    match message {
        ClientMessage::JoinRoom { room_id } => {
            let room_id = match RoomId::try_from(room_id) {
                Ok(room_id) => room_id,
                Err(e) => {
                    tracing::warn!("Rejected join from '{}': {}", session_id, e);
                    send_error(state, session_id, "invalid room id").await;
                    return;
                }
            };

            let outcome = state
                .join_room_usecase
                .execute(*session_id, room_id.clone())
                .await;
            tracing::info!(
                "Session '{}' joined room '{}' ({} members)",
                session_id,
                room_id,
                outcome.count
            );

            // The departed room (if any) and the joined room each learn
            // their new count, the mover included.
            if let Some((old_room, count)) = outcome.departed {
                broadcast_room_users(state, &old_room, count).await;
            }
            broadcast_room_users(state, &room_id, outcome.count).await;

            // History goes to the joining session only.
            let load_msg = LoadWhiteboardMessage {
                r#type: MessageType::LoadWhiteboard,
                strokes: outcome.history.into_iter().map(Into::into).collect(),
            };
            let load_json = serde_json::to_string(&load_msg).unwrap();
            if let Err(e) = state.message_pusher.push_to(session_id, &load_json).await {
                tracing::warn!("Failed to send history to '{}': {}", session_id, e);
            }
        }
        ClientMessage::Draw {
            room_id: _,
            x0,
            y0,
            x1,
            y1,
            color,
            width,
            timestamp,
        } => {
            // The registry binding decides the room; a segment without a
            // timestamp is stamped on acceptance.
            let segment = SegmentEvent {
                x0,
                y0,
                x1,
                y1,
                color,
                width,
                timestamp: Timestamp::new(timestamp.unwrap_or_else(get_utc_timestamp)),
            };
            let draw_msg = DrawMessage::from(segment.clone());
            let draw_json = serde_json::to_string(&draw_msg).unwrap();

            match state
                .publish_stroke_usecase
                .execute(session_id, StrokeEvent::Segment(segment), draw_json)
                .await
            {
                Ok(room_id) => {
                    tracing::debug!("Session '{}' drew in room '{}'", session_id, room_id);
                }
                Err(PublishError::NotInRoom) => {
                    send_error(state, session_id, "join a room before drawing").await;
                }
            }
        }
        ClientMessage::Clear { room_id: _ } => {
            let clear_json = serde_json::to_string(&ClearMessage {
                r#type: MessageType::Clear,
            })
            .unwrap();

            match state
                .publish_stroke_usecase
                .execute(session_id, StrokeEvent::Clear, clear_json)
                .await
            {
                Ok(room_id) => {
                    tracing::info!("Session '{}' cleared room '{}'", session_id, room_id);
                }
                Err(PublishError::NotInRoom) => {
                    send_error(state, session_id, "join a room before clearing").await;
                }
            }
        }
    }
}

/// Tell an entire room, sender included, its current member count.
async fn broadcast_room_users(state: &Arc<AppState>, room_id: &RoomId, count: usize) {
    let msg = RoomUsersMessage {
        r#type: MessageType::RoomUsers,
        count,
    };
    let json = serde_json::to_string(&msg).unwrap();
    state.broadcaster.broadcast(room_id, &json, None).await;
}

/// Reject a frame back to its sender only.
async fn send_error(state: &Arc<AppState>, session_id: &SessionId, message: &str) {
    let msg = ErrorMessage {
        r#type: MessageType::Error,
        message: message.to_string(),
    };
    let json = serde_json::to_string(&msg).unwrap();
    if let Err(e) = state.message_pusher.push_to(session_id, &json).await {
        tracing::warn!("Failed to send error to '{}': {}", session_id, e);
    }
}
