//! WebSocket-backed `MessagePusher` implementation.
//!
//! Socket creation stays in the UI layer (`ui::handler::websocket`); this
//! implementation only manages the per-session `UnboundedSender` halves and
//! writes payloads into them. Sends never await the peer, so a slow consumer
//! cannot stall a broadcast.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{MessagePushError, MessagePusher, PusherChannel, SessionId};

/// Registry of connected sessions' outbound channels.
pub struct WebSocketMessagePusher {
    sessions: Mutex<HashMap<SessionId, PusherChannel>>,
}

impl WebSocketMessagePusher {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for WebSocketMessagePusher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_session(&self, session_id: SessionId, sender: PusherChannel) {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(session_id, sender);
        tracing::debug!("Session '{}' registered to MessagePusher", session_id);
    }

    async fn unregister_session(&self, session_id: &SessionId) {
        let mut sessions = self.sessions.lock().await;
        sessions.remove(session_id);
        tracing::debug!("Session '{}' unregistered from MessagePusher", session_id);
    }

    async fn push_to(
        &self,
        session_id: &SessionId,
        payload: &str,
    ) -> Result<(), MessagePushError> {
        let sessions = self.sessions.lock().await;

        let sender = sessions
            .get(session_id)
            .ok_or(MessagePushError::SessionNotFound(*session_id))?;
        sender
            .send(payload.to_string())
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed message to session '{}'", session_id);
        Ok(())
    }

    async fn broadcast(
        &self,
        targets: Vec<SessionId>,
        payload: &str,
    ) -> Result<(), MessagePushError> {
        let sessions = self.sessions.lock().await;

        for target in targets {
            match sessions.get(&target) {
                Some(sender) => {
                    // a dead peer is skipped, the rest of the fan-out proceeds
                    if let Err(e) = sender.send(payload.to_string()) {
                        tracing::warn!("Failed to push message to session '{}': {}", target, e);
                    } else {
                        tracing::debug!("Broadcasted message to session '{}'", target);
                    }
                }
                None => {
                    tracing::warn!("Session '{}' not found during broadcast, skipping", target);
                }
            }
        }

        Ok(())
    }
}
