//! UseCase: session disconnect.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{MessagePusher, RoomId, RoomRegistry, SessionId};

/// Removes a disconnecting session's room binding and outbound channel.
pub struct DisconnectSessionUseCase {
    registry: Arc<Mutex<RoomRegistry>>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectSessionUseCase {
    pub fn new(
        registry: Arc<Mutex<RoomRegistry>>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    /// Execute the disconnect. Returns the departed room and its updated
    /// count so the caller can notify the remaining members; `None` when the
    /// session was not bound to any room.
    pub async fn execute(&self, session_id: &SessionId) -> Option<(RoomId, usize)> {
        let departed = {
            let mut registry = self.registry.lock().await;
            registry.leave(session_id)
        };

        // future deliveries to this session are dropped from here on
        self.message_pusher.unregister_session(session_id).await;

        departed
    }
}
