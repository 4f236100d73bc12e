//! Room-scoped event fan-out.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{MessagePusher, RoomId, RoomRegistry, SessionId};

/// Delivers a payload to the sessions currently in a room.
///
/// The registry's membership view is read at send time, never cached, so a
/// session that just left a room cannot receive late events for it.
pub struct RoomBroadcaster {
    registry: Arc<Mutex<RoomRegistry>>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl RoomBroadcaster {
    pub fn new(registry: Arc<Mutex<RoomRegistry>>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    /// Deliver `payload` to every session in `room_id`, skipping `exclude`
    /// when given. Fire-and-forget: per-peer failures are logged inside the
    /// pusher and never surface here.
    pub async fn broadcast(&self, room_id: &RoomId, payload: &str, exclude: Option<&SessionId>) {
        let members = {
            let registry = self.registry.lock().await;
            registry.members_of(room_id)
        };

        let targets: Vec<SessionId> = members
            .into_iter()
            .filter(|session_id| Some(session_id) != exclude)
            .collect();
        if targets.is_empty() {
            return;
        }

        if let Err(e) = self.message_pusher.broadcast(targets, payload).await {
            tracing::warn!("Broadcast to room '{}' failed: {}", room_id, e);
        }
    }
}
