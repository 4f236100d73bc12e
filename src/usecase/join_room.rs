//! UseCase: binding a session to a room.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{RoomId, RoomRegistry, SegmentEvent, SessionId, WhiteboardRepository};

/// Result of a join: what the caller must tell whom.
///
/// The departed room (if any) and the joined room each get a `roomUsers`
/// broadcast; the history goes privately to the joining session only.
#[derive(Debug)]
pub struct JoinOutcome {
    /// Previous room left as part of the rebind, with its decremented count.
    pub departed: Option<(RoomId, usize)>,
    /// Member count of the joined room, the joiner included.
    pub count: usize,
    /// Replayed stroke history of the joined room, timestamp ascending.
    pub history: Vec<SegmentEvent>,
}

/// Binds a session to a room: leave-old, find-or-create, replay, join.
pub struct JoinRoomUseCase {
    registry: Arc<Mutex<RoomRegistry>>,
    repository: Arc<dyn WhiteboardRepository>,
}

impl JoinRoomUseCase {
    pub fn new(
        registry: Arc<Mutex<RoomRegistry>>,
        repository: Arc<dyn WhiteboardRepository>,
    ) -> Self {
        Self {
            registry,
            repository,
        }
    }

    /// Execute the join. Never fails: store trouble degrades to an empty
    /// history with a warning, the membership change still happens.
    ///
    /// Rejoining the currently bound room is a full rejoin with a fresh
    /// replay, which is what a "reset view" needs.
    pub async fn execute(&self, session_id: SessionId, room_id: RoomId) -> JoinOutcome {
        // 1. Drop any previous binding first; a session is in at most one
        //    room at any instant.
        let departed = {
            let mut registry = self.registry.lock().await;
            registry.leave(&session_id)
        };

        // 2. Room record and history. The live membership change below does
        //    not depend on either call succeeding.
        if let Err(e) = self.repository.find_or_create_room(&room_id).await {
            tracing::warn!("Failed to find or create room '{}': {}", room_id, e);
        }
        let history = match self.repository.replay_history(&room_id).await {
            Ok(history) => history,
            Err(e) => {
                tracing::warn!("Failed to replay history for room '{}': {}", room_id, e);
                Vec::new()
            }
        };

        // 3. Record membership.
        let (count, _) = {
            let mut registry = self.registry.lock().await;
            registry.join(session_id, room_id)
        };

        JoinOutcome {
            departed,
            count,
            history,
        }
    }
}
