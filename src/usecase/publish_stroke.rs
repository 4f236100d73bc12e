//! UseCase: publishing a draw/clear event from a bound session.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{RoomId, RoomRegistry, SessionId, StrokeEvent, WhiteboardRepository};

use super::broadcaster::RoomBroadcaster;
use super::error::PublishError;

/// Fans a session's event out to its room peers and persists it.
///
/// The two effects are independent: the broadcast never waits on the store,
/// the durable write runs on a detached task, and a failure of either leaves
/// the other untouched.
pub struct PublishStrokeUseCase {
    registry: Arc<Mutex<RoomRegistry>>,
    broadcaster: Arc<RoomBroadcaster>,
    repository: Arc<dyn WhiteboardRepository>,
}

impl PublishStrokeUseCase {
    pub fn new(
        registry: Arc<Mutex<RoomRegistry>>,
        broadcaster: Arc<RoomBroadcaster>,
        repository: Arc<dyn WhiteboardRepository>,
    ) -> Self {
        Self {
            registry,
            broadcaster,
            repository,
        }
    }

    /// Publish `event` into the sender's bound room, delivering `payload`
    /// to every peer except the sender.
    ///
    /// # Returns
    ///
    /// * `Ok(RoomId)` - the room the event was published into
    /// * `Err(PublishError::NotInRoom)` - the session has no binding
    pub async fn execute(
        &self,
        session_id: &SessionId,
        event: StrokeEvent,
        payload: String,
    ) -> Result<RoomId, PublishError> {
        let room_id = {
            let registry = self.registry.lock().await;
            registry.room_of(session_id)
        }
        .ok_or(PublishError::NotInRoom)?;

        // live fan-out to peers, sender excluded
        self.broadcaster
            .broadcast(&room_id, &payload, Some(session_id))
            .await;

        // durable effect on its own task; the session's next event is not
        // gated on the store answering
        let repository = Arc::clone(&self.repository);
        let room = room_id.clone();
        let kind = event.kind();
        tokio::spawn(async move {
            let result = match event {
                StrokeEvent::Segment(segment) => repository.append_stroke(&room, segment).await,
                StrokeEvent::Clear => repository.clear_history(&room).await,
            };
            if let Err(e) = result {
                tracing::warn!("Failed to persist {} event for room '{}': {}", kind, room, e);
            }
        });

        Ok(room_id)
    }
}
