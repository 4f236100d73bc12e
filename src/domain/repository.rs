//! Persistence gateway trait.
//!
//! The domain layer defines the data-access interface it needs; the
//! infrastructure layer provides the concrete store (dependency inversion).
//! Any engine satisfying this contract can back the server; this repository
//! ships an in-memory implementation.

use async_trait::async_trait;
use thiserror::Error;

use super::entity::{Room, SegmentEvent};
use super::value_object::RoomId;

/// Failure talking to the backing store.
///
/// Treated as transient by every caller: the live broadcast path never
/// depends on a repository call succeeding.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Durable store for room records and their ordered stroke logs.
///
/// Every operation is safe to retry. Unknown rooms are never an error:
/// appends and clears degrade to no-ops, replays to an empty log.
#[async_trait]
pub trait WhiteboardRepository: Send + Sync {
    /// Return the room record, creating it with default metadata on first
    /// sight. A concurrent creation race resolves to the winning record.
    async fn find_or_create_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError>;

    /// Look up a room without creating it.
    async fn find_room(&self, room_id: &RoomId) -> Result<Option<Room>, RepositoryError>;

    /// Append one segment to the room's log and touch its updated timestamp.
    /// No-op when the room does not exist.
    async fn append_stroke(
        &self,
        room_id: &RoomId,
        segment: SegmentEvent,
    ) -> Result<(), RepositoryError>;

    /// All segments of the room, ordered by timestamp ascending. Empty for
    /// unknown rooms.
    async fn replay_history(&self, room_id: &RoomId) -> Result<Vec<SegmentEvent>, RepositoryError>;

    /// Delete all segments of the room and touch its updated timestamp.
    /// No-op when the room or its events do not exist.
    async fn clear_history(&self, room_id: &RoomId) -> Result<(), RepositoryError>;

    /// All rooms, ordered by updated timestamp descending (most recently
    /// active first).
    async fn list_rooms(&self) -> Result<Vec<Room>, RepositoryError>;

    /// Find-or-create the room, then set its display name when one is
    /// supplied. Idempotent.
    async fn save_room_name(
        &self,
        room_id: &RoomId,
        name: Option<String>,
    ) -> Result<Room, RepositoryError>;
}
