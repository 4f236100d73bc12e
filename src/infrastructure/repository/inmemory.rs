//! In-memory whiteboard repository implementation.
//!
//! Room records and their stroke logs live in a `HashMap` behind a single
//! async mutex, which also makes find-or-create atomic: a racing second
//! creator observes the winning record instead of a uniqueness conflict.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::common::time::{Clock, SystemClock};
use crate::domain::{
    RepositoryError, Room, RoomId, SegmentEvent, Timestamp, WhiteboardRepository,
};

/// One room record and its stroke log, in append order.
#[derive(Debug)]
struct RoomRecord {
    room: Room,
    strokes: Vec<SegmentEvent>,
}

/// HashMap-backed implementation of [`WhiteboardRepository`].
pub struct InMemoryWhiteboardRepository {
    rooms: Mutex<HashMap<RoomId, RoomRecord>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryWhiteboardRepository {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a repository stamping records through the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
            clock,
        }
    }

    fn now(&self) -> Timestamp {
        Timestamp::new(self.clock.now_millis())
    }
}

impl Default for InMemoryWhiteboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WhiteboardRepository for InMemoryWhiteboardRepository {
    async fn find_or_create_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError> {
        let now = self.now();
        let mut rooms = self.rooms.lock().await;
        let record = rooms.entry(room_id.clone()).or_insert_with(|| RoomRecord {
            room: Room::new(room_id.clone(), now),
            strokes: Vec::new(),
        });
        Ok(record.room.clone())
    }

    async fn find_room(&self, room_id: &RoomId) -> Result<Option<Room>, RepositoryError> {
        let rooms = self.rooms.lock().await;
        Ok(rooms.get(room_id).map(|record| record.room.clone()))
    }

    async fn append_stroke(
        &self,
        room_id: &RoomId,
        segment: SegmentEvent,
    ) -> Result<(), RepositoryError> {
        let now = self.now();
        let mut rooms = self.rooms.lock().await;
        // a draw against a never-created room is dropped from durability
        if let Some(record) = rooms.get_mut(room_id) {
            record.strokes.push(segment);
            record.room.touch(now);
        }
        Ok(())
    }

    async fn replay_history(&self, room_id: &RoomId) -> Result<Vec<SegmentEvent>, RepositoryError> {
        let rooms = self.rooms.lock().await;
        let mut strokes = rooms
            .get(room_id)
            .map(|record| record.strokes.clone())
            .unwrap_or_default();
        // stable sort: equal timestamps keep append order
        strokes.sort_by_key(|segment| segment.timestamp);
        Ok(strokes)
    }

    async fn clear_history(&self, room_id: &RoomId) -> Result<(), RepositoryError> {
        let now = self.now();
        let mut rooms = self.rooms.lock().await;
        if let Some(record) = rooms.get_mut(room_id) {
            record.strokes.clear();
            record.room.touch(now);
        }
        Ok(())
    }

    async fn list_rooms(&self) -> Result<Vec<Room>, RepositoryError> {
        let rooms = self.rooms.lock().await;
        let mut all: Vec<Room> = rooms.values().map(|record| record.room.clone()).collect();
        all.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(all)
    }

    async fn save_room_name(
        &self,
        room_id: &RoomId,
        name: Option<String>,
    ) -> Result<Room, RepositoryError> {
        let now = self.now();
        let mut rooms = self.rooms.lock().await;
        let record = rooms.entry(room_id.clone()).or_insert_with(|| RoomRecord {
            room: Room::new(room_id.clone(), now),
            strokes: Vec::new(),
        });
        if let Some(name) = name {
            record.room.rename(name, now);
        }
        Ok(record.room.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};

    use super::*;

    /// Clock that advances by one millisecond per reading, for deterministic
    /// recency ordering.
    struct StepClock(AtomicI64);

    impl Clock for StepClock {
        fn now_millis(&self) -> i64 {
            self.0.fetch_add(1, Ordering::SeqCst)
        }
    }

    fn create_test_repository() -> InMemoryWhiteboardRepository {
        InMemoryWhiteboardRepository::with_clock(Arc::new(StepClock(AtomicI64::new(1000))))
    }

    fn room_id(id: &str) -> RoomId {
        RoomId::new(id.to_string()).unwrap()
    }

    fn segment(at: i64) -> SegmentEvent {
        SegmentEvent {
            x0: 0.0,
            y0: 0.0,
            x1: 10.0,
            y1: 10.0,
            color: "#000".to_string(),
            width: 2.0,
            timestamp: Timestamp::new(at),
        }
    }

    #[tokio::test]
    async fn test_find_or_create_room_creates_once() {
        // given:
        let repo = create_test_repository();

        // when: the same id is requested twice
        let first = repo.find_or_create_room(&room_id("r1")).await.unwrap();
        let second = repo.find_or_create_room(&room_id("r1")).await.unwrap();

        // then: the second call returns the existing record
        assert_eq!(first, second);
        assert_eq!(first.name, None);
    }

    #[tokio::test]
    async fn test_find_room_does_not_create() {
        // given:
        let repo = create_test_repository();

        // when:
        let found = repo.find_room(&room_id("r1")).await.unwrap();

        // then:
        assert_eq!(found, None);
        assert!(repo.list_rooms().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_and_replay_preserves_timestamp_order() {
        // given:
        let repo = create_test_repository();
        repo.find_or_create_room(&room_id("r1")).await.unwrap();

        // when: segments are appended out of timestamp order
        repo.append_stroke(&room_id("r1"), segment(300)).await.unwrap();
        repo.append_stroke(&room_id("r1"), segment(100)).await.unwrap();
        repo.append_stroke(&room_id("r1"), segment(200)).await.unwrap();
        let history = repo.replay_history(&room_id("r1")).await.unwrap();

        // then: replay is ordered by timestamp ascending
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].timestamp.value(), 100);
        assert_eq!(history[1].timestamp.value(), 200);
        assert_eq!(history[2].timestamp.value(), 300);
    }

    #[tokio::test]
    async fn test_append_touches_updated_at() {
        // given:
        let repo = create_test_repository();
        let created = repo.find_or_create_room(&room_id("r1")).await.unwrap();

        // when:
        repo.append_stroke(&room_id("r1"), segment(100)).await.unwrap();
        let touched = repo.find_room(&room_id("r1")).await.unwrap().unwrap();

        // then:
        assert!(touched.updated_at > created.updated_at);
        assert_eq!(touched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_append_to_unknown_room_is_noop() {
        // given:
        let repo = create_test_repository();

        // when:
        repo.append_stroke(&room_id("ghost"), segment(100)).await.unwrap();

        // then: nothing was created
        assert_eq!(repo.find_room(&room_id("ghost")).await.unwrap(), None);
        assert!(repo.replay_history(&room_id("ghost")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_history_empties_replay() {
        // given:
        let repo = create_test_repository();
        repo.find_or_create_room(&room_id("r1")).await.unwrap();
        repo.append_stroke(&room_id("r1"), segment(100)).await.unwrap();
        repo.append_stroke(&room_id("r1"), segment(200)).await.unwrap();

        // when:
        repo.clear_history(&room_id("r1")).await.unwrap();
        let history = repo.replay_history(&room_id("r1")).await.unwrap();

        // then: the log is empty but the room record survives
        assert!(history.is_empty());
        assert!(repo.find_room(&room_id("r1")).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clear_history_on_unknown_room_is_noop() {
        // given:
        let repo = create_test_repository();

        // when / then:
        assert!(repo.clear_history(&room_id("ghost")).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_rooms_orders_by_recency() {
        // given: two rooms, then activity on the older one
        let repo = create_test_repository();
        repo.find_or_create_room(&room_id("a")).await.unwrap();
        repo.find_or_create_room(&room_id("b")).await.unwrap();
        repo.append_stroke(&room_id("a"), segment(100)).await.unwrap();

        // when:
        let rooms = repo.list_rooms().await.unwrap();

        // then: the touched room comes first
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].id, room_id("a"));
        assert_eq!(rooms[1].id, room_id("b"));
    }

    #[tokio::test]
    async fn test_save_room_name_creates_and_renames() {
        // given:
        let repo = create_test_repository();

        // when: saving an unseen room with a name
        let saved = repo
            .save_room_name(&room_id("r1"), Some("demo".to_string()))
            .await
            .unwrap();

        // then:
        assert_eq!(saved.name.as_deref(), Some("demo"));
    }

    #[tokio::test]
    async fn test_save_room_name_without_name_keeps_existing() {
        // given:
        let repo = create_test_repository();
        repo.save_room_name(&room_id("r1"), Some("demo".to_string()))
            .await
            .unwrap();

        // when: saving again without a name
        let saved = repo.save_room_name(&room_id("r1"), None).await.unwrap();

        // then: the existing name is preserved
        assert_eq!(saved.name.as_deref(), Some("demo"));
    }
}
