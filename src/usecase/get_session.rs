//! UseCase: fetching a room record with its full stroke history.

use std::sync::Arc;

use crate::domain::{Room, RoomId, SegmentEvent, WhiteboardRepository};

use super::error::GetSessionError;

pub struct GetSessionUseCase {
    repository: Arc<dyn WhiteboardRepository>,
}

impl GetSessionUseCase {
    pub fn new(repository: Arc<dyn WhiteboardRepository>) -> Self {
        Self { repository }
    }

    /// The room record and its ordered history.
    ///
    /// # Returns
    ///
    /// * `Err(GetSessionError::RoomNotFound)` - the room has never been
    ///   created (distinct from an existing room with no strokes)
    pub async fn execute(
        &self,
        room_id: RoomId,
    ) -> Result<(Room, Vec<SegmentEvent>), GetSessionError> {
        let room = self
            .repository
            .find_room(&room_id)
            .await?
            .ok_or(GetSessionError::RoomNotFound)?;
        let history = self.repository.replay_history(&room_id).await?;
        Ok((room, history))
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::Timestamp;
    use crate::infrastructure::repository::InMemoryWhiteboardRepository;

    use super::*;

    fn room(id: &str) -> RoomId {
        RoomId::new(id.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_room_is_not_found() {
        // given:
        let usecase = GetSessionUseCase::new(Arc::new(InMemoryWhiteboardRepository::new()));

        // when:
        let result = usecase.execute(room("ghost")).await;

        // then:
        assert!(matches!(result, Err(GetSessionError::RoomNotFound)));
    }

    #[tokio::test]
    async fn test_existing_room_returns_record_and_history() {
        // given:
        let repository = Arc::new(InMemoryWhiteboardRepository::new());
        repository.find_or_create_room(&room("r1")).await.unwrap();
        repository
            .append_stroke(
                &room("r1"),
                SegmentEvent {
                    x0: 0.0,
                    y0: 0.0,
                    x1: 10.0,
                    y1: 10.0,
                    color: "#000".to_string(),
                    width: 2.0,
                    timestamp: Timestamp::new(100),
                },
            )
            .await
            .unwrap();
        let usecase = GetSessionUseCase::new(repository);

        // when:
        let (found, history) = usecase.execute(room("r1")).await.unwrap();

        // then:
        assert_eq!(found.id, room("r1"));
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn test_room_with_no_strokes_is_found_with_empty_history() {
        // given:
        let repository = Arc::new(InMemoryWhiteboardRepository::new());
        repository.find_or_create_room(&room("r1")).await.unwrap();
        let usecase = GetSessionUseCase::new(repository);

        // when:
        let (_found, history) = usecase.execute(room("r1")).await.unwrap();

        // then:
        assert!(history.is_empty());
    }
}
