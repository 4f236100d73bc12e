//! UseCase: saving a room under a display name.

use std::sync::Arc;

use crate::domain::{RepositoryError, Room, RoomId, WhiteboardRepository};

pub struct SaveSessionUseCase {
    repository: Arc<dyn WhiteboardRepository>,
}

impl SaveSessionUseCase {
    pub fn new(repository: Arc<dyn WhiteboardRepository>) -> Self {
        Self { repository }
    }

    /// Find-or-create the room and set its name when one is supplied.
    /// Idempotent.
    pub async fn execute(
        &self,
        room_id: RoomId,
        name: Option<String>,
    ) -> Result<Room, RepositoryError> {
        self.repository.save_room_name(&room_id, name).await
    }
}

#[cfg(test)]
mod tests {
    use crate::infrastructure::repository::InMemoryWhiteboardRepository;

    use super::*;

    fn room(id: &str) -> RoomId {
        RoomId::new(id.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_save_creates_and_names_the_room() {
        // given:
        let repository = Arc::new(InMemoryWhiteboardRepository::new());
        let usecase = SaveSessionUseCase::new(repository.clone());

        // when:
        let saved = usecase
            .execute(room("r1"), Some("demo".to_string()))
            .await
            .unwrap();

        // then:
        assert_eq!(saved.id, room("r1"));
        assert_eq!(saved.name.as_deref(), Some("demo"));
    }

    #[tokio::test]
    async fn test_save_is_idempotent() {
        // given:
        let repository = Arc::new(InMemoryWhiteboardRepository::new());
        let usecase = SaveSessionUseCase::new(repository);
        usecase
            .execute(room("r1"), Some("demo".to_string()))
            .await
            .unwrap();

        // when: saved again with the same name
        let saved = usecase
            .execute(room("r1"), Some("demo".to_string()))
            .await
            .unwrap();

        // then:
        assert_eq!(saved.name.as_deref(), Some("demo"));
    }
}
