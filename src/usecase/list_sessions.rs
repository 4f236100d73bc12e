//! UseCase: listing saved rooms for the session picker.

use std::sync::Arc;

use crate::domain::{RepositoryError, Room, WhiteboardRepository};

pub struct ListSessionsUseCase {
    repository: Arc<dyn WhiteboardRepository>,
}

impl ListSessionsUseCase {
    pub fn new(repository: Arc<dyn WhiteboardRepository>) -> Self {
        Self { repository }
    }

    /// All rooms, most recently active first.
    pub async fn execute(&self) -> Result<Vec<Room>, RepositoryError> {
        self.repository.list_rooms().await
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::RoomId;
    use crate::infrastructure::repository::InMemoryWhiteboardRepository;

    use super::*;

    #[tokio::test]
    async fn test_lists_rooms_from_the_store() {
        // given:
        let repository = Arc::new(InMemoryWhiteboardRepository::new());
        let room_id = RoomId::new("r1".to_string()).unwrap();
        repository.find_or_create_room(&room_id).await.unwrap();
        let usecase = ListSessionsUseCase::new(repository);

        // when:
        let rooms = usecase.execute().await.unwrap();

        // then:
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, room_id);
    }
}
