//! Conversion logic between DTOs and domain entities.

use crate::common::time::timestamp_to_rfc3339;
use crate::domain::{Room, SegmentEvent};
use crate::infrastructure::dto::http::{SessionDetailDto, SessionSummaryDto};
use crate::infrastructure::dto::websocket::{DrawMessage, MessageType, StrokeDto};

// ========================================
// Domain Entity → DTO
// ========================================

impl From<SegmentEvent> for StrokeDto {
    fn from(segment: SegmentEvent) -> Self {
        Self {
            x0: segment.x0,
            y0: segment.y0,
            x1: segment.x1,
            y1: segment.y1,
            color: segment.color,
            width: segment.width,
            timestamp: segment.timestamp.value(),
        }
    }
}

impl From<SegmentEvent> for DrawMessage {
    fn from(segment: SegmentEvent) -> Self {
        Self {
            r#type: MessageType::Draw,
            x0: segment.x0,
            y0: segment.y0,
            x1: segment.x1,
            y1: segment.y1,
            color: segment.color,
            width: segment.width,
            timestamp: segment.timestamp.value(),
        }
    }
}

impl From<&Room> for SessionSummaryDto {
    fn from(room: &Room) -> Self {
        Self {
            room_id: room.id.as_str().to_string(),
            name: room.name.clone(),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
            updated_at: timestamp_to_rfc3339(room.updated_at.value()),
        }
    }
}

impl From<(Room, Vec<SegmentEvent>)> for SessionDetailDto {
    fn from((room, history): (Room, Vec<SegmentEvent>)) -> Self {
        Self {
            created_at: timestamp_to_rfc3339(room.created_at.value()),
            updated_at: timestamp_to_rfc3339(room.updated_at.value()),
            room_id: room.id.into_string(),
            name: room.name,
            strokes: history.into_iter().map(StrokeDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{RoomId, Timestamp};

    use super::*;

    fn segment() -> SegmentEvent {
        SegmentEvent {
            x0: 0.0,
            y0: 1.0,
            x1: 10.0,
            y1: 11.0,
            color: "#000".to_string(),
            width: 2.0,
            timestamp: Timestamp::new(1672531200000),
        }
    }

    #[test]
    fn test_segment_to_stroke_dto() {
        // when:
        let dto: StrokeDto = segment().into();

        // then:
        assert_eq!(dto.x0, 0.0);
        assert_eq!(dto.y1, 11.0);
        assert_eq!(dto.color, "#000");
        assert_eq!(dto.timestamp, 1672531200000);
    }

    #[test]
    fn test_segment_to_draw_message() {
        // when:
        let message: DrawMessage = segment().into();

        // then:
        assert_eq!(message.r#type, MessageType::Draw);
        assert_eq!(message.width, 2.0);
        assert_eq!(message.timestamp, 1672531200000);
    }

    #[test]
    fn test_room_to_summary_dto() {
        // given:
        let mut room = Room::new(
            RoomId::new("r1".to_string()).unwrap(),
            Timestamp::new(1672531200000),
        );
        room.rename("demo".to_string(), Timestamp::new(1672531260000));

        // when:
        let dto = SessionSummaryDto::from(&room);

        // then:
        assert_eq!(dto.room_id, "r1");
        assert_eq!(dto.name.as_deref(), Some("demo"));
        assert!(dto.created_at.starts_with("2023-01-01T00:00:00"));
        assert!(dto.updated_at.starts_with("2023-01-01T00:01:00"));
    }

    #[test]
    fn test_room_and_history_to_detail_dto() {
        // given:
        let room = Room::new(
            RoomId::new("r1".to_string()).unwrap(),
            Timestamp::new(1672531200000),
        );

        // when:
        let dto = SessionDetailDto::from((room, vec![segment()]));

        // then:
        assert_eq!(dto.room_id, "r1");
        assert_eq!(dto.strokes.len(), 1);
        assert_eq!(dto.strokes[0].color, "#000");
    }
}
