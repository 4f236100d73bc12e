//! Entities of the whiteboard domain.

use super::value_object::{RoomId, Timestamp};

/// A named, independently persisted whiteboard and its metadata.
///
/// The stroke log itself is owned by the store behind
/// [`WhiteboardRepository`](super::WhiteboardRepository); this entity carries
/// the room record only.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    /// Optional display name shown in the session picker.
    pub name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Room {
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            name: None,
            created_at,
            updated_at: created_at,
        }
    }

    /// Record that the room accepted a draw/clear/save action.
    pub fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }

    pub fn rename(&mut self, name: String, now: Timestamp) {
        self.name = Some(name);
        self.touch(now);
    }
}

/// One atomic drawing primitive: a line segment between two points.
///
/// Segments carry no reference to prior events; replaying a room's segments
/// in timestamp order reconstructs the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentEvent {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub color: String,
    pub width: f64,
    pub timestamp: Timestamp,
}

/// An event a bound session can publish into its room.
#[derive(Debug, Clone, PartialEq)]
pub enum StrokeEvent {
    /// Additive drawing primitive, appended to the room's durable log.
    Segment(SegmentEvent),
    /// Destructive reset, purging the room's durable log.
    Clear,
}

impl StrokeEvent {
    /// Event kind label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Segment(_) => "segment",
            Self::Clear => "clear",
        }
    }
}
