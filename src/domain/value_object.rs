//! Value objects of the whiteboard domain.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Maximum accepted length of a room identifier, in bytes.
const MAX_ROOM_ID_LEN: usize = 128;

/// Validation errors for [`RoomId`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoomIdError {
    #[error("room id must not be empty")]
    Empty,
    #[error("room id exceeds {} bytes", MAX_ROOM_ID_LEN)]
    TooLong,
}

/// Identifier of a whiteboard room.
///
/// Caller-supplied, opaque and immutable once a room has been created under
/// it. Two sessions naming the same id share a canvas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(value: String) -> Result<Self, RoomIdError> {
        if value.trim().is_empty() {
            return Err(RoomIdError::Empty);
        }
        if value.len() > MAX_ROOM_ID_LEN {
            return Err(RoomIdError::TooLong);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = RoomIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Server-assigned identifier of one connected WebSocket session.
///
/// A session is bound to at most one room at any instant; the binding lives
/// in the [`RoomRegistry`](super::RoomRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh session identifier for a new connection.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_accepts_plain_name() {
        // when:
        let result = RoomId::new("r1".to_string());

        // then:
        assert_eq!(result.unwrap().as_str(), "r1");
    }

    #[test]
    fn test_room_id_rejects_empty_string() {
        // when:
        let result = RoomId::new("".to_string());

        // then:
        assert_eq!(result, Err(RoomIdError::Empty));
    }

    #[test]
    fn test_room_id_rejects_whitespace_only_string() {
        // when:
        let result = RoomId::new("   ".to_string());

        // then:
        assert_eq!(result, Err(RoomIdError::Empty));
    }

    #[test]
    fn test_room_id_rejects_oversized_string() {
        // given:
        let oversized = "x".repeat(MAX_ROOM_ID_LEN + 1);

        // when:
        let result = RoomId::new(oversized);

        // then:
        assert_eq!(result, Err(RoomIdError::TooLong));
    }

    #[test]
    fn test_session_id_generate_is_unique() {
        // when:
        let a = SessionId::generate();
        let b = SessionId::generate();

        // then:
        assert_ne!(a, b);
    }

    #[test]
    fn test_timestamp_roundtrip() {
        // when:
        let timestamp = Timestamp::new(1700000000000);

        // then:
        assert_eq!(timestamp.value(), 1700000000000);
    }
}
