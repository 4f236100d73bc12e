//! Domain layer: value objects, entities, the live-membership registry and
//! the seam traits implemented by the infrastructure layer.

pub mod entity;
pub mod pusher;
pub mod registry;
pub mod repository;
pub mod value_object;

pub use entity::{Room, SegmentEvent, StrokeEvent};
pub use pusher::{MessagePushError, MessagePusher, PusherChannel};
pub use registry::RoomRegistry;
pub use repository::{RepositoryError, WhiteboardRepository};
pub use value_object::{RoomId, RoomIdError, SessionId, Timestamp};
