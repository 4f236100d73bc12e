//! Application layer: one use case per coordinator operation, plus the
//! room broadcaster they share.

pub mod broadcaster;
pub mod disconnect_session;
pub mod error;
pub mod get_session;
pub mod join_room;
pub mod list_sessions;
pub mod publish_stroke;
pub mod save_session;

pub use broadcaster::RoomBroadcaster;
pub use disconnect_session::DisconnectSessionUseCase;
pub use error::{GetSessionError, PublishError};
pub use get_session::GetSessionUseCase;
pub use join_room::{JoinOutcome, JoinRoomUseCase};
pub use list_sessions::ListSessionsUseCase;
pub use publish_stroke::PublishStrokeUseCase;
pub use save_session::SaveSessionUseCase;
