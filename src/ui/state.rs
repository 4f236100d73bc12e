//! Server state shared across handlers.

use std::sync::Arc;

use crate::domain::MessagePusher;
use crate::usecase::{
    DisconnectSessionUseCase, GetSessionUseCase, JoinRoomUseCase, ListSessionsUseCase,
    PublishStrokeUseCase, RoomBroadcaster, SaveSessionUseCase,
};

/// Shared application state
pub struct AppState {
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    pub publish_stroke_usecase: Arc<PublishStrokeUseCase>,
    pub disconnect_session_usecase: Arc<DisconnectSessionUseCase>,
    pub list_sessions_usecase: Arc<ListSessionsUseCase>,
    pub save_session_usecase: Arc<SaveSessionUseCase>,
    pub get_session_usecase: Arc<GetSessionUseCase>,
    /// Room-scoped fan-out used for `roomUsers` count updates.
    pub broadcaster: Arc<RoomBroadcaster>,
    /// Per-session channel registry, used for private pushes.
    pub message_pusher: Arc<dyn MessagePusher>,
}
