//! Message delivery trait.
//!
//! The domain layer defines the outbound delivery interface; the
//! infrastructure layer provides the WebSocket-channel implementation.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use super::value_object::SessionId;

/// Per-session outbound channel. Each connected session drains its own
/// receiver into its socket, so one slow peer never stalls another.
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[derive(Debug, Error)]
pub enum MessagePushError {
    #[error("session '{0}' is not registered")]
    SessionNotFound(SessionId),
    #[error("failed to push message: {0}")]
    PushFailed(String),
}

/// Outbound message delivery to connected sessions.
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Register a session's outbound channel.
    async fn register_session(&self, session_id: SessionId, sender: PusherChannel);

    /// Drop a session's outbound channel; pending deliveries to it are
    /// abandoned.
    async fn unregister_session(&self, session_id: &SessionId);

    /// Deliver a payload to one session.
    async fn push_to(&self, session_id: &SessionId, payload: &str)
    -> Result<(), MessagePushError>;

    /// Deliver a payload to each target. Per-target failures are logged and
    /// skipped; the fan-out itself never fails.
    async fn broadcast(
        &self,
        targets: Vec<SessionId>,
        payload: &str,
    ) -> Result<(), MessagePushError>;
}
