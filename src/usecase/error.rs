//! Use case error types.

use thiserror::Error;

use crate::domain::RepositoryError;

/// Rejection of a draw/clear requested by a session with no room binding.
/// The only error reported back to an acting session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PublishError {
    #[error("session is not bound to any room")]
    NotInRoom,
}

/// Failure resolving a room and its history for the HTTP API.
#[derive(Debug, Error)]
pub enum GetSessionError {
    #[error("room has never been created")]
    RoomNotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
