//! Infrastructure layer: concrete implementations of the domain's seam
//! traits plus the DTO layer for both protocols.

pub mod dto;
pub mod message_pusher;
pub mod repository;
