//! Collaborative whiteboard server library.
//!
//! This library implements the room synchronization and replay engine behind
//! Rakugaki: room membership tracking, live stroke fan-out over WebSocket and
//! durable per-room event logs for late joiners and reopened sessions.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// shared library
pub mod common;
