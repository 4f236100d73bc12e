//! Delivery implementations of the `MessagePusher` trait.
//!
//! - `websocket`: per-session mpsc channels drained into WebSocket sinks.

pub mod websocket;

pub use websocket::WebSocketMessagePusher;
