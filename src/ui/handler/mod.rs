//! Request handlers, by protocol.

pub mod http;
pub mod websocket;
