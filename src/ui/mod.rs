//! UI layer: axum router, handlers and shared state.

pub mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
pub use state::AppState;
