//! Collaborative whiteboard server with room-based broadcast and replay.
//!
//! Fans each session's strokes out to its room peers live and keeps an
//! ordered per-room event log so a whiteboard can be resumed exactly as
//! left.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server
//! cargo run --bin server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;
use tokio::sync::Mutex;

use rakugaki_server::{
    common::logger::setup_logger,
    domain::RoomRegistry,
    infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemoryWhiteboardRepository,
    },
    ui::Server,
    usecase::{
        DisconnectSessionUseCase, GetSessionUseCase, JoinRoomUseCase, ListSessionsUseCase,
        PublishStrokeUseCase, RoomBroadcaster, SaveSessionUseCase,
    },
};

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Collaborative whiteboard server with room-based broadcast support", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Origin allowed to call the API (CORS); permissive when omitted
    #[arg(long)]
    allow_origin: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Registry (live membership)
    // 2. Repository (durable store)
    // 3. MessagePusher + Broadcaster
    // 4. UseCases
    // 5. Server

    // 1. Live membership registry, shared by every session task
    let registry = Arc::new(Mutex::new(RoomRegistry::new()));

    // 2. Create Repository (in-memory store)
    let repository = Arc::new(InMemoryWhiteboardRepository::new());

    // 3. Create MessagePusher (WebSocket implementation) and the
    //    room-scoped broadcaster on top of it
    let message_pusher = Arc::new(WebSocketMessagePusher::new());
    let broadcaster = Arc::new(RoomBroadcaster::new(
        registry.clone(),
        message_pusher.clone(),
    ));

    // 4. Create UseCases
    let join_room_usecase = Arc::new(JoinRoomUseCase::new(registry.clone(), repository.clone()));
    let publish_stroke_usecase = Arc::new(PublishStrokeUseCase::new(
        registry.clone(),
        broadcaster.clone(),
        repository.clone(),
    ));
    let disconnect_session_usecase = Arc::new(DisconnectSessionUseCase::new(
        registry.clone(),
        message_pusher.clone(),
    ));
    let list_sessions_usecase = Arc::new(ListSessionsUseCase::new(repository.clone()));
    let save_session_usecase = Arc::new(SaveSessionUseCase::new(repository.clone()));
    let get_session_usecase = Arc::new(GetSessionUseCase::new(repository.clone()));

    // 5. Create and run the server
    let server = Server::new(
        join_room_usecase,
        publish_stroke_usecase,
        disconnect_session_usecase,
        list_sessions_usecase,
        save_session_usecase,
        get_session_usecase,
        broadcaster,
        message_pusher,
    );
    if let Err(e) = server.run(args.host, args.port, args.allow_origin).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
