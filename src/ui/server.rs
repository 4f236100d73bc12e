//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::domain::MessagePusher;
use crate::usecase::{
    DisconnectSessionUseCase, GetSessionUseCase, JoinRoomUseCase, ListSessionsUseCase,
    PublishStrokeUseCase, RoomBroadcaster, SaveSessionUseCase,
};

use super::{
    handler::{
        http::{get_session, health_check, list_sessions, save_session},
        websocket::websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Collaborative whiteboard server
///
/// Encapsulates the wired use cases and exposes the WebSocket and HTTP
/// surfaces through one axum router.
pub struct Server {
    join_room_usecase: Arc<JoinRoomUseCase>,
    publish_stroke_usecase: Arc<PublishStrokeUseCase>,
    disconnect_session_usecase: Arc<DisconnectSessionUseCase>,
    list_sessions_usecase: Arc<ListSessionsUseCase>,
    save_session_usecase: Arc<SaveSessionUseCase>,
    get_session_usecase: Arc<GetSessionUseCase>,
    broadcaster: Arc<RoomBroadcaster>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl Server {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        join_room_usecase: Arc<JoinRoomUseCase>,
        publish_stroke_usecase: Arc<PublishStrokeUseCase>,
        disconnect_session_usecase: Arc<DisconnectSessionUseCase>,
        list_sessions_usecase: Arc<ListSessionsUseCase>,
        save_session_usecase: Arc<SaveSessionUseCase>,
        get_session_usecase: Arc<GetSessionUseCase>,
        broadcaster: Arc<RoomBroadcaster>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            join_room_usecase,
            publish_stroke_usecase,
            disconnect_session_usecase,
            list_sessions_usecase,
            save_session_usecase,
            get_session_usecase,
            broadcaster,
            message_pusher,
        }
    }

    /// Run the whiteboard server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    /// * `allowed_origin` - Origin allowed by CORS; permissive when `None`
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address
    /// or if there's an error during server execution.
    pub async fn run(
        self,
        host: String,
        port: u16,
        allowed_origin: Option<String>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let app_state = Arc::new(AppState {
            join_room_usecase: self.join_room_usecase,
            publish_stroke_usecase: self.publish_stroke_usecase,
            disconnect_session_usecase: self.disconnect_session_usecase,
            list_sessions_usecase: self.list_sessions_usecase,
            save_session_usecase: self.save_session_usecase,
            get_session_usecase: self.get_session_usecase,
            broadcaster: self.broadcaster,
            message_pusher: self.message_pusher,
        });

        let cors = match allowed_origin {
            Some(origin) => CorsLayer::new()
                .allow_origin(origin.parse::<HeaderValue>()?)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
            None => CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        };

        // Define handlers
        let app = Router::new()
            // WebSocket endpoint
            .route("/ws", get(websocket_handler))
            // HTTP endpoints
            .route("/api/health", get(health_check))
            .route("/api/sessions", get(list_sessions))
            .route("/api/sessions/save", post(save_session))
            .route("/api/sessions/{room_id}", get(get_session))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(app_state);

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!(
            "Whiteboard server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
