//! HTTP server setup for the looping API

use std::net::SocketAddr;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::routes::create_router;
use crate::AppState;

/// Loopback address for the configured API port
pub fn bind_addr(state: &AppState) -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], state.config().api_port))
}

/// Calculator routes wrapped in open CORS and request tracing
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Serve the calculator on `127.0.0.1:<api_port>` until the listener fails
pub async fn start_server(state: AppState) -> Result<(), std::io::Error> {
    let addr = bind_addr(&state);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Looping API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
