//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::config::ServerSettings;
use crate::routes::{heatmap, monthly, options, players, teams, HEALTH};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Read-only API consumed by a separate rendering layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(HEALTH, get(handlers::health_check))
        .route(teams::GET_TEAM_VIEW, get(handlers::get_team_view))
        .route(heatmap::GET_TEAM_HEATMAP, get(handlers::get_team_heatmap))
        .route(players::GET_PLAYER_VIEW, get(handlers::get_player_view))
        .route(monthly::GET_MONTHLY_VIEW, get(handlers::get_monthly_view))
        .route(options::GET_FILTER_OPTIONS, get(handlers::get_filter_options))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind a listener for `server`.
///
/// The host may be a name such as `localhost`; it is resolved before binding.
pub async fn bind_listener(server: &ServerSettings) -> std::io::Result<TcpListener> {
    TcpListener::bind((server.host.as_str(), server.port)).await
}
