use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, put},
    Router,
};
use shared::config::Config;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build and configure the application router
pub fn build_router(state: AppState, config: &Config) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Todo routes
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/{id}",
            put(handlers::update_todo).delete(handlers::delete_todo),
        )
        // Middleware
        .layer(cors_layer(config))
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if config.allows_any_origin() {
        info!("CORS: allowing all origins");
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("CORS: ignoring invalid origin '{}'", origin);
                None
            }
        })
        .collect();

    info!("CORS: allowing origins {:?}", config.allowed_origins);
    cors.allow_origin(origins)
}
