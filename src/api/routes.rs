//! API Routes
//!
//! Configures the Axum router with all catalog endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    detail_handler, get_theme_handler, health_handler, landing_handler, list_handler,
    refresh_handler, regions_handler, set_theme_handler, status_handler, toggle_theme_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Landing page (most populated countries)
/// - `GET /countries` - Filtered listing (`q`, `region`, `reveals`)
/// - `GET /countries/:code` - Country detail with border countries
/// - `POST /countries/refresh` - Explicit bulk re-fetch
/// - `GET /regions` - Region selector values
/// - `GET /status` - Store status and fetch counters
/// - `GET|PUT /theme`, `POST /theme/toggle` - Display preference
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(landing_handler))
        .route("/countries", get(list_handler))
        .route("/countries/refresh", post(refresh_handler))
        .route("/countries/:code", get(detail_handler))
        .route("/regions", get(regions_handler))
        .route("/status", get(status_handler))
        .route("/theme", get(get_theme_handler).put(set_theme_handler))
        .route("/theme/toggle", post(toggle_theme_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
