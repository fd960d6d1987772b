//! Axum router construction for the session API.
//!
//! Assembles all routes under `/api` into a single [`Router`] with a
//! permissive CORS layer and per-request tracing.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /api` and `GET /api/` -- service status
/// - `GET /api/objects` -- list catalog objects
/// - `GET /api/objects/{object_id}` -- single catalog object
/// - `POST /api/session/start` -- open a session
/// - `POST /api/session/{id}/crush` -- crush an object
/// - `GET /api/session/{id}/stats` -- session statistics
/// - `POST /api/session/{id}/end` -- end a session
/// - `GET /api/modes` -- list game modes
///
/// CORS accepts any origin, method and header with credentials. A
/// wildcard cannot be combined with credentials, so the request's own
/// origin, method and headers are mirrored back. This is only suitable
/// for local or demo deployments.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        // Status
        .route("/api", get(handlers::root))
        .route("/api/", get(handlers::root))
        // Catalog
        .route("/api/objects", get(handlers::list_objects))
        .route("/api/objects/{object_id}", get(handlers::get_object))
        .route("/api/modes", get(handlers::list_modes))
        // Sessions
        .route("/api/session/start", post(handlers::start_session))
        .route("/api/session/{id}/crush", post(handlers::crush_object))
        .route("/api/session/{id}/stats", get(handlers::session_stats))
        .route("/api/session/{id}/end", post(handlers::end_session))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
