//! REST API endpoint handlers.
//!
//! Catalog and mode handlers are pure reads. Session handlers delegate to
//! the [`SessionStore`](crushsim_core::SessionStore) held in [`AppState`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/` | Service status |
//! | `GET` | `/api/objects` | List all catalog objects |
//! | `GET` | `/api/objects/{object_id}` | Single catalog object |
//! | `POST` | `/api/session/start` | Open a session |
//! | `POST` | `/api/session/{id}/crush` | Crush an object in a session |
//! | `GET` | `/api/session/{id}/stats` | Session statistics |
//! | `POST` | `/api/session/{id}/end` | End a session |
//! | `GET` | `/api/modes` | List game modes |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use crushsim_types::{
    ApiStatus, CatalogObject, CrushRequest, CrushResult, ModeList, ObjectList, SessionEnded,
    SessionId, SessionStarted, SessionStats, StartSessionRequest,
};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /api/ -- status
// ---------------------------------------------------------------------------

/// Report that the service is up.
pub async fn root() -> Json<ApiStatus> {
    Json(ApiStatus {
        message: String::from("Crush Simulator API"),
        status: String::from("running"),
    })
}

// ---------------------------------------------------------------------------
// GET /api/objects -- catalog
// ---------------------------------------------------------------------------

/// List every catalog object in catalog order.
pub async fn list_objects(State(state): State<Arc<AppState>>) -> Json<ObjectList> {
    Json(ObjectList {
        objects: state.catalog.list().to_vec(),
    })
}

/// Return a single catalog object by id.
pub async fn get_object(
    State(state): State<Arc<AppState>>,
    Path(object_id): Path<String>,
) -> Result<Json<CatalogObject>, ApiError> {
    state
        .catalog
        .get(&object_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            debug!(%object_id, "unknown catalog object requested");
            ApiError::object_not_found()
        })
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

/// Open a new session.
pub async fn start_session(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartSessionRequest>,
) -> Json<SessionStarted> {
    let session_id = state.sessions.start(request).await;
    Json(SessionStarted {
        session_id,
        message: String::from("Session started successfully"),
    })
}

/// Crush a catalog object within a session.
pub async fn crush_object(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
    Json(request): Json<CrushRequest>,
) -> Result<Json<CrushResult>, ApiError> {
    let session_id = parse_session_id(&id_str)?;
    let result = state
        .sessions
        .crush(session_id, &state.catalog, &request)
        .await?;
    Ok(Json(result))
}

/// Return aggregate statistics for a session.
pub async fn session_stats(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<Json<SessionStats>, ApiError> {
    let session_id = parse_session_id(&id_str)?;
    Ok(Json(state.sessions.stats(session_id).await?))
}

/// End a session and return its final record.
pub async fn end_session(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<Json<SessionEnded>, ApiError> {
    let session_id = parse_session_id(&id_str)?;
    let session = state.sessions.end(session_id).await?;
    Ok(Json(SessionEnded {
        message: String::from("Session ended successfully"),
        stats: session,
    }))
}

// ---------------------------------------------------------------------------
// GET /api/modes
// ---------------------------------------------------------------------------

/// List the available game modes.
pub async fn list_modes() -> Json<ModeList> {
    Json(ModeList {
        modes: crushsim_core::modes::list_modes(),
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a session id from a path segment.
///
/// Only the exact form the server hands out (lowercase, hyphenated) names
/// a session. Anything else, including other spellings of the same UUID,
/// is reported as not found rather than as a bad request.
fn parse_session_id(s: &str) -> Result<SessionId, ApiError> {
    let id = s.parse::<SessionId>().map_err(|e| {
        debug!(value = s, error = %e, "malformed session id");
        ApiError::session_not_found()
    })?;

    if id.to_string() == s {
        Ok(id)
    } else {
        debug!(value = s, "non-canonical session id");
        Err(ApiError::session_not_found())
    }
}
