//! Request and response bodies for the session API.
//!
//! Request types carry serde defaults for every optional field, so a
//! client may omit anything except what the endpoint strictly needs
//! (`object_id` on a crush). No range checks are applied to numeric
//! inputs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{GameMode, ParticleMaterial};
use crate::ids::SessionId;
use crate::structs::{CatalogObject, ModeDescriptor, Position, Session};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body of `POST /api/session/start`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct StartSessionRequest {
    /// Game mode (default `interactive`).
    pub mode: GameMode,
    /// Pre-seeded crush history (default empty).
    pub objects_crushed: Vec<String>,
    /// Pre-seeded satisfaction total (default `0`).
    pub total_satisfaction: i64,
    /// Client-reported duration (default `0`).
    pub session_duration: i64,
}

/// Body of `POST /api/session/{id}/crush`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CrushRequest {
    /// Catalog id of the object to crush.
    pub object_id: String,
    /// Force applied by the player (default `1.0`). Echoed back verbatim.
    #[serde(default = "default_force")]
    pub force: f64,
    /// Where the crush happened (default origin).
    #[serde(default)]
    pub position: Position,
}

const fn default_force() -> f64 {
    1.0
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Body of `GET /api/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ApiStatus {
    /// Service name.
    pub message: String,
    /// Always `running` while the server answers.
    pub status: String,
}

/// Body of `GET /api/objects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ObjectList {
    /// Every catalog object, in catalog order.
    pub objects: Vec<CatalogObject>,
}

/// Body of `GET /api/modes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ModeList {
    /// Every game mode descriptor.
    pub modes: Vec<ModeDescriptor>,
}

/// Body of `POST /api/session/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SessionStarted {
    /// The newly generated session id.
    pub session_id: SessionId,
    /// Confirmation text.
    pub message: String,
}

/// Sensory feedback returned for a successful crush.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CrushResult {
    /// The full catalog record of the crushed object.
    pub object: CatalogObject,
    /// Always `true`; failures are reported as errors instead.
    pub success: bool,
    /// Satisfaction added to the session total.
    pub satisfaction_gained: u32,
    /// Particle effect to play.
    pub particles: ParticleMaterial,
    /// Sound asset to play.
    pub sound: String,
    /// Haptic vibration timings in milliseconds.
    pub vibration: Vec<u32>,
    /// Crush animation length in seconds.
    pub animation_duration: f64,
    /// The force from the request, unchanged.
    pub force_applied: f64,
}

/// Body of `GET /api/session/{id}/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SessionStats {
    /// Number of entries in `objects_crushed`.
    pub total_crushed: usize,
    /// Running satisfaction total.
    pub total_satisfaction: i64,
    /// Catalog ids crushed so far, oldest first.
    pub objects_crushed: Vec<String>,
    /// Client-reported duration.
    pub session_duration: i64,
}

impl From<&Session> for SessionStats {
    fn from(session: &Session) -> Self {
        Self {
            total_crushed: session.objects_crushed.len(),
            total_satisfaction: session.total_satisfaction,
            objects_crushed: session.objects_crushed.clone(),
            session_duration: session.session_duration,
        }
    }
}

/// Body of `POST /api/session/{id}/end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SessionEnded {
    /// Confirmation text.
    pub message: String,
    /// Full session record at the moment it was ended.
    pub stats: Session,
}
