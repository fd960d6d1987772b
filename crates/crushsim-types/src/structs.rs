//! Core entity structs for the Crush Simulator.
//!
//! [`CatalogObject`] and [`ModeDescriptor`] are static data seeded at
//! startup. [`Session`] is the only mutable entity and is owned by the
//! session store in `crushsim-core`.

use chrono::{DateTime, Utc};
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::enums::{GameMode, ObjectKind, ParticleMaterial};
use crate::ids::SessionId;

// ---------------------------------------------------------------------------
// Catalog object
// ---------------------------------------------------------------------------

/// A crushable object with fixed sensory and scoring metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CatalogObject {
    /// Stable slug identifying the object (e.g. `can_aluminum`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Broad category of the object.
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    /// Difficulty rating (1 = easiest).
    pub difficulty: u32,
    /// Sound asset played on crush.
    pub sound: String,
    /// Particle effect material.
    pub particles: ParticleMaterial,
    /// Haptic vibration timings in milliseconds.
    pub vibration_pattern: Vec<u32>,
    /// Crush animation length in seconds.
    pub crush_time: f64,
    /// Satisfaction points awarded per crush.
    pub satisfaction_score: u32,
}

// ---------------------------------------------------------------------------
// Mode descriptor
// ---------------------------------------------------------------------------

/// Display metadata for a [`GameMode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ModeDescriptor {
    /// The mode this descriptor describes.
    pub id: GameMode,
    /// Display name.
    pub name: String,
    /// One-line description shown in the mode picker.
    pub description: String,
    /// Emoji icon.
    pub icon: String,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// A server-tracked play-through.
///
/// `objects_crushed` is append-only and `total_satisfaction` only grows.
/// `session_duration` is whatever the client reported at start and is
/// never recomputed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Session {
    /// Unique session identifier.
    pub session_id: SessionId,
    /// Player identifier. Always equal to `session_id`; there are no
    /// user accounts.
    pub user_id: SessionId,
    /// Selected game mode.
    pub mode: GameMode,
    /// Catalog ids crushed in this session, oldest first.
    pub objects_crushed: Vec<String>,
    /// Running satisfaction total.
    pub total_satisfaction: i64,
    /// Client-reported duration.
    pub session_duration: i64,
    /// Whether the session has not been ended yet.
    pub active: bool,
    /// When the session was started.
    pub created_at: DateTime<Utc>,
    /// When the session was last ended, if ever.
    pub ended_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Screen position of a crush, in client coordinates.
///
/// Any JSON object is accepted. Unknown keys are ignored, and an axis
/// that is missing or not a number (a string, `null`, a nested value)
/// reads as `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct Position {
    /// Horizontal coordinate.
    #[serde(deserialize_with = "lenient_coordinate")]
    pub x: f64,
    /// Vertical coordinate.
    #[serde(deserialize_with = "lenient_coordinate")]
    pub y: f64,
}

fn lenient_coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(CoordinateVisitor)
}

/// Reads a number as `f64` and anything else as `0.0`.
struct CoordinateVisitor;

impl<'de> Visitor<'de> for CoordinateVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_none<E: de::Error>(self) -> Result<f64, E> {
        Ok(0.0)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<f64, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(0.0)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<f64, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(0.0)
    }
}
