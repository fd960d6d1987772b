//! Enumeration types for the Crush Simulator.
//!
//! All enums serialize as lowercase/snake-case strings so the wire format
//! matches what the frontend already sends and renders.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Game modes
// ---------------------------------------------------------------------------

/// A gameplay variant selected when a session starts.
///
/// Modes are descriptive only; the server treats every mode the same.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum GameMode {
    /// The player taps to crush objects at their own pace.
    #[default]
    Interactive,
    /// Objects are crushed automatically in sequence.
    Auto,
    /// A combination of auto and interactive crushing.
    Mixed,
}

impl GameMode {
    /// Every mode, in display order.
    pub const ALL: [Self; 3] = [Self::Interactive, Self::Auto, Self::Mixed];

    /// The wire name of this mode (`interactive`, `auto`, `mixed`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interactive => "interactive",
            Self::Auto => "auto",
            Self::Mixed => "mixed",
        }
    }
}

impl core::fmt::Display for GameMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Object kinds
// ---------------------------------------------------------------------------

/// The broad category of a crushable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ObjectKind {
    /// Drink can.
    Can,
    /// Cardboard packaging.
    Box,
    /// Consumer electronics.
    Electronics,
    /// Glassware.
    Glass,
    /// Plastic containers.
    Plastic,
}

// ---------------------------------------------------------------------------
// Particle materials
// ---------------------------------------------------------------------------

/// Material tag telling the client which particle effect to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ParticleMaterial {
    /// Metal shards.
    Metal,
    /// Paper scraps.
    Paper,
    /// Mixed debris (electronics).
    Mixed,
    /// Glass shards.
    Glass,
    /// Plastic fragments.
    Plastic,
}
