//! Shared type definitions for the Crush Simulator.
//!
//! This crate is the single source of truth for all types used across the
//! workspace. Types defined here flow downstream to `TypeScript` via
//! `ts-rs` for the React frontend.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for session identifiers
//! - [`enums`] -- Game modes, object kinds, particle materials
//! - [`structs`] -- Catalog objects, mode descriptors, sessions
//! - [`payloads`] -- Request and response bodies for the HTTP API

pub mod enums;
pub mod ids;
pub mod payloads;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{GameMode, ObjectKind, ParticleMaterial};
pub use ids::SessionId;
pub use payloads::{
    ApiStatus, CrushRequest, CrushResult, ModeList, ObjectList, SessionEnded, SessionStarted,
    SessionStats, StartSessionRequest,
};
pub use structs::{CatalogObject, ModeDescriptor, Position, Session};
