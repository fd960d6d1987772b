//! Session API server for the Crush Simulator.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Catalog endpoints** for listing crushable objects and game modes
//! - **Session endpoints** for starting a session, crushing objects,
//!   reading statistics, and ending the session
//!
//! # Architecture
//!
//! Every handler receives an [`AppState`] holding the read-only catalog
//! and the in-memory [`SessionStore`](crushsim_core::SessionStore).
//! Nothing is persisted; sessions live until the process exits.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
