//! Object catalog, game modes, and session store for the Crush Simulator.
//!
//! # Modules
//!
//! - [`catalog`] -- The fixed, read-only list of crushable objects
//! - [`modes`] -- Static game mode descriptors
//! - [`store`] -- In-memory session store (start, crush, stats, end)
//! - [`config`] -- YAML + environment configuration

pub mod catalog;
pub mod config;
pub mod modes;
pub mod store;

pub use catalog::Catalog;
pub use config::{ConfigError, ServiceConfig};
pub use store::{SessionStore, StoreError};
