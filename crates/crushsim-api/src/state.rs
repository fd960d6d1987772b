//! Shared application state for the session API.
//!
//! [`AppState`] owns the catalog and the session store. It is built once
//! per server (or per test) and injected into handlers through Axum's
//! `State` extractor, so independent instances never share sessions.

use crushsim_core::{Catalog, SessionStore};

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) by the caller. The catalog is
/// immutable; the store guards its own mutable map.
#[derive(Debug, Default)]
pub struct AppState {
    /// The fixed object catalog.
    pub catalog: Catalog,
    /// Every session started against this server.
    pub sessions: SessionStore,
}

impl AppState {
    /// Create state with the standard seeded catalog and no sessions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state with a custom catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            sessions: SessionStore::new(),
        }
    }
}
