//! In-memory session store.
//!
//! [`SessionStore`] owns every [`Session`] for the lifetime of the
//! process. Sessions are never removed. All mutation happens under a
//! single write guard so a crush's append and its satisfaction increment
//! are never observed separately, and concurrent crushes on the same
//! session cannot lose updates.

use std::collections::BTreeMap;

use chrono::Utc;
use crushsim_types::{
    CrushRequest, CrushResult, Session, SessionId, SessionStats, StartSessionRequest,
};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::catalog::Catalog;

/// Errors returned by [`SessionStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No session has the given id.
    #[error("session {0} not found")]
    SessionNotFound(SessionId),

    /// The catalog has no object with the given id.
    #[error("object {0} not found")]
    ObjectNotFound(String),
}

/// Process-lifetime map of session id to session state.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<BTreeMap<SessionId, Session>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new active session and return its id.
    ///
    /// The request's history and totals are stored as given; they are
    /// not checked against the catalog.
    pub async fn start(&self, request: StartSessionRequest) -> SessionId {
        let mut sessions = self.sessions.write().await;

        let mut session_id = SessionId::new();
        while sessions.contains_key(&session_id) {
            session_id = SessionId::new();
        }

        let mode = request.mode;
        sessions.insert(
            session_id,
            Session {
                session_id,
                user_id: session_id,
                mode: request.mode,
                objects_crushed: request.objects_crushed,
                total_satisfaction: request.total_satisfaction,
                session_duration: request.session_duration,
                active: true,
                created_at: Utc::now(),
                ended_at: None,
            },
        );

        info!(%session_id, %mode, "Session started");
        session_id
    }

    /// Record a crush of `request.object_id` against a session.
    ///
    /// The session is looked up before the object, so an unknown session
    /// is reported even when the object id is also unknown. Neither
    /// failure mutates anything. Ended sessions still accept crushes.
    pub async fn crush(
        &self,
        session_id: SessionId,
        catalog: &Catalog,
        request: &CrushRequest,
    ) -> Result<CrushResult, StoreError> {
        let mut sessions = self.sessions.write().await;

        let session = sessions
            .get_mut(&session_id)
            .ok_or(StoreError::SessionNotFound(session_id))?;

        let object = catalog
            .get(&request.object_id)
            .ok_or_else(|| StoreError::ObjectNotFound(request.object_id.clone()))?;

        session.objects_crushed.push(object.id.clone());
        session.total_satisfaction = session
            .total_satisfaction
            .saturating_add(i64::from(object.satisfaction_score));

        debug!(
            %session_id,
            object_id = %object.id,
            force = request.force,
            x = request.position.x,
            y = request.position.y,
            total_satisfaction = session.total_satisfaction,
            "Object crushed"
        );

        Ok(CrushResult {
            object: object.clone(),
            success: true,
            satisfaction_gained: object.satisfaction_score,
            particles: object.particles,
            sound: object.sound.clone(),
            vibration: object.vibration_pattern.clone(),
            animation_duration: object.crush_time,
            force_applied: request.force,
        })
    }

    /// Aggregate statistics for a session.
    pub async fn stats(&self, session_id: SessionId) -> Result<SessionStats, StoreError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&session_id)
            .map(SessionStats::from)
            .ok_or(StoreError::SessionNotFound(session_id))
    }

    /// Mark a session ended and return its final snapshot.
    ///
    /// Ending an already-ended session succeeds again and re-stamps
    /// `ended_at`.
    pub async fn end(&self, session_id: SessionId) -> Result<Session, StoreError> {
        let mut sessions = self.sessions.write().await;

        let session = sessions
            .get_mut(&session_id)
            .ok_or(StoreError::SessionNotFound(session_id))?;

        let was_active = session.active;
        session.active = false;
        session.ended_at = Some(Utc::now());

        info!(
            %session_id,
            was_active,
            total_crushed = session.objects_crushed.len(),
            total_satisfaction = session.total_satisfaction,
            "Session ended"
        );

        Ok(session.clone())
    }

    /// Snapshot of a single session, if it exists.
    pub async fn get(&self, session_id: SessionId) -> Option<Session> {
        self.sessions.read().await.get(&session_id).cloned()
    }

    /// Number of sessions ever started.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether no session has been started yet.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
