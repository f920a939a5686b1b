//! The team's monitor collection as of the last load

use std::sync::Arc;

use crate::monitor::Monitor;
use crate::session::Session;
use crate::store::MonitorStore;

/// Where the collection is in its load cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// No fetch has been issued yet
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug)]
pub struct MonitorCollection {
    store: Arc<dyn MonitorStore>,
    monitors: Vec<Monitor>,
    phase: LoadPhase,
}

impl MonitorCollection {
    pub fn new(store: Arc<dyn MonitorStore>) -> Self {
        Self {
            store,
            monitors: Vec::new(),
            phase: LoadPhase::Idle,
        }
    }

    pub fn monitors(&self) -> &[Monitor] {
        &self.monitors
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// True until the first response arrives and while a reload is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Idle | LoadPhase::Loading)
    }

    /// Replace the collection with a fresh fetch for the session's team.
    ///
    /// Rows from the previous load stay visible while the request is in
    /// flight. A failed fetch clears them, so a row deleted on the server can
    /// never survive a failed refresh.
    pub async fn reload(&mut self, session: &Session) -> bool {
        tracing::debug!("Loading monitors for team {}", session.team_id);
        self.phase = LoadPhase::Loading;

        match self
            .store
            .fetch_monitors(&session.auth_token, &session.team_id)
            .await
        {
            Ok(monitors) => {
                tracing::debug!("Loaded {} monitors", monitors.len());
                self.monitors = monitors;
                self.phase = LoadPhase::Loaded;
                true
            }
            Err(e) => {
                tracing::warn!("Failed to load monitors for team {}: {}", session.team_id, e);
                self.monitors.clear();
                self.phase = LoadPhase::Failed(e.to_string());
                false
            }
        }
    }
}
