//! Data-access layer for the team's monitor collection

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::io::{HttpClient, HttpResponse};
use crate::monitor::{Monitor, MonitorId};
use crate::MonitorListError;

/// Fetch and delete operations the list controller depends on
#[async_trait]
pub trait MonitorStore: Send + Sync + std::fmt::Debug {
    /// Fetch all monitors belonging to the team, in backend order
    async fn fetch_monitors(&self, auth_token: &str, team_id: &str) -> crate::Result<Vec<Monitor>>;

    /// Delete one monitor
    async fn delete_monitor(&self, auth_token: &str, id: &MonitorId) -> crate::Result<()>;
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    msg: Option<String>,
}

/// Monitor store backed by the uptime REST API
pub struct HttpMonitorStore {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for HttpMonitorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpMonitorStore")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl HttpMonitorStore {
    pub fn new(base_url: &str, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        tracing::debug!("Created HttpMonitorStore for {}", base_url);
        Self { base_url, http }
    }

    fn team_url(&self, team_id: &str) -> String {
        format!("{}/monitors/team/{}", self.base_url, team_id)
    }

    fn monitor_url(&self, id: &MonitorId) -> String {
        format!("{}/monitors/{}", self.base_url, id)
    }
}

/// Map non-2xx responses onto error variants; `not_found` builds the 404 error
fn check_status(
    response: HttpResponse,
    not_found: impl FnOnce() -> MonitorListError,
) -> crate::Result<HttpResponse> {
    if response.is_success() {
        return Ok(response);
    }
    match response.status {
        401 | 403 => Err(MonitorListError::Unauthorized),
        404 => Err(not_found()),
        status => {
            let message = serde_json::from_str::<ErrorBody>(&response.body)
                .ok()
                .and_then(|b| b.msg)
                .unwrap_or(response.body);
            Err(MonitorListError::Api { status, message })
        }
    }
}

#[async_trait]
impl MonitorStore for HttpMonitorStore {
    async fn fetch_monitors(&self, auth_token: &str, team_id: &str) -> crate::Result<Vec<Monitor>> {
        let url = self.team_url(team_id);
        let response = self.http.get(&url, auth_token).await?;
        let response = check_status(response, || {
            MonitorListError::TeamNotFound(team_id.to_string())
        })?;
        let envelope: Envelope<Vec<Monitor>> = serde_json::from_str(&response.body)?;
        tracing::debug!(
            "Fetched {} monitors for team {}",
            envelope.data.len(),
            team_id
        );
        Ok(envelope.data)
    }

    async fn delete_monitor(&self, auth_token: &str, id: &MonitorId) -> crate::Result<()> {
        let url = self.monitor_url(id);
        let response = self.http.delete(&url, auth_token).await?;
        check_status(response, || MonitorListError::NotFound(id.to_string()))?;
        Ok(())
    }
}
