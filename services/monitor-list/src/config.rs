//! Configuration types for the monitor list

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::session::Session;
use crate::MonitorListError;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Where the uptime backend lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Identity used for every request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Environment variable consulted when `auth_token` is not set
    #[serde(default = "default_auth_token_env")]
    pub auth_token_env: String,
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub first_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auth_token: None,
            auth_token_env: default_auth_token_env(),
            team_id: String::new(),
            first_name: String::new(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000/api/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_auth_token_env() -> String {
    "MONITOR_LIST_AUTH_TOKEN".to_string()
}

impl Config {
    /// Fill the auth token from the environment when the file leaves it out
    pub fn resolve_secrets(&mut self) -> crate::Result<()> {
        self.resolve_secrets_with(|name| std::env::var(name).ok())
    }

    pub fn resolve_secrets_with(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> crate::Result<()> {
        let has_token = self
            .session
            .auth_token
            .as_deref()
            .is_some_and(|t| !t.is_empty());
        if has_token {
            return Ok(());
        }

        match lookup(&self.session.auth_token_env).filter(|t| !t.is_empty()) {
            Some(token) => {
                tracing::debug!("Auth token read from ${}", self.session.auth_token_env);
                self.session.auth_token = Some(token);
                Ok(())
            }
            None => Err(MonitorListError::Config(format!(
                "No auth token: set session.auth_token or ${}",
                self.session.auth_token_env
            ))),
        }
    }

    /// Build the session handed to the list controller
    pub fn session(&self) -> crate::Result<Session> {
        let token = self
            .session
            .auth_token
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| MonitorListError::Config("Auth token not resolved".to_string()))?;
        if self.session.team_id.is_empty() {
            return Err(MonitorListError::Config(
                "session.team_id is required".to_string(),
            ));
        }
        Ok(Session::new(
            token,
            self.session.team_id.clone(),
            self.session.first_name.clone(),
        ))
    }
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        MonitorListError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
