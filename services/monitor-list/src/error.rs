//! Error types for the monitor list

/// Errors that can occur while loading or acting on monitors
#[derive(Debug, thiserror::Error)]
pub enum MonitorListError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Not authorized")]
    Unauthorized,

    #[error("Monitor not found: {0}")]
    NotFound(String),

    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("Failed to load monitors: {0}")]
    LoadFailed(String),
}

/// Result type alias for monitor list operations
pub type Result<T> = std::result::Result<T, MonitorListError>;
