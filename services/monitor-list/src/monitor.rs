//! Monitor records and their display adapter

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fill color for monitors that are up
pub const UP_COLOR: &str = "#079455";
/// Fill color for monitors that are down
pub const DOWN_COLOR: &str = "#d32f2f";
/// Uptime percentage shown beside every title; not derived from checks yet
pub const PLACEHOLDER_PERCENTAGE: u8 = 100;

/// Opaque monitor identifier as issued by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonitorId(String);

impl MonitorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MonitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of probe a monitor runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MonitorType {
    Http,
    Ping,
    Other(String),
}

impl MonitorType {
    /// Whether monitors of this type point at something a browser can open
    pub fn is_addressable(&self) -> bool {
        !matches!(self, MonitorType::Ping)
    }
}

impl From<String> for MonitorType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "http" => MonitorType::Http,
            "ping" => MonitorType::Ping,
            _ => MonitorType::Other(tag),
        }
    }
}

impl From<MonitorType> for String {
    fn from(kind: MonitorType) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for MonitorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorType::Http => write!(f, "http"),
            MonitorType::Ping => write!(f, "ping"),
            MonitorType::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// One historical probe result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    pub status: bool,
    #[serde(default)]
    pub response_time: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A monitor as returned by the data layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    #[serde(rename = "_id")]
    pub id: MonitorId,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub kind: MonitorType,
    #[serde(default)]
    pub status: bool,
    /// Oldest first
    #[serde(default)]
    pub checks: Vec<Check>,
}

impl Monitor {
    /// URL the "Open site" action targets, if the monitor has one
    pub fn site_url(&self) -> Option<&str> {
        if self.kind.is_addressable() {
            self.url.as_deref()
        } else {
            None
        }
    }

    pub fn display(&self) -> DisplayFields {
        let status = StatusLabel::from_status(self.status);
        DisplayFields {
            title: self.name.clone(),
            status,
            status_color: status.color(),
            percentage: PLACEHOLDER_PERCENTAGE,
            checks_latest_first: self.checks.iter().rev().cloned().collect(),
        }
    }
}

/// Up/down label derived from a monitor's status flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLabel {
    Up,
    Down,
}

impl StatusLabel {
    pub fn from_status(status: bool) -> Self {
        if status {
            StatusLabel::Up
        } else {
            StatusLabel::Down
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusLabel::Up => "up",
            StatusLabel::Down => "down",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            StatusLabel::Up => UP_COLOR,
            StatusLabel::Down => DOWN_COLOR,
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a row renderer needs from a single monitor
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFields {
    pub title: String,
    pub status: StatusLabel,
    pub status_color: &'static str,
    pub percentage: u8,
    pub checks_latest_first: Vec<Check>,
}

#[cfg(test)]
pub(crate) fn test_monitor(id: &str, kind: MonitorType, status: bool) -> Monitor {
    Monitor {
        id: MonitorId::new(id),
        name: format!("Monitor {}", id),
        url: Some(format!("https://{}.example.com", id)),
        kind,
        status,
        checks: Vec::new(),
    }
}
