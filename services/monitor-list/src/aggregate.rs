//! Aggregate up/down/paused counts across a monitor collection

use serde::{Deserialize, Serialize};

use crate::monitor::Monitor;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub up: usize,
    pub down: usize,
    /// Always zero until pausing monitors is supported
    pub paused: usize,
}

impl StatusCounts {
    pub fn from_monitors(monitors: &[Monitor]) -> Self {
        let up = monitors.iter().filter(|m| m.status).count();
        Self {
            up,
            down: monitors.len() - up,
            paused: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.up + self.down
    }
}
