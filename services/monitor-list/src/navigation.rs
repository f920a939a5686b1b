//! Routing and external-link side effects

use crate::monitor::MonitorId;

/// Route to the monitor creation view
pub const CREATE_MONITOR_PATH: &str = "/monitors/create";

pub fn details_path(id: &MonitorId) -> String {
    format!("/monitors/{}", id)
}

pub fn configure_path(id: &MonitorId) -> String {
    format!("/monitors/configure/{}", id)
}

/// Navigation capabilities provided by the host application
pub trait Navigator: Send + Sync + std::fmt::Debug {
    /// Switch to another view of the application
    fn navigate_to(&self, path: &str);

    /// Open a URL in a new browsing context
    fn open_external(&self, url: &str) -> crate::Result<()>;
}

/// Navigator for the command-line front end: routes are printed, URLs are
/// handed to the desktop's default browser.
#[derive(Debug, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate_to(&self, path: &str) {
        tracing::debug!("Navigate to {}", path);
        println!("-> {}", path);
    }

    fn open_external(&self, url: &str) -> crate::Result<()> {
        tracing::info!("Opening {} in browser", url);
        open::that(url)?;
        Ok(())
    }
}
