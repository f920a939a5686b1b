//! Monitor list - status overview and row actions for a team's uptime monitors
//!
//! Loads the team's monitors, derives up/down counts and per-row display
//! state, and drives the action menu and delete-then-refresh workflow.

pub mod action_menu;
pub mod aggregate;
pub mod collection;
pub mod config;
pub mod delete;
pub mod error;
pub mod io;
pub mod list_view;
pub mod monitor;
pub mod navigation;
pub mod notifier;
pub mod render;
pub mod session;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use config::{load_config, Config};
pub use error::{MonitorListError, Result};
pub use list_view::{Layout, MonitorListView};
pub use monitor::{Monitor, MonitorId};
pub use session::Session;

use std::sync::Arc;
use std::time::Duration;

use crate::collection::LoadPhase;
use crate::io::ReqwestHttpClient;
use crate::navigation::ConsoleNavigator;
use crate::notifier::ConsoleNotifier;
use crate::store::HttpMonitorStore;

/// What the command-line front end should do once the list is loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    OpenSite(MonitorId),
    Details(MonitorId),
    Configure(MonitorId),
    Delete { id: MonitorId, confirm: bool },
}

/// Build the controller from configuration, load the list and run one action
pub async fn run(config: Config, action: Action) -> Result<()> {
    let session = config.session()?;
    let http = ReqwestHttpClient::with_timeout(Duration::from_secs(config.api.timeout_seconds))?;
    let store = Arc::new(HttpMonitorStore::new(&config.api.base_url, Arc::new(http)));

    let mut view = MonitorListView::new(
        session,
        store,
        Arc::new(ConsoleNotifier),
        Arc::new(ConsoleNavigator),
    );
    view.mount().await;
    perform(&mut view, action).await
}

/// Drive a mounted view through one user action, printing the result
pub async fn perform(view: &mut MonitorListView, action: Action) -> Result<()> {
    let id = match &action {
        Action::List => {
            print!("{}", view.layout());
            return Ok(());
        }
        Action::OpenSite(id)
        | Action::Details(id)
        | Action::Configure(id)
        | Action::Delete { id, .. } => id.clone(),
    };

    if !view.open_menu(&id) {
        if let LoadPhase::Failed(reason) = view.phase() {
            return Err(MonitorListError::LoadFailed(reason.clone()));
        }
        return Err(MonitorListError::NotFound(id.to_string()));
    }

    match action {
        Action::OpenSite(_) => {
            if view.monitors().iter().any(|m| m.id == id && m.site_url().is_none()) {
                tracing::warn!("Monitor {} has no site to open", id);
            }
            view.select_open_site(&id);
            view.close_menu(&id);
        }
        Action::Details(_) => view.select_details(&id),
        Action::Configure(_) => view.select_configure(&id),
        Action::Delete { confirm, .. } => {
            view.select_remove(&id);
            print!("{}", view.layout());
            if confirm {
                view.confirm_delete(&id).await;
                print!("{}", view.layout());
            } else {
                view.cancel_confirm(&id);
                println!("Delete cancelled; pass --yes to confirm.");
            }
        }
        Action::List => {}
    }
    Ok(())
}
