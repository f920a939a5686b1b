//! Confirmed delete: request, refresh, notify

use std::sync::Arc;

use crate::action_menu::ActionMenu;
use crate::collection::MonitorCollection;
use crate::monitor::MonitorId;
use crate::notifier::Notifier;
use crate::session::Session;
use crate::store::MonitorStore;

pub const DELETE_SUCCESS_MESSAGE: &str = "Monitor deleted successfully.";
pub const DELETE_FAILURE_MESSAGE: &str = "Failed to delete monitor.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(MonitorId),
    Failed { id: MonitorId, reason: String },
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted(_))
    }
}

#[derive(Debug)]
pub struct DeleteWorkflow {
    store: Arc<dyn MonitorStore>,
    notifier: Arc<dyn Notifier>,
}

impl DeleteWorkflow {
    pub fn new(store: Arc<dyn MonitorStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Delete the monitor the menu's confirmation refers to.
    ///
    /// The collection is reloaded only once the server has confirmed the
    /// delete. Errors end up as a failure notification and are never
    /// returned. `None` when the menu has no idle confirmation to act on.
    ///
    /// Dropping the returned future before the server answers leaves the
    /// confirmation open and accepting input again.
    pub async fn remove_monitor(
        &self,
        session: &Session,
        menu: &mut ActionMenu,
        collection: &mut MonitorCollection,
    ) -> Option<DeleteOutcome> {
        let Some(id) = menu.begin_delete() else {
            tracing::debug!("No confirmed delete to run");
            return None;
        };
        let pending = PendingDelete::new(menu);

        tracing::info!("Deleting monitor {}", id);
        match self.store.delete_monitor(&session.auth_token, &id).await {
            Ok(()) => {
                pending.settle(true);
                self.notifier.notify(DELETE_SUCCESS_MESSAGE);
                collection.reload(session).await;
                Some(DeleteOutcome::Deleted(id))
            }
            Err(e) => {
                tracing::warn!("Failed to delete monitor {}: {}", id, e);
                pending.settle(false);
                self.notifier.notify(DELETE_FAILURE_MESSAGE);
                Some(DeleteOutcome::Failed {
                    id,
                    reason: e.to_string(),
                })
            }
        }
    }
}

/// Settles an in-flight delete as failed unless told otherwise before drop
struct PendingDelete<'a> {
    menu: &'a mut ActionMenu,
    settled: bool,
}

impl<'a> PendingDelete<'a> {
    fn new(menu: &'a mut ActionMenu) -> Self {
        Self {
            menu,
            settled: false,
        }
    }

    fn settle(mut self, succeeded: bool) {
        self.menu.finish_delete(succeeded);
        self.settled = true;
    }
}

impl Drop for PendingDelete<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::debug!("Delete abandoned before the server answered");
            self.menu.finish_delete(false);
        }
    }
}
