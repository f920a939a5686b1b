//! Top-level controller for the monitor list page

use std::collections::HashMap;
use std::sync::Arc;

use crate::action_menu::{ActionMenu, MenuEffect, MenuEntry};
use crate::aggregate::StatusCounts;
use crate::collection::{LoadPhase, MonitorCollection};
use crate::delete::{DeleteOutcome, DeleteWorkflow};
use crate::monitor::{DisplayFields, Monitor, MonitorId};
use crate::navigation::{details_path, Navigator, CREATE_MONITOR_PATH};
use crate::notifier::Notifier;
use crate::session::Session;
use crate::store::MonitorStore;

pub const EMPTY_TITLE: &str = "No monitors found";
pub const EMPTY_MESSAGE: &str = "It looks like you don\u{2019}t have any monitors set up yet.";
pub const CREATE_FIRST_LABEL: &str = "Create your first monitor";
pub const CREATE_LABEL: &str = "Create monitor";

/// Which page layout to render
#[derive(Debug, Clone, PartialEq)]
pub enum Layout {
    /// Skeleton placeholders
    Loading,
    LoadFailed { greeting: String, reason: String },
    Empty { greeting: String },
    Populated(PopulatedLayout),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopulatedLayout {
    pub greeting: String,
    pub counts: StatusCounts,
    pub total: usize,
    pub rows: Vec<MonitorRow>,
}

/// Prepared data for one table row, keyed by monitor id
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorRow {
    pub key: MonitorId,
    pub display: DisplayFields,
    pub type_label: String,
    pub menu: MenuView,
}

/// Render state of a row's menu and confirmation modal
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuView {
    pub menu_open: bool,
    pub confirm_open: bool,
    pub deleting: bool,
    pub entries: Vec<MenuEntry>,
}

impl From<&ActionMenu> for MenuView {
    fn from(menu: &ActionMenu) -> Self {
        Self {
            menu_open: menu.is_menu_open(),
            confirm_open: menu.is_confirm_open(),
            deleting: menu.is_deleting(),
            entries: menu.entries(),
        }
    }
}

#[derive(Debug)]
pub struct MonitorListView {
    session: Session,
    collection: MonitorCollection,
    menus: HashMap<MonitorId, ActionMenu>,
    workflow: DeleteWorkflow,
    navigator: Arc<dyn Navigator>,
}

impl MonitorListView {
    pub fn new(
        session: Session,
        store: Arc<dyn MonitorStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            session,
            collection: MonitorCollection::new(Arc::clone(&store)),
            menus: HashMap::new(),
            workflow: DeleteWorkflow::new(store, notifier),
            navigator,
        }
    }

    pub fn monitors(&self) -> &[Monitor] {
        self.collection.monitors()
    }

    pub fn phase(&self) -> &LoadPhase {
        self.collection.phase()
    }

    pub fn menu(&self, id: &MonitorId) -> Option<&ActionMenu> {
        self.menus.get(id)
    }

    /// Initial load when the page is shown
    pub async fn mount(&mut self) {
        tracing::info!("Monitor list mounted for team {}", self.session.team_id);
        self.refresh().await;
    }

    /// Swap in a new session, reloading if it belongs to someone else
    pub async fn set_session(&mut self, session: Session) {
        let changed = !self.session.same_identity(&session);
        self.session = session;
        if changed {
            tracing::info!("Session changed, reloading monitors");
            self.refresh().await;
        }
    }

    pub async fn refresh(&mut self) {
        self.collection.reload(&self.session).await;
        self.reset_menus();
    }

    /// Fresh, closed menus for the rows of the current collection
    fn reset_menus(&mut self) {
        self.menus = self
            .collection
            .monitors()
            .iter()
            .map(|m| (m.id.clone(), ActionMenu::new()))
            .collect();
    }

    pub fn layout(&self) -> Layout {
        let greeting = self.session.greeting();
        let monitors = self.collection.monitors();

        if let LoadPhase::Failed(reason) = self.collection.phase() {
            return Layout::LoadFailed {
                greeting,
                reason: reason.clone(),
            };
        }
        if self.collection.is_loading() && monitors.is_empty() {
            return Layout::Loading;
        }
        if monitors.is_empty() {
            return Layout::Empty { greeting };
        }

        let rows = monitors
            .iter()
            .map(|m| MonitorRow {
                key: m.id.clone(),
                display: m.display(),
                type_label: m.kind.to_string().to_uppercase(),
                menu: self.menus.get(&m.id).map(MenuView::from).unwrap_or_default(),
            })
            .collect();

        let counts = StatusCounts::from_monitors(monitors);
        Layout::Populated(PopulatedLayout {
            greeting,
            counts,
            total: counts.total(),
            rows,
        })
    }

    /// Clicking anywhere else on a row opens its detail view
    pub fn row_click(&self, id: &MonitorId) {
        self.navigator.navigate_to(&details_path(id));
    }

    pub fn create_monitor(&self) {
        self.navigator.navigate_to(CREATE_MONITOR_PATH);
    }

    /// Open a row's menu, closing whatever other row had one open
    pub fn open_menu(&mut self, id: &MonitorId) -> bool {
        let Some(site_url) = self
            .collection
            .monitors()
            .iter()
            .find(|m| &m.id == id)
            .map(|m| m.site_url().map(str::to_string))
        else {
            tracing::debug!("open_menu for unknown monitor {}", id);
            return false;
        };

        for (row_id, menu) in self.menus.iter_mut() {
            if row_id != id {
                menu.dismiss();
            }
        }
        let menu = self.menus.entry(id.clone()).or_default();
        menu.open_menu(id.clone(), site_url);
        menu.is_menu_open()
    }

    pub fn close_menu(&mut self, id: &MonitorId) {
        if let Some(menu) = self.menus.get_mut(id) {
            menu.close_menu();
        }
    }

    pub fn select_open_site(&mut self, id: &MonitorId) {
        let effect = self.menus.get(id).and_then(ActionMenu::select_open_site);
        self.apply(effect);
    }

    pub fn select_details(&mut self, id: &MonitorId) {
        let effect = self.menus.get_mut(id).and_then(ActionMenu::select_details);
        self.apply(effect);
    }

    pub fn select_configure(&mut self, id: &MonitorId) {
        let effect = self
            .menus
            .get_mut(id)
            .and_then(ActionMenu::select_configure);
        self.apply(effect);
    }

    pub fn select_remove(&mut self, id: &MonitorId) -> bool {
        self.menus
            .get_mut(id)
            .map(ActionMenu::select_remove)
            .unwrap_or(false)
    }

    pub fn cancel_confirm(&mut self, id: &MonitorId) {
        if let Some(menu) = self.menus.get_mut(id) {
            menu.cancel_confirm();
        }
    }

    /// The Delete button of a row's confirmation modal
    pub async fn confirm_delete(&mut self, id: &MonitorId) -> Option<DeleteOutcome> {
        let Some(menu) = self.menus.get_mut(id) else {
            tracing::debug!("confirm_delete for unknown monitor {}", id);
            return None;
        };

        let outcome = self
            .workflow
            .remove_monitor(&self.session, menu, &mut self.collection)
            .await?;
        if outcome.is_deleted() {
            self.reset_menus();
        }
        Some(outcome)
    }

    fn apply(&self, effect: Option<MenuEffect>) {
        match effect {
            Some(MenuEffect::Navigate(path)) => self.navigator.navigate_to(&path),
            Some(MenuEffect::OpenExternal(url)) => {
                if let Err(e) = self.navigator.open_external(&url) {
                    tracing::warn!("Failed to open {}: {}", url, e);
                }
            }
            None => {}
        }
    }
}
