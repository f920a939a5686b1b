//! Per-row action menu and delete-confirmation state machine
//!
//! ```text
//! Closed --open_menu--> MenuOpen --select_remove--> ConfirmOpen
//!   ^                     |  close_menu / details / configure   |
//!   +---------------------+-------------------------------------+
//!                              cancel_confirm / delete succeeded
//! ```
//!
//! The machine is pure: selecting an entry that leaves the view returns a
//! [`MenuEffect`] for the caller to carry out.

use crate::monitor::MonitorId;
use crate::navigation::{configure_path, details_path};

pub const CONFIRM_TITLE: &str = "Do you really want to delete this monitor?";
pub const CONFIRM_BODY: &str = "Once deleted, this monitor cannot be retrieved.";
pub const CONFIRM_CANCEL_LABEL: &str = "Cancel";
pub const CONFIRM_DELETE_LABEL: &str = "Delete";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    MenuOpen {
        target_id: MonitorId,
        /// `None` when the monitor has nothing a browser can open
        target_url: Option<String>,
    },
    ConfirmOpen {
        target_id: MonitorId,
        /// A delete request for the target is awaiting its response
        deleting: bool,
    },
}

/// Side effect requested by a menu selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEffect {
    Navigate(String),
    OpenExternal(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntryKind {
    OpenSite,
    Details,
    Incidents,
    Configure,
    Remove,
}

impl MenuEntryKind {
    pub fn label(self) -> &'static str {
        match self {
            MenuEntryKind::OpenSite => "Open site",
            MenuEntryKind::Details => "Details",
            MenuEntryKind::Incidents => "Incidents",
            MenuEntryKind::Configure => "Configure",
            MenuEntryKind::Remove => "Remove",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub kind: MenuEntryKind,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ActionMenu {
    state: MenuState,
}

impl ActionMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn is_menu_open(&self) -> bool {
        matches!(self.state, MenuState::MenuOpen { .. })
    }

    pub fn is_confirm_open(&self) -> bool {
        matches!(self.state, MenuState::ConfirmOpen { .. })
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self.state, MenuState::ConfirmOpen { deleting: true, .. })
    }

    pub fn target_url(&self) -> Option<&str> {
        match &self.state {
            MenuState::MenuOpen { target_url, .. } => target_url.as_deref(),
            _ => None,
        }
    }

    /// Open the menu for a row, replacing whatever this menu was showing
    pub fn open_menu(&mut self, id: MonitorId, url: Option<String>) {
        if self.is_deleting() {
            tracing::debug!("Ignoring open_menu while a delete is pending");
            return;
        }
        tracing::debug!("Opening action menu for monitor {}", id);
        self.state = MenuState::MenuOpen {
            target_id: id,
            target_url: url,
        };
    }

    pub fn close_menu(&mut self) {
        if self.is_menu_open() {
            self.state = MenuState::Closed;
        }
    }

    /// Close the menu or an idle confirmation, whichever is showing
    pub fn dismiss(&mut self) {
        if !self.is_deleting() {
            self.state = MenuState::Closed;
        }
    }

    /// Entries to render; empty while the menu is not open
    pub fn entries(&self) -> Vec<MenuEntry> {
        let MenuState::MenuOpen { target_url, .. } = &self.state else {
            return Vec::new();
        };

        let mut entries = Vec::with_capacity(5);
        if target_url.is_some() {
            entries.push(MenuEntry {
                kind: MenuEntryKind::OpenSite,
                enabled: true,
            });
        }
        entries.push(MenuEntry {
            kind: MenuEntryKind::Details,
            enabled: true,
        });
        entries.push(MenuEntry {
            kind: MenuEntryKind::Incidents,
            enabled: false,
        });
        entries.push(MenuEntry {
            kind: MenuEntryKind::Configure,
            enabled: true,
        });
        entries.push(MenuEntry {
            kind: MenuEntryKind::Remove,
            enabled: true,
        });
        entries
    }

    /// Leaves the menu open; only valid when the target has a URL
    pub fn select_open_site(&self) -> Option<MenuEffect> {
        match self.target_url() {
            Some(url) => Some(MenuEffect::OpenExternal(url.to_string())),
            None => {
                tracing::debug!("Open site selected without an addressable URL");
                None
            }
        }
    }

    pub fn select_details(&mut self) -> Option<MenuEffect> {
        self.navigate_away(details_path)
    }

    pub fn select_configure(&mut self) -> Option<MenuEffect> {
        self.navigate_away(configure_path)
    }

    fn navigate_away(&mut self, path: fn(&MonitorId) -> String) -> Option<MenuEffect> {
        let MenuState::MenuOpen { target_id, .. } = &self.state else {
            return None;
        };
        let effect = MenuEffect::Navigate(path(target_id));
        self.state = MenuState::Closed;
        Some(effect)
    }

    /// Swap the menu for the delete confirmation. Returns false when no menu
    /// was open.
    pub fn select_remove(&mut self) -> bool {
        let MenuState::MenuOpen { target_id, .. } = &self.state else {
            return false;
        };
        self.state = MenuState::ConfirmOpen {
            target_id: target_id.clone(),
            deleting: false,
        };
        true
    }

    pub fn cancel_confirm(&mut self) {
        if matches!(self.state, MenuState::ConfirmOpen { deleting: false, .. }) {
            self.state = MenuState::Closed;
        }
    }

    /// Mark the confirmed delete as in flight and hand back its target.
    /// `None` unless an idle confirmation is showing.
    pub fn begin_delete(&mut self) -> Option<MonitorId> {
        match &mut self.state {
            MenuState::ConfirmOpen {
                target_id,
                deleting,
            } if !*deleting => {
                *deleting = true;
                Some(target_id.clone())
            }
            _ => None,
        }
    }

    /// Settle an in-flight delete: success closes the confirmation, failure
    /// leaves it open and accepting input again.
    pub fn finish_delete(&mut self, succeeded: bool) {
        if !self.is_confirm_open() {
            return;
        }
        if succeeded {
            self.state = MenuState::Closed;
        } else if let MenuState::ConfirmOpen { deleting, .. } = &mut self.state {
            *deleting = false;
        }
    }
}
