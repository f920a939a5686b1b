//! Plain-text rendering of a prepared layout for the terminal

use std::fmt;

use crate::action_menu::{CONFIRM_BODY, CONFIRM_CANCEL_LABEL, CONFIRM_DELETE_LABEL, CONFIRM_TITLE};
use crate::list_view::{
    Layout, MonitorRow, PopulatedLayout, CREATE_FIRST_LABEL, CREATE_LABEL, EMPTY_MESSAGE,
    EMPTY_TITLE,
};

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Loading => writeln!(f, "Loading monitors..."),
            Layout::LoadFailed { greeting, reason } => {
                writeln!(f, "{}", greeting)?;
                writeln!(f)?;
                writeln!(f, "Failed to load monitors: {}", reason)
            }
            Layout::Empty { greeting } => {
                writeln!(f, "{}", greeting)?;
                writeln!(f)?;
                writeln!(f, "{}", EMPTY_TITLE)?;
                writeln!(f, "{}", EMPTY_MESSAGE)?;
                writeln!(f, "[{}]", CREATE_FIRST_LABEL)
            }
            Layout::Populated(populated) => write!(f, "{}", populated),
        }
    }
}

impl fmt::Display for PopulatedLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}    [{}]", self.greeting, CREATE_LABEL)?;
        writeln!(
            f,
            "Up: {}  Down: {}  Paused: {}",
            self.counts.up, self.counts.down, self.counts.paused
        )?;
        writeln!(f)?;
        writeln!(f, "Current monitors ({})", self.total)?;
        writeln!(
            f,
            "{:<32} {:<6} {:>13} {:<8} {}",
            "Host", "Status", "Response Time", "Type", "Id"
        )?;
        for row in &self.rows {
            write_row(f, row)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, row: &MonitorRow) -> fmt::Result {
    let display = &row.display;
    let host = format!("{} {}%", display.title, display.percentage);
    let latest = display
        .checks_latest_first
        .first()
        .and_then(|c| c.response_time)
        .map(|ms| format!("{} ms", ms))
        .unwrap_or_else(|| "-".to_string());
    writeln!(
        f,
        "{:<32} {:<6} {:>13} {:<8} {}",
        host,
        display.status.as_str(),
        latest,
        row.type_label,
        row.key
    )?;

    if row.menu.menu_open {
        for entry in &row.menu.entries {
            let suffix = if entry.enabled { "" } else { " (disabled)" };
            writeln!(f, "    - {}{}", entry.kind.label(), suffix)?;
        }
    }
    if row.menu.confirm_open {
        writeln!(f, "    {}", CONFIRM_TITLE)?;
        writeln!(f, "    {}", CONFIRM_BODY)?;
        if row.menu.deleting {
            writeln!(f, "    Deleting...")?;
        } else {
            writeln!(f, "    [{}] [{}]", CONFIRM_CANCEL_LABEL, CONFIRM_DELETE_LABEL)?;
        }
    }
    Ok(())
}
