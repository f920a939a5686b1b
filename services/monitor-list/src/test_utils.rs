//! Recording test doubles shared by the unit tests

use std::sync::Mutex;

use async_trait::async_trait;

use crate::monitor::{Monitor, MonitorId};
use crate::navigation::Navigator;
use crate::notifier::Notifier;
use crate::store::MonitorStore;
use crate::MonitorListError;

#[derive(Debug, Default)]
struct StoreState {
    monitors: Vec<Monitor>,
    fail_fetch: bool,
    reject_deletes: bool,
    hang_fetches: bool,
    hang_deletes: bool,
    fetch_calls: Vec<(String, String)>,
    delete_calls: Vec<MonitorId>,
}

/// In-memory store: deletes remove the monitor, deleting a missing id fails
#[derive(Debug, Default)]
pub(crate) struct TestStore {
    state: Mutex<StoreState>,
}

impl TestStore {
    pub fn with_monitors(monitors: Vec<Monitor>) -> Self {
        let store = Self::default();
        store.set_monitors(monitors);
        store
    }

    pub fn set_monitors(&self, monitors: Vec<Monitor>) {
        self.state.lock().unwrap().monitors = monitors;
    }

    pub fn fail_fetch(&self, fail: bool) {
        self.state.lock().unwrap().fail_fetch = fail;
    }

    pub fn reject_deletes(&self, reject: bool) {
        self.state.lock().unwrap().reject_deletes = reject;
    }

    /// Fetches record the call and then never resolve
    pub fn hang_fetches(&self, hang: bool) {
        self.state.lock().unwrap().hang_fetches = hang;
    }

    /// Deletes record the call and then never resolve
    pub fn hang_deletes(&self, hang: bool) {
        self.state.lock().unwrap().hang_deletes = hang;
    }

    pub fn fetch_calls(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().fetch_calls.clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.state.lock().unwrap().fetch_calls.len()
    }

    pub fn delete_calls(&self) -> Vec<MonitorId> {
        self.state.lock().unwrap().delete_calls.clone()
    }
}

#[async_trait]
impl MonitorStore for TestStore {
    async fn fetch_monitors(&self, auth_token: &str, team_id: &str) -> crate::Result<Vec<Monitor>> {
        let hang = {
            let mut state = self.state.lock().unwrap();
            state
                .fetch_calls
                .push((auth_token.to_string(), team_id.to_string()));
            if state.fail_fetch {
                return Err(MonitorListError::Http("connection refused".to_string()));
            }
            state.hang_fetches
        };
        if hang {
            std::future::pending::<()>().await;
        }
        Ok(self.state.lock().unwrap().monitors.clone())
    }

    async fn delete_monitor(&self, _auth_token: &str, id: &MonitorId) -> crate::Result<()> {
        let hang = {
            let mut state = self.state.lock().unwrap();
            state.delete_calls.push(id.clone());
            state.hang_deletes
        };
        if hang {
            std::future::pending::<()>().await;
        }

        let mut state = self.state.lock().unwrap();
        if state.reject_deletes {
            return Err(MonitorListError::Api {
                status: 500,
                message: "rejected".to_string(),
            });
        }
        let before = state.monitors.len();
        state.monitors.retain(|m| &m.id != id);
        if state.monitors.len() == before {
            return Err(MonitorListError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
    opened: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }

    fn open_external(&self, url: &str) -> crate::Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
