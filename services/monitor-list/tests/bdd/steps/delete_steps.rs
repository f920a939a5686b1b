//! BDD step definitions for the delete workflow feature

use cucumber::{given, then, when};

use monitor_list::monitor::MonitorId;

use crate::world::MonitorListWorld;

#[given("the backend rejects deletes")]
fn backend_rejects(world: &mut MonitorListWorld) {
    world.backend.reject_deletes();
}

#[given(expr = "{string} was already deleted by another client")]
fn deleted_elsewhere(world: &mut MonitorListWorld, id: String) {
    world.backend.remove(&id);
}

#[when(expr = "the user confirms the deletion of {string}")]
async fn confirm_delete(world: &mut MonitorListWorld, id: String) {
    world.fetches_before_delete = world.backend.fetches();
    world.delete_outcome = world.view().confirm_delete(&MonitorId::new(id)).await;
}

#[when(expr = "the user deletes {string}")]
async fn delete_through_menu(world: &mut MonitorListWorld, id: String) {
    let id = MonitorId::new(id);
    world.view().open_menu(&id);
    world.view().select_remove(&id);
    world.fetches_before_delete = world.backend.fetches();
    world.delete_outcome = world.view().confirm_delete(&id).await;
}

#[then("no delete request was issued")]
fn no_delete(world: &mut MonitorListWorld) {
    assert!(world.backend.deletes().is_empty());
}

#[then("the monitors are reloaded exactly once")]
fn reloaded_once(world: &mut MonitorListWorld) {
    assert_eq!(world.backend.fetches(), world.fetches_before_delete + 1);
}

#[then("the monitors are not reloaded")]
fn not_reloaded(world: &mut MonitorListWorld) {
    assert_eq!(world.backend.fetches(), world.fetches_before_delete);
}

#[then(expr = "the notification {string} is shown")]
fn notification_shown(world: &mut MonitorListWorld, message: String) {
    assert_eq!(world.toasts.messages().last(), Some(&message));
}

#[then("the delete is reported as failed")]
fn reported_failed(world: &mut MonitorListWorld) {
    let outcome = world.delete_outcome.as_ref().expect("no delete outcome");
    assert!(!outcome.is_deleted(), "{outcome:?}");
}

#[then(expr = "the list no longer contains {string}")]
fn list_lacks(world: &mut MonitorListWorld, id: String) {
    assert!(world.view().monitors().iter().all(|m| m.id.as_str() != id));
}

#[then(expr = "the list still contains {string}")]
fn list_has(world: &mut MonitorListWorld, id: String) {
    assert!(world.view().monitors().iter().any(|m| m.id.as_str() == id));
}
