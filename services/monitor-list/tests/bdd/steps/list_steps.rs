//! BDD step definitions for the list layout feature

use cucumber::{given, then, when};

use monitor_list::monitor::{MonitorId, MonitorType};
use monitor_list::Layout;

use crate::world::MonitorListWorld;

#[given("a team with no monitors")]
fn no_monitors(_world: &mut MonitorListWorld) {}

#[given(expr = "a team with {int} monitors up and {int} monitors down")]
fn monitors_up_and_down(world: &mut MonitorListWorld, up: usize, down: usize) {
    for i in 0..up {
        world.add_monitor(&format!("up-{}", i), MonitorType::Http, true);
    }
    for i in 0..down {
        world.add_monitor(&format!("down-{}", i), MonitorType::Http, false);
    }
}

#[given(expr = "an http monitor {string}")]
fn http_monitor(world: &mut MonitorListWorld, id: String) {
    world.add_monitor(&id, MonitorType::Http, true);
}

#[given(expr = "a ping monitor {string}")]
fn ping_monitor(world: &mut MonitorListWorld, id: String) {
    world.add_monitor(&id, MonitorType::Ping, true);
}

#[given("the backend is unreachable")]
fn backend_unreachable(world: &mut MonitorListWorld) {
    world.backend.set_unreachable();
}

#[given("the monitor list is mounted")]
async fn given_mounted(world: &mut MonitorListWorld) {
    world.build_view().mount().await;
}

#[when("the monitor list is mounted")]
async fn when_mounted(world: &mut MonitorListWorld) {
    world.build_view().mount().await;
}

#[when("the first load has not completed")]
fn not_loaded(world: &mut MonitorListWorld) {
    world.build_view();
}

#[when(expr = "the user clicks the row {string}")]
fn click_row(world: &mut MonitorListWorld, id: String) {
    world.view().row_click(&MonitorId::new(id));
}

#[then("the loading layout is shown")]
fn loading_layout(world: &mut MonitorListWorld) {
    assert_eq!(world.view().layout(), Layout::Loading);
}

#[then("the empty-state invitation is shown")]
fn empty_layout(world: &mut MonitorListWorld) {
    let layout = world.view().layout();
    assert!(matches!(layout, Layout::Empty { .. }), "{layout:?}");
}

#[then("the load-failed layout is shown")]
fn failed_layout(world: &mut MonitorListWorld) {
    let layout = world.view().layout();
    assert!(matches!(layout, Layout::LoadFailed { .. }), "{layout:?}");
}

#[then(expr = "the counts show {int} up, {int} down and {int} paused")]
fn counts(world: &mut MonitorListWorld, up: usize, down: usize, paused: usize) {
    match world.view().layout() {
        Layout::Populated(p) => {
            assert_eq!(p.counts.up, up);
            assert_eq!(p.counts.down, down);
            assert_eq!(p.counts.paused, paused);
            assert_eq!(p.total, up + down);
        }
        other => panic!("expected populated layout, got {other:?}"),
    }
}

#[then(expr = "the rows are listed in order {string}")]
fn row_order(world: &mut MonitorListWorld, order: String) {
    let expected: Vec<&str> = order.split(", ").collect();
    match world.view().layout() {
        Layout::Populated(p) => {
            let keys: Vec<String> = p.rows.iter().map(|r| r.key.to_string()).collect();
            assert_eq!(keys, expected);
        }
        other => panic!("expected populated layout, got {other:?}"),
    }
}

#[then(expr = "the app navigates to {string}")]
fn navigated(world: &mut MonitorListWorld, path: String) {
    assert_eq!(world.router.paths().last(), Some(&path));
}
