// Host-side tests for interactive-element discovery and hover tracking.

mod common;

use common::*;
use cursor_core::*;

fn registry() -> InteractiveRegistry<FakeSurface> {
    InteractiveRegistry::new(DEFAULT_INTERACTIVE_SELECTOR)
}

#[test]
fn tracks_exactly_the_inserted_elements() {
    let surface = FakeSurface::new();
    let mut reg = registry();
    for i in 0..7 {
        surface.insert(i, box_at(i as f32 * 10.0, 0.0));
    }
    assert_eq!(reg.update(&surface), 7);
    assert_eq!(reg.len(), 7);
    assert_eq!(surface.live_listeners.get(), 7);
}

#[test]
fn repeated_rescans_do_not_accumulate_listeners() {
    let surface = FakeSurface::new();
    let mut reg = registry();
    surface.insert(1, box_at(0.0, 0.0));
    surface.insert(2, box_at(100.0, 0.0));
    for _ in 0..5 {
        reg.update(&surface);
    }
    assert_eq!(surface.live_listeners.get(), 2);
    assert_eq!(surface.attach_calls.get(), 10);
    assert_eq!(surface.detach_calls.get(), 8);
}

#[test]
fn rescan_follows_insertions_and_removals() {
    let surface = FakeSurface::new();
    let mut reg = registry();
    surface.insert(1, box_at(0.0, 0.0));
    reg.update(&surface);
    surface.insert(2, box_at(100.0, 0.0));
    surface.insert(3, box_at(200.0, 0.0));
    assert_eq!(reg.update(&surface), 3);
    surface.remove(2);
    assert_eq!(reg.update(&surface), 2);
    assert!(!reg.contains(&2));
    assert_eq!(surface.live_listeners.get(), 2);
}

#[test]
fn failed_attach_skips_only_that_node() {
    let surface = FakeSurface::new();
    let mut reg = registry();
    surface.insert(1, box_at(0.0, 0.0));
    surface.insert(2, box_at(100.0, 0.0));
    surface.fail_attach.borrow_mut().push(2);
    assert_eq!(reg.update(&surface), 1);
    assert!(reg.contains(&1));
    assert!(!reg.hover_enter(&2, surface.bounds(&2)));
}

#[test]
fn most_recent_hover_wins() {
    let surface = FakeSurface::new();
    let mut reg = registry();
    surface.insert(1, box_at(0.0, 0.0));
    surface.insert(2, box_at(300.0, 0.0));
    reg.update(&surface);

    assert!(reg.hover_enter(&1, surface.bounds(&1)));
    assert!(reg.hover_enter(&2, surface.bounds(&2)));
    assert_eq!(reg.hovered(), Some(&2));
    assert_eq!(reg.target().unwrap().center.x, 300.0);

    // a late leave from the first element does not clear the second
    reg.hover_leave(&1);
    assert_eq!(reg.hovered(), Some(&2));
    reg.hover_leave(&2);
    assert!(!reg.is_hovering());
    assert!(reg.target().is_none());
}

#[test]
fn stale_reference_rehover_is_harmless() {
    let surface = FakeSurface::new();
    let mut reg = registry();
    surface.insert(1, box_at(0.0, 0.0));
    surface.insert(2, box_at(100.0, 0.0));
    reg.update(&surface);

    surface.remove(1);
    // before the rescan the node is still tracked but has no geometry
    assert!(!reg.hover_enter(&1, surface.bounds(&1)));
    assert!(reg.target().is_none());

    reg.update(&surface);
    assert_eq!(reg.len(), 1);
    assert!(!reg.hover_enter(&1, None));
    assert!(!reg.is_hovering());
}

#[test]
fn rescan_drops_hover_on_removed_node() {
    let surface = FakeSurface::new();
    let mut reg = registry();
    surface.insert(1, box_at(0.0, 0.0));
    reg.update(&surface);
    reg.hover_enter(&1, surface.bounds(&1));
    surface.remove(1);
    reg.update(&surface);
    assert!(!reg.is_hovering());
    assert!(reg.target().is_none());
}

#[test]
fn refresh_reads_current_geometry() {
    let surface = FakeSurface::new();
    let mut reg = registry();
    surface.insert(1, box_at(0.0, 0.0));
    reg.update(&surface);
    reg.hover_enter(&1, surface.bounds(&1));
    surface.move_to(1, box_at(40.0, 40.0));
    let t = reg.refresh_target(&surface).unwrap();
    assert_eq!(t.center, glam::Vec2::new(40.0, 40.0));

    surface.remove(1);
    assert!(reg.refresh_target(&surface).is_none());
    assert!(!reg.is_hovering());
}

#[test]
fn clear_detaches_everything() {
    let surface = FakeSurface::new();
    let mut reg = registry();
    surface.insert(1, box_at(0.0, 0.0));
    surface.insert(2, box_at(10.0, 0.0));
    reg.update(&surface);
    reg.hover_enter(&2, surface.bounds(&2));
    reg.clear(&surface);
    assert!(reg.is_empty());
    assert!(!reg.is_hovering());
    assert_eq!(surface.live_listeners.get(), 0);
}
