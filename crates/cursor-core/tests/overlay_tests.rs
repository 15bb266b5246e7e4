// Host-side tests for the overlay frame: smoothing, hover and teardown.

mod common;

use common::*;
use cursor_core::*;
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

fn overlay_with(alpha: f32) -> (CursorOverlay<FakeSurface>, PointerTracker) {
    let config = CursorConfig {
        smoothing: alpha,
        magnetic_radius: 150.0,
        magnetic_strength: 0.9,
        ..CursorConfig::default()
    };
    let overlay = CursorOverlay::new(config).unwrap();
    let tracker = overlay.new_tracker();
    (overlay, tracker)
}

#[test]
fn smoothing_worked_example() {
    let (mut overlay, mut tracker) = overlay_with(0.1);
    let surface = FakeSurface::new();
    let t0 = Instant::now();
    tracker.on_move(Vec2::new(100.0, 0.0), t0);

    let f1 = overlay.tick(&mut tracker, &surface, t0);
    assert!(approx(f1.indicator.x, 10.0) && approx(f1.indicator.y, 0.0));
    let f2 = overlay.tick(&mut tracker, &surface, t0);
    assert!(approx(f2.indicator.x, 19.0), "got {}", f2.indicator.x);
}

#[test]
fn distance_to_target_strictly_decreases() {
    for alpha in [0.08, 0.12, 0.15, 0.5, 0.9] {
        let mut p = Vec2::new(-40.0, 25.0);
        let target = Vec2::new(300.0, -120.0);
        let mut last = p.distance(target);
        // stop well above f32 resolution at this magnitude
        while last > 0.01 {
            p = smooth_step(p, target, alpha);
            let d = p.distance(target);
            assert!(d < last, "alpha {} stalled at {}", alpha, d);
            last = d;
        }
    }
}

#[test]
fn ticks_feed_the_trail() {
    let (mut overlay, mut tracker) = overlay_with(0.5);
    let surface = FakeSurface::new();
    let t0 = Instant::now();
    tracker.on_move(Vec2::new(64.0, 0.0), t0);
    let cap = overlay.config().trail_capacity;
    let mut frame = None;
    for _ in 0..cap + 3 {
        frame = Some(overlay.tick(&mut tracker, &surface, t0));
    }
    let frame = frame.unwrap();
    assert_eq!(overlay.trail().len(), cap);
    assert_eq!(frame.trail.len(), cap);
    let newest = frame.trail.last().unwrap();
    assert_eq!((newest.x, newest.y), (frame.indicator.x, frame.indicator.y));
}

#[test]
fn hover_installs_magnet_and_leave_clears_it() {
    let (mut overlay, mut tracker) = overlay_with(0.1);
    let surface = FakeSurface::new();
    surface.insert(1, box_at(150.0, 100.0));
    assert_eq!(overlay.rescan(&mut tracker, &surface), 1);

    let t0 = Instant::now();
    tracker.on_move(Vec2::new(100.0, 100.0), t0);
    overlay.hover_enter(&mut tracker, &1, surface.bounds(&1));
    let frame = overlay.tick(&mut tracker, &surface, t0);
    assert!(frame.state.hovering_interactive);
    assert_eq!(frame.indicator.color_state, ColorState::Hover);
    assert!(approx(tracker.target().x, 130.0));

    overlay.hover_leave(&mut tracker, &1);
    let frame = overlay.tick(&mut tracker, &surface, t0);
    assert!(!frame.state.hovering_interactive);
    assert_eq!(tracker.target(), Vec2::new(100.0, 100.0));
}

#[test]
fn target_follows_hovered_element_geometry() {
    let (mut overlay, mut tracker) = overlay_with(0.1);
    let surface = FakeSurface::new();
    surface.insert(1, box_at(150.0, 100.0));
    overlay.rescan(&mut tracker, &surface);
    let t0 = Instant::now();
    tracker.on_move(Vec2::new(100.0, 100.0), t0);
    overlay.hover_enter(&mut tracker, &1, surface.bounds(&1));

    // layout shift moves the element under a still pointer
    surface.move_to(1, box_at(50.0, 100.0));
    overlay.tick(&mut tracker, &surface, t0);
    assert!(approx(tracker.target().x, 70.0), "got {:?}", tracker.target());
}

#[test]
fn removed_hover_target_falls_back_to_raw_pointer() {
    let (mut overlay, mut tracker) = overlay_with(0.1);
    let surface = FakeSurface::new();
    surface.insert(1, box_at(150.0, 100.0));
    overlay.rescan(&mut tracker, &surface);
    let t0 = Instant::now();
    tracker.on_move(Vec2::new(100.0, 100.0), t0);
    overlay.hover_enter(&mut tracker, &1, surface.bounds(&1));

    surface.remove(1);
    let frame = overlay.tick(&mut tracker, &surface, t0);
    assert!(!frame.state.hovering_interactive);
    assert_eq!(tracker.target(), Vec2::new(100.0, 100.0));

    tracker.on_move(Vec2::new(110.0, 100.0), t0);
    assert_eq!(tracker.target(), Vec2::new(110.0, 100.0));
}

#[test]
fn idle_hide_fades_indicator_and_trail() {
    let (mut overlay, mut tracker) = overlay_with(0.2);
    let surface = FakeSurface::new();
    let t0 = Instant::now();
    tracker.on_move(Vec2::new(10.0, 10.0), t0);
    let visible = overlay.tick(&mut tracker, &surface, t0);
    assert!(approx(visible.indicator.opacity, INDICATOR_OPACITY));

    let t_hide = t0 + Duration::from_millis(IDLE_HIDE_MS);
    let frame = overlay.tick(&mut tracker, &surface, t_hide);
    assert!(frame.state.hidden);
    assert_eq!(frame.indicator.color_state, ColorState::Hidden);

    let settled = t_hide + Duration::from_millis(OPACITY_TRANSITION_MS);
    let frame = overlay.tick(&mut tracker, &surface, settled);
    assert_eq!(frame.indicator.opacity, 0.0);
    assert!(frame.trail.iter().all(|s| s.opacity == 0.0));

    // a fresh move brings it straight back
    tracker.on_move(Vec2::new(12.0, 10.0), settled);
    let frame = overlay.tick(&mut tracker, &surface, settled);
    assert!(!frame.state.hidden);
    assert_eq!(frame.indicator.color_state, ColorState::Idle);
}

#[test]
fn pressed_state_shrinks_indicator_after_transition() {
    let (mut overlay, mut tracker) = overlay_with(0.2);
    let surface = FakeSurface::new();
    let t0 = Instant::now();
    tracker.on_move(Vec2::new(10.0, 10.0), t0);
    tracker.on_down();
    let first = overlay.tick(&mut tracker, &surface, t0);
    assert_eq!(first.indicator.color_state, ColorState::Pressed);
    assert_eq!(first.indicator.size, INDICATOR_SIZE_IDLE);

    let later = t0 + Duration::from_millis(STYLE_TRANSITION_MS);
    let done = overlay.tick(&mut tracker, &surface, later);
    assert_eq!(done.indicator.size, INDICATOR_SIZE_PRESSED);
    assert_eq!(done.indicator.scale, INDICATOR_SCALE_PRESSED);
    assert!(done.indicator.transform().contains("scale(0.800)"));
}

#[test]
fn teardown_detaches_every_listener() {
    let (mut overlay, mut tracker) = overlay_with(0.1);
    let surface = FakeSurface::new();
    for i in 0..4 {
        surface.insert(i, box_at(i as f32 * 200.0, 50.0));
    }
    overlay.rescan(&mut tracker, &surface);
    assert_eq!(surface.live_listeners.get(), 4);
    tracker.on_move(Vec2::new(1.0, 1.0), Instant::now());

    overlay.teardown(&mut tracker, &surface);
    assert_eq!(surface.live_listeners.get(), 0);
    assert!(overlay.registry().is_empty());
    assert!(overlay.trail().is_empty());
    assert!(!tracker.idle_timer().is_armed());
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = CursorConfig {
        smoothing: 1.5,
        ..CursorConfig::default()
    };
    assert!(matches!(
        CursorOverlay::<FakeSurface>::new(config),
        Err(ConfigError::OutOfRange { key: "smoothing", .. })
    ));
}
