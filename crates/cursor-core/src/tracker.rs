//! Process-wide pointer state fed by raw input events.
//!
//! One tracker is created when the overlay mounts and shared (by the host)
//! with every floating element, which only read [`PointerTracker::raw`].

use crate::geometry::{is_finite_position, Position};
use crate::idle::IdleTimer;
use crate::magnetic::{MagneticField, MagneticTarget};
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

/// Snapshot of everything the presentation layer styles the cursor from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Smoothed, rendered position.
    pub position: Position,
    /// Raw pointer plus magnetic adjustment.
    pub target_position: Position,
    pub clicked: bool,
    pub hovering_interactive: bool,
    pub hidden: bool,
}

#[derive(Clone, Debug)]
pub struct PointerTracker {
    raw: Position,
    target: Position,
    clicked: bool,
    hidden: bool,
    seen_input: bool,
    idle: IdleTimer,
    field: MagneticField,
    magnet: Option<MagneticTarget>,
}

impl PointerTracker {
    pub fn new(field: MagneticField, idle_window: Duration) -> Self {
        Self {
            raw: Vec2::ZERO,
            target: Vec2::ZERO,
            clicked: false,
            hidden: false,
            seen_input: false,
            idle: IdleTimer::new(idle_window),
            field,
            magnet: None,
        }
    }

    /// Latest raw pointer coordinate, without magnetic adjustment.
    pub fn raw(&self) -> Position {
        self.raw
    }

    pub fn target(&self) -> Position {
        self.target
    }

    pub fn clicked(&self) -> bool {
        self.clicked
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// True once at least one move event has been recorded.
    pub fn has_input(&self) -> bool {
        self.seen_input
    }

    pub fn magnet(&self) -> Option<&MagneticTarget> {
        self.magnet.as_ref()
    }

    pub fn field(&self) -> MagneticField {
        self.field
    }

    pub fn idle_timer(&self) -> &IdleTimer {
        &self.idle
    }

    pub fn on_move(&mut self, raw: Position, now: Instant) {
        if !is_finite_position(raw) {
            log::warn!("[pointer] ignoring non-finite move ({}, {})", raw.x, raw.y);
            return;
        }
        self.raw = raw;
        self.seen_input = true;
        self.hidden = false;
        self.idle.arm(now);
        self.resolve_target();
    }

    pub fn on_leave(&mut self) {
        self.hidden = true;
        self.idle.cancel();
    }

    pub fn on_enter(&mut self) {
        self.hidden = false;
    }

    pub fn on_down(&mut self) {
        self.clicked = true;
    }

    pub fn on_up(&mut self) {
        self.clicked = false;
    }

    /// Install or clear the active magnetic target and re-resolve the target
    /// from the last raw coordinate.
    pub fn set_magnet(&mut self, magnet: Option<MagneticTarget>) {
        self.magnet = magnet;
        if self.seen_input {
            self.resolve_target();
        }
    }

    /// Hide when the idle window has elapsed. Returns true on the transition.
    pub fn poll_idle(&mut self, now: Instant) -> bool {
        if self.idle.take_expired(now) {
            log::debug!("[pointer] idle for {:?}; hiding", self.idle.window());
            self.hidden = true;
            return true;
        }
        false
    }

    /// Drop pending timers and transient flags; used on unmount.
    pub fn reset(&mut self) {
        self.idle.cancel();
        self.magnet = None;
        self.clicked = false;
        self.target = self.raw;
    }

    fn resolve_target(&mut self) {
        self.target = self.field.resolve(self.raw, self.magnet.as_ref());
    }
}
