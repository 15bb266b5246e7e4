//! The cursor overlay: smoothing tick, trail, hover tracking and the render
//! frame built from them.
//!
//! The overlay does not own the [`PointerTracker`]; the host passes it in so
//! the same tracker can be shared with floating elements.

use crate::config::CursorConfig;
use crate::error::ConfigError;
use crate::geometry::{is_finite_position, Position, Rect};
use crate::indicator::{ColorState, IndicatorStyle};
use crate::registry::{InteractiveRegistry, InteractiveSurface};
use crate::render::{trail_segments, IndicatorRecord, TrailSegment};
use crate::tracker::{PointerState, PointerTracker};
use crate::trail::TrailBuffer;
use glam::Vec2;
use instant::Instant;

/// Everything the presentation layer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayFrame {
    pub indicator: IndicatorRecord,
    pub trail: Vec<TrailSegment>,
    pub state: PointerState,
}

/// One exponential-smoothing step: close `alpha` of the remaining distance.
#[inline]
pub fn smooth_step(position: Position, target: Position, alpha: f32) -> Position {
    let next = position + (target - position) * alpha;
    if is_finite_position(next) {
        next
    } else {
        position
    }
}

pub struct CursorOverlay<S: InteractiveSurface> {
    config: CursorConfig,
    position: Position,
    trail: TrailBuffer,
    registry: InteractiveRegistry<S>,
    style: IndicatorStyle,
}

impl<S: InteractiveSurface> CursorOverlay<S> {
    pub fn new(config: CursorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            trail: TrailBuffer::new(config.trail_capacity),
            registry: InteractiveRegistry::new(config.interactive_selector.clone()),
            position: Vec2::ZERO,
            style: IndicatorStyle::default(),
            config,
        })
    }

    /// A tracker configured from this overlay's field and idle window.
    pub fn new_tracker(&self) -> PointerTracker {
        PointerTracker::new(self.config.magnetic_field(), self.config.idle_hide)
    }

    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    pub fn registry(&self) -> &InteractiveRegistry<S> {
        &self.registry
    }

    pub fn state(&self, tracker: &PointerTracker) -> PointerState {
        PointerState {
            position: self.position,
            target_position: tracker.target(),
            clicked: tracker.clicked(),
            hovering_interactive: self.registry.is_hovering(),
            hidden: tracker.hidden(),
        }
    }

    /// Structural change notification from the host.
    pub fn rescan(&mut self, tracker: &mut PointerTracker, surface: &S) -> usize {
        let count = self.registry.update(surface);
        tracker.set_magnet(self.registry.target().copied());
        count
    }

    pub fn hover_enter(
        &mut self,
        tracker: &mut PointerTracker,
        node: &S::Node,
        bounds: Option<Rect>,
    ) {
        self.registry.hover_enter(node, bounds);
        tracker.set_magnet(self.registry.target().copied());
    }

    pub fn hover_leave(&mut self, tracker: &mut PointerTracker, node: &S::Node) {
        self.registry.hover_leave(node);
        tracker.set_magnet(self.registry.target().copied());
    }

    /// Advance one frame: expire idle, refresh the hovered geometry, smooth
    /// toward the target and record the trail.
    pub fn tick(
        &mut self,
        tracker: &mut PointerTracker,
        surface: &S,
        now: Instant,
    ) -> OverlayFrame {
        tracker.poll_idle(now);

        if self.registry.is_hovering() {
            let refreshed = self.registry.refresh_target(surface);
            if refreshed.as_ref() != tracker.magnet() {
                tracker.set_magnet(refreshed);
            }
        }

        self.position = smooth_step(self.position, tracker.target(), self.config.smoothing);
        self.trail.push(self.position);

        let state = self.state(tracker);
        self.style.set_state(
            ColorState::resolve(state.hidden, state.clicked, state.hovering_interactive),
            now,
        );
        let look = self.style.look(now);
        let visibility = self.style.visibility(now);

        OverlayFrame {
            indicator: IndicatorRecord {
                x: self.position.x,
                y: self.position.y,
                size: look.size,
                opacity: look.opacity,
                color_state: self.style.state(),
                scale: look.scale,
            },
            trail: trail_segments(
                &self.trail,
                self.config.trail_base_size,
                self.config.trail_base_opacity,
                visibility,
            ),
            state,
        }
    }

    /// Detach every hover hook and clear transient state.
    pub fn teardown(&mut self, tracker: &mut PointerTracker, surface: &S) {
        self.registry.clear(surface);
        self.trail.clear();
        tracker.reset();
        log::info!("[overlay] torn down");
    }
}
