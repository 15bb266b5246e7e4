//! Independent per-node motion: pointer-proximity push plus ambient drift.
//!
//! Instances share nothing; each owns its drift seed, clock and last frame.
//! The host feeds the global pointer coordinate and the node's layout box.

use crate::config::FloatConfig;
use crate::constants::*;
use crate::error::{ConfigError, MotionError};
use crate::geometry::{is_finite_position, Position, Rect};
use crate::idle::elapsed_since;
use crate::render::FloatTransform;
use glam::Vec2;
use instant::Instant;
use rand::Rng;
use std::f32::consts::TAU;
use std::time::Duration;

/// Per-instance state exposed to the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatingElementState {
    pub current_offset: Position,
    /// Degrees.
    pub rotation: f32,
}

/// Sinusoidal idle bob, fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientDrift {
    pub amplitude: Vec2,
    pub phase: f32,
}

impl AmbientDrift {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let a = FLOAT_AMBIENT_AMPLITUDE_PX;
        Self {
            amplitude: Vec2::new(rng.gen_range(-a..=a), rng.gen_range(-a..=a)),
            phase: rng.gen_range(0.0..TAU),
        }
    }

    pub fn offset(&self, elapsed: Duration) -> Vec2 {
        let t = elapsed.as_secs_f32() * 1000.0 * FLOAT_AMBIENT_RATE + self.phase;
        Vec2::new(self.amplitude.x * t.sin(), self.amplitude.y * t.cos())
    }
}

/// Bounded proximity weight: closer pointers move the element more, but never
/// by more than `FLOAT_CAP_FACTOR * intensity`.
#[inline]
pub fn movement_factor(distance: f32, intensity: f32) -> f32 {
    let denom = distance + FLOAT_PROXIMITY_C;
    if !denom.is_finite() || denom <= 0.0 {
        return 0.0;
    }
    (FLOAT_PROXIMITY_C / denom).min(FLOAT_CAP_FACTOR) * intensity
}

/// Tilt in degrees from the pointer→element vector normalised by the viewport.
/// A zero viewport dimension contributes nothing on that axis.
#[inline]
pub fn tilt_degrees(vector: Vec2, viewport: Vec2, rotate_intensity: f32) -> f32 {
    let gain = FLOAT_ROTATION_GAIN * rotate_intensity;
    let horizontal = if viewport.x > 0.0 {
        vector.x / viewport.x * gain
    } else {
        0.0
    };
    let vertical = if viewport.y > 0.0 {
        vector.y / viewport.y * gain
    } else {
        0.0
    };
    horizontal - vertical
}

pub fn staggered_delay(index: usize, base: Duration) -> Duration {
    base.saturating_mul(index.min(u32::MAX as usize) as u32)
}

pub fn random_delay<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_millis(rng.gen_range(0..=FLOAT_MAX_RANDOM_DELAY_MS))
}

#[derive(Clone, Debug)]
pub struct FloatingElement {
    config: FloatConfig,
    drift: AmbientDrift,
    started: Option<Instant>,
    state: FloatingElementState,
}

impl FloatingElement {
    pub fn new<R: Rng + ?Sized>(config: FloatConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_drift(config, AmbientDrift::random(rng)))
    }

    pub fn with_drift(config: FloatConfig, drift: AmbientDrift) -> Self {
        Self {
            config,
            drift,
            started: None,
            state: FloatingElementState::default(),
        }
    }

    pub fn config(&self) -> &FloatConfig {
        &self.config
    }

    pub fn drift(&self) -> AmbientDrift {
        self.drift
    }

    pub fn state(&self) -> FloatingElementState {
        self.state
    }

    pub fn transform(&self) -> FloatTransform {
        FloatTransform {
            offset_x: self.state.current_offset.x,
            offset_y: self.state.current_offset.y,
            rotation: self.state.rotation,
        }
    }

    /// True once the activation delay has elapsed since the first tick.
    pub fn is_active(&self, now: Instant) -> bool {
        self.started
            .map(|s| elapsed_since(s, now) >= self.config.delay)
            .unwrap_or(false)
    }

    /// Compute this frame's transform.
    ///
    /// Before the activation delay has elapsed the element holds still. On
    /// error the previous state is kept.
    pub fn tick(
        &mut self,
        now: Instant,
        pointer: Position,
        bounds: Option<Rect>,
        viewport: Vec2,
    ) -> Result<FloatTransform, MotionError> {
        let started = *self.started.get_or_insert(now);
        let elapsed = elapsed_since(started, now);
        if elapsed < self.config.delay {
            return Ok(self.transform());
        }

        let bounds = bounds.ok_or(MotionError::GeometryUnavailable)?;
        if !bounds.is_valid() {
            return Err(MotionError::NonFinite);
        }
        let center = bounds.center();
        if !is_finite_position(pointer) || !is_finite_position(center) {
            return Err(MotionError::NonFinite);
        }

        let vector = pointer - center;
        let factor = movement_factor(vector.length(), self.config.intensity);
        let offset = -vector * factor + self.drift.offset(elapsed);
        let rotation = tilt_degrees(vector, viewport, self.config.rotate_intensity);
        if !is_finite_position(offset) || !rotation.is_finite() {
            return Err(MotionError::NonFinite);
        }

        self.state = FloatingElementState {
            current_offset: offset,
            rotation,
        };
        Ok(self.transform())
    }
}
