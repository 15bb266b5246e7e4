//! Overlay and floating-element configuration.
//!
//! Both configs default from [`crate::constants`] and accept string overrides
//! so a host can forward `data-*` attributes without knowing the field types.

use crate::constants::*;
use crate::error::ConfigError;
use crate::magnetic::MagneticField;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    pub smoothing: f32,
    pub trail_capacity: usize,
    pub idle_hide: Duration,
    pub magnetic_radius: f32,
    pub magnetic_strength: f32,
    pub interactive_selector: String,
    pub trail_base_size: f32,
    pub trail_base_opacity: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            smoothing: SMOOTHING_ALPHA,
            trail_capacity: TRAIL_CAPACITY,
            idle_hide: Duration::from_millis(IDLE_HIDE_MS),
            magnetic_radius: MAGNETIC_RADIUS_PX,
            magnetic_strength: MAGNETIC_STRENGTH,
            interactive_selector: DEFAULT_INTERACTIVE_SELECTOR.to_string(),
            trail_base_size: TRAIL_BASE_SIZE,
            trail_base_opacity: TRAIL_BASE_OPACITY,
        }
    }
}

impl CursorConfig {
    /// Keys accepted by [`CursorConfig::apply_override`].
    pub const KEYS: &'static [&'static str] = &[
        "smoothing",
        "trail-length",
        "idle-ms",
        "magnetic-radius",
        "magnetic-strength",
        "selector",
        "trail-size",
        "trail-opacity",
    ];

    pub fn magnetic_field(&self) -> MagneticField {
        MagneticField::new(self.magnetic_radius, self.magnetic_strength)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // alpha must stay strictly inside (0, 1) or the tick never converges
        check_range("smoothing", self.smoothing as f64, 0.001, 0.999)?;
        check_range("trail-length", self.trail_capacity as f64, 0.0, 64.0)?;
        check_range("idle-ms", self.idle_hide.as_millis() as f64, 1.0, 600_000.0)?;
        check_range("magnetic-radius", self.magnetic_radius as f64, 0.0, 10_000.0)?;
        check_range("magnetic-strength", self.magnetic_strength as f64, 0.0, 1.0)?;
        check_range("trail-size", self.trail_base_size as f64, 0.0, 512.0)?;
        check_range("trail-opacity", self.trail_base_opacity as f64, 0.0, 1.0)?;
        if self.interactive_selector.trim().is_empty() {
            return Err(ConfigError::Parse {
                key: "selector",
                value: self.interactive_selector.clone(),
            });
        }
        Ok(())
    }

    /// Apply one `key = value` override and re-validate.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut next = self.clone();
        match key {
            "smoothing" => next.smoothing = parse("smoothing", value)?,
            "trail-length" => next.trail_capacity = parse("trail-length", value)?,
            "idle-ms" => next.idle_hide = Duration::from_millis(parse("idle-ms", value)?),
            "magnetic-radius" => next.magnetic_radius = parse("magnetic-radius", value)?,
            "magnetic-strength" => next.magnetic_strength = parse("magnetic-strength", value)?,
            "selector" => next.interactive_selector = value.trim().to_string(),
            "trail-size" => next.trail_base_size = parse("trail-size", value)?,
            "trail-opacity" => next.trail_base_opacity = parse("trail-opacity", value)?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

/// Per-instance parameters of a floating element.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatConfig {
    pub delay: Duration,
    pub intensity: f32,
    pub rotate_intensity: f32,
}

impl Default for FloatConfig {
    fn default() -> Self {
        Self {
            delay: Duration::ZERO,
            intensity: 1.0,
            rotate_intensity: 1.0,
        }
    }
}

impl FloatConfig {
    pub const KEYS: &'static [&'static str] = &["delay", "intensity", "rotate-intensity"];

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("delay", self.delay.as_millis() as f64, 0.0, 60_000.0)?;
        check_range("intensity", self.intensity as f64, 0.0, 100.0)?;
        check_range("rotate-intensity", self.rotate_intensity as f64, -100.0, 100.0)?;
        Ok(())
    }

    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut next = self.clone();
        match key {
            "delay" => next.delay = Duration::from_millis(parse("delay", value)?),
            "intensity" => next.intensity = parse("intensity", value)?,
            "rotate-intensity" => next.rotate_intensity = parse("rotate-intensity", value)?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::Parse {
        key,
        value: value.to_string(),
    })
}

fn check_range(key: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            key,
            value,
            min,
            max,
        })
    }
}
