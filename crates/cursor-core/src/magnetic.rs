//! Attraction of the cursor target toward the hovered interactive element.

use crate::geometry::{is_finite_position, Position, Rect};

/// The single hovered element currently pulling on the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticTarget {
    pub bounds: Rect,
    pub center: Position,
}

impl MagneticTarget {
    /// Build from a layout box. Degenerate or non-finite boxes yield `None`.
    pub fn from_bounds(bounds: Rect) -> Option<Self> {
        if !bounds.is_valid() {
            return None;
        }
        Some(Self {
            bounds,
            center: bounds.center(),
        })
    }
}

/// Influence radius and strength of the magnetic pull.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticField {
    pub radius: f32,
    pub strength: f32,
}

impl MagneticField {
    pub fn new(radius: f32, strength: f32) -> Self {
        Self { radius, strength }
    }

    /// Fraction of the pointer→centre offset removed for a pointer at
    /// `distance`. Zero outside the field or when the field is degenerate.
    pub fn pull_factor(&self, distance: f32) -> f32 {
        if self.radius.is_nan()
            || self.radius <= 0.0
            || !distance.is_finite()
            || distance >= self.radius
        {
            return 0.0;
        }
        let strength = self.strength.max(0.0);
        let pull = 1.0 - distance / self.radius;
        (pull * strength).clamp(0.0, strength)
    }

    /// Effective cursor target for a raw pointer coordinate.
    ///
    /// With no target, or a pointer at or beyond `radius` from its centre, the
    /// raw coordinate is returned unchanged.
    pub fn resolve(&self, raw: Position, target: Option<&MagneticTarget>) -> Position {
        let Some(target) = target else {
            return raw;
        };
        if !is_finite_position(target.center) {
            return raw;
        }
        let delta = raw - target.center;
        let pull_factor = self.pull_factor(delta.length());
        if pull_factor == 0.0 {
            return raw;
        }
        raw - delta * pull_factor
    }
}
