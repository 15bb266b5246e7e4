use glam::Vec2;

/// Viewport coordinate in CSS pixels.
pub type Position = Vec2;

/// Axis-aligned box in viewport coordinates, as reported by the host layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Position {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// True when every component is finite and neither side is negative.
    pub fn is_valid(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

#[inline]
pub fn is_finite_position(p: Position) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start * (1.0 - t) + end * t
}

/// Linear remap of `value` from one range into another. A zero-width input
/// range maps everything onto `out_min`.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span.abs() <= f32::EPSILON {
        return out_min;
    }
    (value - in_min) * (out_max - out_min) / span + out_min
}
