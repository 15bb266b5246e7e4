//! Per-frame geometry/style records handed to the presentation layer.

use crate::indicator::ColorState;
use crate::trail::TrailBuffer;
use std::fmt::Write;

#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorRecord {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
    pub color_state: ColorState,
    pub scale: f32,
}

impl IndicatorRecord {
    pub fn transform(&self) -> String {
        format!("translate(-50%, -50%) scale({:.3})", self.scale)
    }

    /// Inline style declarations for the indicator element.
    pub fn to_css(&self) -> String {
        let mut css = String::with_capacity(128);
        let _ = write!(
            css,
            "left:{:.2}px;top:{:.2}px;width:{:.2}px;height:{:.2}px;opacity:{:.3};transform:{};",
            self.x,
            self.y,
            self.size,
            self.size,
            self.opacity,
            self.transform()
        );
        css
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSegment {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
}

impl TrailSegment {
    pub fn to_css(&self) -> String {
        format!(
            "left:{:.2}px;top:{:.2}px;width:{:.2}px;height:{:.2}px;opacity:{:.3};transform:translate(-50%, -50%);",
            self.x, self.y, self.size, self.size, self.opacity
        )
    }
}

/// One marker per retained trail point, oldest first. Size and opacity decay
/// with age; `visibility` scales opacity so the trail fades with the cursor.
pub fn trail_segments(
    trail: &TrailBuffer,
    base_size: f32,
    base_opacity: f32,
    visibility: f32,
) -> Vec<TrailSegment> {
    let visibility = visibility.clamp(0.0, 1.0);
    trail
        .decay_weights()
        .map(|(p, w)| TrailSegment {
            x: p.x,
            y: p.y,
            size: base_size * w,
            opacity: base_opacity * w * visibility,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatTransform {
    pub offset_x: f32,
    pub offset_y: f32,
    /// Degrees.
    pub rotation: f32,
}

impl FloatTransform {
    pub fn to_css(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) rotate({:.3}deg)",
            self.offset_x, self.offset_y, self.rotation
        )
    }
}
