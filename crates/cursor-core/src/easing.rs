use crate::idle::elapsed_since;
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InExpo,
    OutExpo,
    InOutExpo,
}

impl Easing {
    /// Map linear progress `t` in \[0, 1\] onto the curve. Inputs outside the
    /// range are clamped first.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::InQuad => t * t,
            Easing::OutQuad => t * (2.0 - t),
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::InCubic => t * t * t,
            Easing::OutCubic => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Easing::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
            Easing::InExpo => {
                if t == 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * (t - 1.0))
                }
            }
            Easing::OutExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Easing::InOutExpo => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let t2 = t * 2.0;
                if t2 < 1.0 {
                    0.5 * 2.0_f32.powf(10.0 * (t2 - 1.0))
                } else {
                    0.5 * (2.0 - 2.0_f32.powf(-10.0 * (t2 - 1.0)))
                }
            }
        }
    }
}

/// Eased scalar moving from `from` to `to` over `duration`.
///
/// Retargeting mid-flight restarts from the currently interpolated value so
/// the output never jumps.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    pub fn settled(value: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            start: None,
            duration,
            easing,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn retarget(&mut self, to: f32, now: Instant) {
        if (to - self.to).abs() <= f32::EPSILON {
            return;
        }
        self.from = self.value(now);
        self.to = to;
        self.start = Some(now);
    }

    pub fn value(&self, now: Instant) -> f32 {
        let Some(start) = self.start else {
            return self.to;
        };
        if self.duration.is_zero() {
            return self.to;
        }
        let t = elapsed_since(start, now).as_secs_f32() / self.duration.as_secs_f32();
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        match self.start {
            None => true,
            Some(start) => elapsed_since(start, now) >= self.duration,
        }
    }
}
