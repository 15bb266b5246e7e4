use crate::constants::*;
use crate::easing::{Easing, Tween};
use instant::Instant;
use std::time::Duration;

/// Visual state of the primary indicator, in precedence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorState {
    Hidden,
    Pressed,
    Hover,
    Idle,
}

impl ColorState {
    pub fn resolve(hidden: bool, clicked: bool, hovering: bool) -> Self {
        if hidden {
            ColorState::Hidden
        } else if clicked {
            ColorState::Pressed
        } else if hovering {
            ColorState::Hover
        } else {
            ColorState::Idle
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorState::Hidden => "hidden",
            ColorState::Pressed => "pressed",
            ColorState::Hover => "hover",
            ColorState::Idle => "idle",
        }
    }

    /// `(size px, scale)` for visible states; `None` keeps the previous look.
    fn geometry(self) -> Option<(f32, f32)> {
        match self {
            ColorState::Hidden => None,
            ColorState::Pressed => Some((INDICATOR_SIZE_PRESSED, INDICATOR_SCALE_PRESSED)),
            ColorState::Hover => Some((INDICATOR_SIZE_HOVER, INDICATOR_SCALE_HOVER)),
            ColorState::Idle => Some((INDICATOR_SIZE_IDLE, INDICATOR_SCALE_IDLE)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorLook {
    pub size: f32,
    pub scale: f32,
    pub opacity: f32,
}

/// Eases size, scale and opacity between [`ColorState`]s.
#[derive(Clone, Debug)]
pub struct IndicatorStyle {
    state: ColorState,
    size: Tween,
    scale: Tween,
    opacity: Tween,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        let style = Duration::from_millis(STYLE_TRANSITION_MS);
        let fade = Duration::from_millis(OPACITY_TRANSITION_MS);
        Self {
            state: ColorState::Idle,
            size: Tween::settled(INDICATOR_SIZE_IDLE, style, Easing::OutCubic),
            scale: Tween::settled(INDICATOR_SCALE_IDLE, style, Easing::OutCubic),
            opacity: Tween::settled(INDICATOR_OPACITY, fade, Easing::InOutQuad),
        }
    }
}

impl IndicatorStyle {
    pub fn state(&self) -> ColorState {
        self.state
    }

    pub fn set_state(&mut self, state: ColorState, now: Instant) {
        if state == self.state {
            return;
        }
        self.state = state;
        if let Some((size, scale)) = state.geometry() {
            self.size.retarget(size, now);
            self.scale.retarget(scale, now);
        }
        let opacity = if state == ColorState::Hidden {
            0.0
        } else {
            INDICATOR_OPACITY
        };
        self.opacity.retarget(opacity, now);
    }

    pub fn look(&self, now: Instant) -> IndicatorLook {
        IndicatorLook {
            size: self.size.value(now),
            scale: self.scale.value(now),
            opacity: self.opacity.value(now),
        }
    }

    /// Current opacity relative to the fully visible opacity, in \[0, 1\].
    pub fn visibility(&self, now: Instant) -> f32 {
        (self.opacity.value(now) / INDICATOR_OPACITY).clamp(0.0, 1.0)
    }
}
