// Shared tuning constants for the cursor overlay and floating elements.

// Idle hide
pub const IDLE_HIDE_MS: u64 = 5000; // no pointer movement for this long hides the overlay

// Smoothing tick
pub const SMOOTHING_ALPHA: f32 = 0.12; // fraction of remaining distance closed per frame
pub const TRAIL_CAPACITY: usize = 8; // retained smoothed positions

// Magnetic field
pub const MAGNETIC_RADIUS_PX: f32 = 150.0; // influence radius around a hovered target's centre
pub const MAGNETIC_STRENGTH: f32 = 0.6; // max fraction of the offset pulled toward the centre

// Indicator geometry (px) and scale per visual state
pub const INDICATOR_SIZE_IDLE: f32 = 30.0;
pub const INDICATOR_SIZE_HOVER: f32 = 36.0;
pub const INDICATOR_SIZE_PRESSED: f32 = 24.0;
pub const INDICATOR_SCALE_IDLE: f32 = 1.0;
pub const INDICATOR_SCALE_HOVER: f32 = 1.2;
pub const INDICATOR_SCALE_PRESSED: f32 = 0.8;
pub const INDICATOR_OPACITY: f32 = 0.65;

// Indicator transitions
pub const STYLE_TRANSITION_MS: u64 = 250; // size + scale
pub const OPACITY_TRANSITION_MS: u64 = 300;

// Trail markers
pub const TRAIL_BASE_SIZE: f32 = 10.0;
pub const TRAIL_BASE_OPACITY: f32 = 0.35;

// Floating elements
pub const FLOAT_PROXIMITY_C: f32 = 100.0; // distance softening term
pub const FLOAT_CAP_FACTOR: f32 = 0.02; // upper bound on the proximity factor
pub const FLOAT_AMBIENT_AMPLITUDE_PX: f32 = 10.0; // per-axis drift amplitude bound
pub const FLOAT_AMBIENT_RATE: f32 = 0.001; // radians per millisecond
pub const FLOAT_ROTATION_GAIN: f32 = 5.0; // degrees per normalised viewport distance
pub const FLOAT_MAX_RANDOM_DELAY_MS: u64 = 1000;
pub const FLOAT_STAGGER_BASE_MS: u64 = 100;

// Elements matching this selector take part in hover tracking
pub const DEFAULT_INTERACTIVE_SELECTOR: &str = "a, button, .interactive-element";
