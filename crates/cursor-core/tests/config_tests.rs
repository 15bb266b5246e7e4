// Host-side tests for configuration defaults, validation and overrides.

use cursor_core::*;
use std::time::Duration;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reference_ranges() {
    assert!(SMOOTHING_ALPHA >= 0.08 && SMOOTHING_ALPHA <= 0.15);
    assert!((5..=8).contains(&TRAIL_CAPACITY));
    assert!(MAGNETIC_RADIUS_PX >= 150.0 && MAGNETIC_RADIUS_PX <= 200.0);
    assert!(MAGNETIC_STRENGTH >= 0.5 && MAGNETIC_STRENGTH <= 0.9);
    assert_eq!(IDLE_HIDE_MS, 5000);

    // pressed < idle < hover, in both size and scale
    assert!(INDICATOR_SIZE_PRESSED < INDICATOR_SIZE_IDLE);
    assert!(INDICATOR_SIZE_IDLE < INDICATOR_SIZE_HOVER);
    assert!(INDICATOR_SCALE_PRESSED < INDICATOR_SCALE_IDLE);
    assert!(INDICATOR_SCALE_IDLE < INDICATOR_SCALE_HOVER);
}

#[test]
fn defaults_validate() {
    assert_eq!(CursorConfig::default().validate(), Ok(()));
    assert_eq!(FloatConfig::default().validate(), Ok(()));
    let c = CursorConfig::default();
    assert_eq!(c.idle_hide, Duration::from_millis(IDLE_HIDE_MS));
    assert_eq!(c.interactive_selector, DEFAULT_INTERACTIVE_SELECTOR);
}

#[test]
fn overrides_parse_and_apply() {
    let mut c = CursorConfig::default();
    c.apply_override("smoothing", "0.1").unwrap();
    c.apply_override("trail-length", " 5 ").unwrap();
    c.apply_override("idle-ms", "2500").unwrap();
    c.apply_override("magnetic-radius", "200").unwrap();
    c.apply_override("selector", "[data-magnetic]").unwrap();
    assert_eq!(c.smoothing, 0.1);
    assert_eq!(c.trail_capacity, 5);
    assert_eq!(c.idle_hide, Duration::from_millis(2500));
    assert_eq!(c.magnetic_field(), MagneticField::new(200.0, MAGNETIC_STRENGTH));
    assert_eq!(c.interactive_selector, "[data-magnetic]");
}

#[test]
fn bad_overrides_leave_config_untouched() {
    let mut c = CursorConfig::default();
    let before = c.clone();

    assert_eq!(
        c.apply_override("speed", "1"),
        Err(ConfigError::UnknownKey("speed".into()))
    );
    assert!(matches!(
        c.apply_override("smoothing", "fast"),
        Err(ConfigError::Parse { key: "smoothing", .. })
    ));
    assert!(matches!(
        c.apply_override("smoothing", "1.0"),
        Err(ConfigError::OutOfRange { key: "smoothing", .. })
    ));
    assert!(matches!(
        c.apply_override("magnetic-strength", "NaN"),
        Err(ConfigError::OutOfRange { .. })
    ));
    assert!(c.apply_override("selector", "   ").is_err());
    assert_eq!(c, before);
}

#[test]
fn float_overrides() {
    let mut f = FloatConfig::default();
    f.apply_override("delay", "250").unwrap();
    f.apply_override("intensity", "1.5").unwrap();
    f.apply_override("rotate-intensity", "-0.5").unwrap();
    assert_eq!(f.delay, Duration::from_millis(250));
    assert_eq!(f.intensity, 1.5);
    assert_eq!(f.rotate_intensity, -0.5);
    assert!(f.apply_override("intensity", "-1").is_err());
    assert!(f.apply_override("delay", "-5").is_err());
    assert_eq!(f.intensity, 1.5);
}

#[test]
fn every_listed_key_is_accepted() {
    let samples = [
        ("smoothing", "0.1"),
        ("trail-length", "6"),
        ("idle-ms", "4000"),
        ("magnetic-radius", "180"),
        ("magnetic-strength", "0.7"),
        ("selector", "a"),
        ("trail-size", "12"),
        ("trail-opacity", "0.5"),
    ];
    assert_eq!(samples.len(), CursorConfig::KEYS.len());
    let mut c = CursorConfig::default();
    for (k, v) in samples {
        assert!(CursorConfig::KEYS.contains(&k));
        c.apply_override(k, v).unwrap();
    }
}

#[test]
fn errors_render_readably() {
    let e = ConfigError::OutOfRange {
        key: "smoothing",
        value: 2.0,
        min: 0.001,
        max: 0.999,
    };
    assert_eq!(e.to_string(), "`smoothing` = 2 is outside 0.001..=0.999");
    assert_eq!(
        MotionError::GeometryUnavailable.to_string(),
        "element geometry unavailable"
    );
}
