use thiserror::Error;

/// Rejected configuration input, either from code or from string overrides.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    Parse { key: &'static str, value: String },
    #[error("`{key}` = {value} is outside {min}..={max}")]
    OutOfRange {
        key: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// A host surface could not hook hover notifications onto a node.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    #[error("failed to attach hover listener: {0}")]
    Attach(String),
}

/// A floating element could not compute its frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("element geometry unavailable")]
    GeometryUnavailable,
    #[error("non-finite input to floating tick")]
    NonFinite,
}
