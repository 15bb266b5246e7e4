pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod floating;
pub mod geometry;
pub mod idle;
pub mod indicator;
pub mod lifecycle;
pub mod magnetic;
pub mod overlay;
pub mod registry;
pub mod render;
pub mod tracker;
pub mod trail;

pub use config::*;
pub use constants::*;
pub use easing::*;
pub use error::*;
pub use floating::*;
pub use geometry::*;
pub use idle::*;
pub use indicator::*;
pub use lifecycle::*;
pub use magnetic::*;
pub use overlay::*;
pub use registry::*;
pub use render::*;
pub use tracker::*;
pub use trail::*;
