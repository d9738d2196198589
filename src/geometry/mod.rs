pub mod composite;
pub mod curve;

pub use composite::CompositeBezier;
pub use curve::{CubicBezier, Curve, CurveDomain, DEFAULT_RESOLUTION};
