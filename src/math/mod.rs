pub mod interp;
pub mod point_2d;
pub mod region_2d;

pub use point_2d::{reflect_across, DisplayPoint};
pub use region_2d::Region2;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
