//! Cubic Bézier curves and smooth chains of them.
//!
//! A [`CubicBezier`] is evaluated, sampled and inverted (y for a given x)
//! through a piecewise-linear approximation. A [`CompositeBezier`] joins
//! curves end to end, mirroring control points at each shared anchor so the
//! path stays smooth, and can close itself into a loop.
//!
//! ```
//! use bendy::{CompositeBezier, CubicBezier, Point2, DEFAULT_RESOLUTION};
//!
//! let seed = CubicBezier::from_coords((150.0, 50.0), (250.0, 40.0), (200.0, 450.0), (300.0, 400.0));
//! let mut figure_8 = CompositeBezier::new(seed);
//! figure_8.append(Point2::new(450.0, 100.0), Point2::new(250.0, 200.0))?;
//! figure_8.loop_to_start()?;
//!
//! let heights: Vec<f64> = figure_8.estimate_y(135.0, DEFAULT_RESOLUTION, None).collect();
//! assert_eq!(heights.len(), 2);
//! # Ok::<(), bendy::BendyError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod render;

pub use error::{BendyError, Result};
pub use geometry::{CompositeBezier, CubicBezier, Curve, CurveDomain, DEFAULT_RESOLUTION};
pub use math::{Point2, Region2, Vector2};
