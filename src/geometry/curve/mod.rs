mod cubic_bezier;

pub(crate) use cubic_bezier::check_count;
pub use cubic_bezier::{CubicBezier, DEFAULT_RESOLUTION};

use crate::error::Result;
use crate::math::{Point2, Vector2};

/// Closed interval of parameters a curve accepts.
///
/// A single Bézier curve spans `[0, 1]`; a composite of `n` curves spans
/// `[0, n]`, one unit per curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Lowest accepted parameter.
    pub t_min: f64,
    /// Highest accepted parameter.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a domain from `t_min` to `t_max`, both inclusive.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns whether `t` lies inside the domain, bounds included.
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        (self.t_min..=self.t_max).contains(&t)
    }
}

/// A curve in the plane traced by a single real parameter.
pub trait Curve {
    /// Returns the point reached at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`](crate::error::GeometryError::ParameterOutOfRange)
    /// if `t` lies outside [`domain`](Self::domain).
    fn evaluate(&self, t: f64) -> Result<Point2>;

    /// Returns the unit direction of travel at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is out of range, or a zero-vector error where
    /// the control points coincide and the curve has no direction.
    fn tangent(&self, t: f64) -> Result<Vector2>;

    /// Returns the parameters this curve accepts.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve ends where it starts.
    fn is_closed(&self) -> bool;
}
