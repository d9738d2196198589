use super::{Point2, Vector2};

/// An axis-aligned region defined by an origin and a size.
///
/// The size may be negative on an axis, which is how an upside-down
/// region (y growing downward in the target space) is represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region2 {
    /// Corner the region is measured from.
    pub origin: Point2,
    /// Extent of the region along each axis.
    pub size: Vector2,
}

impl Region2 {
    /// Creates a new region from an origin and a size.
    #[must_use]
    pub fn new(origin: Point2, size: Vector2) -> Self {
        Self { origin, size }
    }

    /// Creates a region spanning from `min` to `max`.
    #[must_use]
    pub fn from_corners(min: Point2, max: Point2) -> Self {
        Self {
            origin: min,
            size: max - min,
        }
    }

    /// Returns the origin corner.
    #[must_use]
    pub fn min(&self) -> Point2 {
        self.origin
    }

    /// Returns `origin + size`.
    #[must_use]
    pub fn max(&self) -> Point2 {
        self.origin + self.size
    }

    /// Signed horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    /// Signed vertical extent, negative for an upside-down region.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Returns whether the region has zero or non-finite extent on either axis.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let finite = self.origin.x.is_finite()
            && self.origin.y.is_finite()
            && self.size.x.is_finite()
            && self.size.y.is_finite();
        !finite || self.size.x.abs() < super::TOLERANCE || self.size.y.abs() < super::TOLERANCE
    }

    /// Maps `point` from this region's space into `into`'s space.
    ///
    /// An axis on which this region has zero size maps to the middle of
    /// the corresponding axis of `into`.
    #[must_use]
    pub fn interpolate(&self, point: Point2, into: &Region2) -> Point2 {
        let fraction = |value: f64, origin: f64, size: f64| {
            if size.abs() < super::TOLERANCE {
                0.5
            } else {
                (value - origin) / size
            }
        };
        let fx = fraction(point.x, self.origin.x, self.size.x);
        let fy = fraction(point.y, self.origin.y, self.size.y);
        Point2::new(
            into.origin.x + into.size.x * fx,
            into.origin.y + into.size.y * fy,
        )
    }

    /// Returns the same area with the vertical axis flipped.
    #[must_use]
    pub fn upside_down(&self) -> Self {
        Self {
            origin: Point2::new(self.origin.x, self.origin.y + self.size.y),
            size: Vector2::new(self.size.x, -self.size.y),
        }
    }
}
