use std::fmt;

use super::Point2;

/// Returns the point symmetric to `point` about `pivot` (`2 * pivot - point`).
#[must_use]
pub fn reflect_across(point: Point2, pivot: Point2) -> Point2 {
    Point2::from(pivot.coords * 2.0 - point.coords)
}

/// Formats a point as `(x, y)`.
///
/// Coordinates use the shortest round-trip form, so `100.0` prints as `100`.
pub struct DisplayPoint<'a>(pub &'a Point2);

impl fmt::Display for DisplayPoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_across_pivot() {
        let reflected = reflect_across(Point2::new(200.0, 450.0), Point2::new(400.0, 400.0));
        assert_eq!(reflected, Point2::new(600.0, 350.0));
    }

    #[test]
    fn reflect_across_self_is_identity() {
        let p = Point2::new(3.5, -2.25);
        assert_eq!(reflect_across(p, p), p);
    }

    #[test]
    fn display_drops_trailing_zero_fraction() {
        assert_eq!(DisplayPoint(&Point2::new(100.0, 50.0)).to_string(), "(100, 50)");
        assert_eq!(
            DisplayPoint(&Point2::new(203.125, -1.5)).to_string(),
            "(203.125, -1.5)"
        );
    }
}
