use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::interp::{inverse_lerp, lerp, strictly_between};
use crate::math::{reflect_across, DisplayPoint, Point2, Region2, Vector2, TOLERANCE};

use super::{Curve, CurveDomain};

/// Number of linear segments used by [`CubicBezier::estimate_y`] when the
/// caller has no better figure.
pub const DEFAULT_RESOLUTION: usize = 100;

/// A cubic Bézier curve constructed from four anchor points.
///
/// `a0` and `a3` are the endpoints; `a1` and `a2` pull the tangent at the
/// start and end respectively. The parametric form is:
///
/// `B(t) = a0·(1−t)³ + a1·3(1−t)²t + a2·3(1−t)t² + a3·t³`, `t ∈ [0, 1]`.
///
/// Curves are immutable values. Joining produces a new curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    a0: Point2,
    a1: Point2,
    a2: Point2,
    a3: Point2,
}

impl CubicBezier {
    /// Creates a new curve from its four anchors. Any four points are valid.
    #[must_use]
    pub fn new(a0: Point2, a1: Point2, a2: Point2, a3: Point2) -> Self {
        Self { a0, a1, a2, a3 }
    }

    /// Creates a new curve from four `(x, y)` coordinate pairs.
    #[must_use]
    pub fn from_coords(
        a0: (f64, f64),
        a1: (f64, f64),
        a2: (f64, f64),
        a3: (f64, f64),
    ) -> Self {
        let p = |(x, y): (f64, f64)| Point2::new(x, y);
        Self::new(p(a0), p(a1), p(a2), p(a3))
    }

    /// Returns the start point.
    #[must_use]
    pub fn a0(&self) -> Point2 {
        self.a0
    }

    /// Returns the control point that shapes the start tangent.
    #[must_use]
    pub fn a1(&self) -> Point2 {
        self.a1
    }

    /// Returns the control point that shapes the end tangent.
    #[must_use]
    pub fn a2(&self) -> Point2 {
        self.a2
    }

    /// Returns the end point.
    #[must_use]
    pub fn a3(&self) -> Point2 {
        self.a3
    }

    /// Returns the anchors in order `[a0, a1, a2, a3]`.
    #[must_use]
    pub fn anchors(&self) -> [Point2; 4] {
        [self.a0, self.a1, self.a2, self.a3]
    }

    /// Componentwise minimum of the four anchors.
    #[must_use]
    pub fn min(&self) -> Point2 {
        Point2::new(
            self.a0.x.min(self.a1.x).min(self.a2.x).min(self.a3.x),
            self.a0.y.min(self.a1.y).min(self.a2.y).min(self.a3.y),
        )
    }

    /// Componentwise maximum of the four anchors.
    #[must_use]
    pub fn max(&self) -> Point2 {
        Point2::new(
            self.a0.x.max(self.a1.x).max(self.a2.x).max(self.a3.x),
            self.a0.y.max(self.a1.y).max(self.a2.y).max(self.a3.y),
        )
    }

    /// Region spanning [`min`](Self::min) to [`max`](Self::max).
    ///
    /// The curve never leaves the hull of its anchors, so every solved
    /// point lies inside this region.
    #[must_use]
    pub fn bounds(&self) -> Region2 {
        Region2::from_corners(self.min(), self.max())
    }

    /// Calculates the point at normalized parameter `t`.
    ///
    /// `t == 0.0` and `t == 1.0` return `a0` and `a3` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if `t` is outside `[0, 1]`.
    pub fn solve(&self, t: f64) -> Result<Point2> {
        check_parameter(t)?;
        Ok(self.point_at(t))
    }

    /// Calculates `count` evenly spaced points along the curve, skipping
    /// the first `start` of them.
    ///
    /// The points are produced lazily; call again to restart.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CountOutOfRange`] if `count` is zero.
    pub fn points(&self, count: usize, start: usize) -> Result<impl Iterator<Item = Point2>> {
        check_count(count)?;
        Ok(self.samples(count, start))
    }

    /// Calculates `count` chained line segments that approximate the curve.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CountOutOfRange`] if `count` is zero.
    pub fn lines(&self, count: usize) -> Result<impl Iterator<Item = (Point2, Point2)>> {
        check_count(count)?;
        Ok(self.chords(count))
    }

    /// Estimates every y at which the curve crosses the vertical line at `x`.
    ///
    /// The curve is approximated by `resolution` line segments walked from
    /// `a0` to `a3`, so crossings come out in traversal order and a curve
    /// that folds back on itself can yield several values. When `x` equals
    /// the x of `a0` or `a3` that endpoint's y is yielded first, even if a
    /// sampled point later yields it again.
    #[allow(clippy::float_cmp)]
    pub fn estimate_y(&self, x: f64, resolution: usize) -> impl Iterator<Item = f64> {
        tracing::debug!(x, resolution, "estimating y");

        let endpoints = [
            (x == self.a0.x).then_some(self.a0.y),
            (x == self.a3.x).then_some(self.a3.y),
        ];

        let crossings = self
            .samples(resolution.saturating_add(1), 1)
            .scan(self.a0, move |previous, point| {
                let from = std::mem::replace(previous, point);
                Some(crossing_y(x, from, point))
            })
            .flatten();

        endpoints.into_iter().flatten().chain(crossings)
    }

    /// Creates a new curve at the end of this one.
    ///
    /// The new curve starts at `a3` with its first control point mirrored
    /// from `a2`, so the tangent carries smoothly across the joint.
    #[must_use]
    pub fn join(&self, a2: Point2, a3: Point2) -> Self {
        Self::new(self.a3, reflect_across(self.a2, self.a3), a2, a3)
    }

    /// Creates a new curve that connects the end of this curve to the start
    /// of `other`, smooth at both joints.
    #[must_use]
    pub fn join_to_start(&self, other: &CubicBezier) -> Self {
        Self::new(
            self.a3,
            reflect_across(self.a2, self.a3),
            reflect_across(other.a1, other.a0),
            other.a0,
        )
    }

    #[allow(clippy::float_cmp)]
    fn point_at(&self, t: f64) -> Point2 {
        if t == 0.0 {
            return self.a0;
        }
        if t == 1.0 {
            return self.a3;
        }

        let u = 1.0 - t;
        Point2::from(
            self.a0.coords * (u * u * u)
                + self.a1.coords * (3.0 * u * u * t)
                + self.a2.coords * (3.0 * u * t * t)
                + self.a3.coords * (t * t * t),
        )
    }

    /// Line segments for a count already known to be valid.
    pub(crate) fn chords(&self, count: usize) -> impl Iterator<Item = (Point2, Point2)> {
        self.samples(count.saturating_add(1), 1)
            .scan(self.a0, |previous, point| {
                let from = std::mem::replace(previous, point);
                Some((from, point))
            })
    }

    fn samples(&self, count: usize, start: usize) -> impl Iterator<Item = Point2> {
        let curve = *self;
        (start..count).map(move |i| curve.point_at(sample_parameter(i, count)))
    }
}

impl Curve for CubicBezier {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        self.solve(t)
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        check_parameter(t)?;
        let u = 1.0 - t;
        let derivative = (self.a1 - self.a0) * (3.0 * u * u)
            + (self.a2 - self.a1) * (6.0 * u * t)
            + (self.a3 - self.a2) * (3.0 * t * t);
        let len = derivative.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(derivative / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        self.a0 == self.a3
    }
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            DisplayPoint(&self.a0),
            DisplayPoint(&self.a1),
            DisplayPoint(&self.a2),
            DisplayPoint(&self.a3),
        )
    }
}

fn check_parameter(t: f64) -> Result<()> {
    if (0.0..=1.0).contains(&t) {
        Ok(())
    } else {
        Err(GeometryError::ParameterOutOfRange { value: t }.into())
    }
}

pub(crate) fn check_count(count: usize) -> Result<()> {
    if count < 1 {
        return Err(GeometryError::CountOutOfRange { count }.into());
    }
    Ok(())
}

/// Parameter of sample `i` out of `count` evenly spaced samples.
#[allow(clippy::cast_precision_loss)]
fn sample_parameter(i: usize, count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        i as f64 / (count - 1) as f64
    }
}

/// The y at which the segment `from -> to` crosses `x`, if it does.
#[allow(clippy::float_cmp)]
fn crossing_y(x: f64, from: Point2, to: Point2) -> Option<f64> {
    if to.x == x {
        Some(to.y)
    } else if strictly_between(x, from.x, to.x) {
        Some(lerp(from.y, to.y, inverse_lerp(from.x, to.x, x)))
    } else {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn s_curve() -> CubicBezier {
        CubicBezier::from_coords((100.0, 100.0), (300.0, 50.0), (200.0, 450.0), (400.0, 400.0))
    }

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn solve_known_parameters() {
        let curve = s_curve();
        assert_eq!(curve.solve(0.0).unwrap(), p(100.0, 100.0));
        assert_eq!(curve.solve(0.5).unwrap(), p(250.0, 250.0));
        assert_eq!(curve.solve(1.0).unwrap(), p(400.0, 400.0));
    }

    #[test]
    fn solve_out_of_range() {
        let err = s_curve().solve(-1.0).unwrap_err();
        assert_eq!(err.to_string(), "t (-1) must be >= 0.0 and <= 1.0");

        let err = s_curve().solve(1.25).unwrap_err();
        assert_eq!(err.to_string(), "t (1.25) must be >= 0.0 and <= 1.0");

        assert!(s_curve().solve(f64::NAN).is_err());
    }

    #[test]
    fn solve_stays_inside_bounds() {
        let curve = s_curve();
        let (min, max) = (curve.min(), curve.max());
        for i in 0..=200 {
            let t = f64::from(i) / 200.0;
            let q = curve.solve(t).unwrap();
            assert!(q.x >= min.x && q.x <= max.x, "t={t} x={}", q.x);
            assert!(q.y >= min.y && q.y <= max.y, "t={t} y={}", q.y);
        }
    }

    #[test]
    fn points_five() {
        let points: Vec<_> = s_curve().points(5, 0).unwrap().collect();
        assert_eq!(
            points,
            vec![
                p(100.0, 100.0),
                p(203.125, 132.8125),
                p(250.0, 250.0),
                p(296.875, 367.1875),
                p(400.0, 400.0),
            ]
        );
    }

    #[test]
    fn points_from_start_index() {
        let points: Vec<_> = s_curve().points(5, 2).unwrap().collect();
        assert_eq!(
            points,
            vec![p(250.0, 250.0), p(296.875, 367.1875), p(400.0, 400.0)]
        );
    }

    #[test]
    fn points_single_sample_is_start() {
        let points: Vec<_> = s_curve().points(1, 0).unwrap().collect();
        assert_eq!(points, vec![p(100.0, 100.0)]);
    }

    #[test]
    fn points_zero_count() {
        let err = s_curve().points(0, 0).err().unwrap();
        assert_eq!(err.to_string(), "count (0) must be >= 1");
    }

    #[test]
    fn lines_zero_count() {
        let err = s_curve().lines(0).err().unwrap();
        assert_eq!(err.to_string(), "count (0) must be >= 1");
    }

    #[test]
    fn lines_chain_from_start_to_end() {
        let curve = s_curve();
        let lines: Vec<_> = curve.lines(4).unwrap().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].0, curve.a0());
        assert_eq!(lines[3].1, curve.a3());
        for pair in lines.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
        assert_eq!(lines[1], (p(203.125, 132.8125), p(250.0, 250.0)));
    }

    #[test]
    fn lines_single_segment_is_chord() {
        let curve = s_curve();
        let lines: Vec<_> = curve.lines(1).unwrap().collect();
        assert_eq!(lines, vec![(curve.a0(), curve.a3())]);
    }

    #[test]
    fn estimate_y_at_start() {
        let estimates: Vec<_> = s_curve().estimate_y(100.0, DEFAULT_RESOLUTION).collect();
        assert_eq!(estimates, vec![100.0]);
    }

    #[test]
    fn estimate_y_on_sample_point() {
        let estimates: Vec<_> = s_curve().estimate_y(250.0, DEFAULT_RESOLUTION).collect();
        assert_eq!(estimates, vec![250.0]);
    }

    #[test]
    fn estimate_y_keeps_endpoint_duplicate() {
        // a3 matches through the endpoint check and again as the last sample.
        let estimates: Vec<_> = s_curve().estimate_y(400.0, DEFAULT_RESOLUTION).collect();
        assert_eq!(estimates, vec![400.0, 400.0]);
    }

    #[test]
    fn estimate_y_outside_curve() {
        assert_eq!(s_curve().estimate_y(99.0, DEFAULT_RESOLUTION).count(), 0);
        assert_eq!(s_curve().estimate_y(401.0, DEFAULT_RESOLUTION).count(), 0);
    }

    #[test]
    fn estimate_y_single_segment_interpolates_chord() {
        let estimates: Vec<_> = s_curve().estimate_y(175.0, 1).collect();
        assert_eq!(estimates, vec![175.0]);
    }

    #[test]
    fn estimate_y_folded_curve_yields_each_crossing() {
        let curve =
            CubicBezier::from_coords((0.0, 0.0), (300.0, 0.0), (-200.0, 100.0), (100.0, 100.0));
        let estimates: Vec<_> = curve.estimate_y(50.0, DEFAULT_RESOLUTION).collect();
        assert_eq!(estimates.len(), 3);
        assert_relative_eq!(estimates[0], 1.294_187_269_857_969_5, epsilon = 1e-9);
        assert_relative_eq!(estimates[1], 50.0, epsilon = 1e-9);
        assert_relative_eq!(estimates[2], 98.705_812_730_142_03, epsilon = 1e-9);
    }

    #[test]
    fn estimate_y_accuracy_improves_with_resolution() {
        let curve = s_curve();
        let exact = curve.solve(0.3).unwrap();
        let coarse: Vec<_> = curve.estimate_y(exact.x, 4).collect();
        let fine: Vec<_> = curve.estimate_y(exact.x, 397).collect();
        assert_eq!(coarse.len(), 1);
        assert_eq!(fine.len(), 1);
        assert!((fine[0] - exact.y).abs() < (coarse[0] - exact.y).abs());
        assert!((fine[0] - exact.y).abs() < 0.01, "fine={}", fine[0]);
    }

    #[test]
    fn read_only_operations_are_repeatable() {
        let curve = s_curve();
        let a: Vec<_> = curve.points(17, 0).unwrap().collect();
        let b: Vec<_> = curve.points(17, 0).unwrap().collect();
        assert_eq!(a, b);

        let a: Vec<_> = curve.lines(23).unwrap().collect();
        let b: Vec<_> = curve.lines(23).unwrap().collect();
        assert_eq!(a, b);

        let a: Vec<_> = curve.estimate_y(333.0, 50).collect();
        let b: Vec<_> = curve.estimate_y(333.0, 50).collect();
        assert_eq!(a, b);

        assert_eq!(curve.bounds(), curve.bounds());
        assert_eq!(curve.solve(0.42).unwrap(), curve.solve(0.42).unwrap());
    }

    #[test]
    fn join_mirrors_end_control() {
        let curve = s_curve();
        let joined = curve.join(p(450.0, 100.0), p(250.0, 200.0));
        assert_eq!(joined.a0(), curve.a3());
        assert_eq!(
            joined.a1(),
            Point2::from(curve.a3().coords * 2.0 - curve.a2().coords)
        );
        assert_eq!(joined.a1(), p(600.0, 350.0));
        assert_eq!(joined.a2(), p(450.0, 100.0));
        assert_eq!(joined.a3(), p(250.0, 200.0));
    }

    #[test]
    fn join_keeps_tangent_continuous() {
        let curve = s_curve();
        let joined = curve.join(p(450.0, 100.0), p(250.0, 200.0));
        let out = curve.tangent(1.0).unwrap();
        let into = joined.tangent(0.0).unwrap();
        assert_relative_eq!(out, into, epsilon = 1e-12);
    }

    #[test]
    fn join_to_start_closes_on_other() {
        let first = s_curve();
        let second = first.join(p(450.0, 100.0), p(250.0, 200.0));
        let closing = second.join_to_start(&first);
        assert_eq!(closing.a0(), second.a3());
        assert_eq!(closing.a1(), reflect_across(second.a2(), second.a3()));
        assert_eq!(closing.a2(), p(-100.0, 150.0));
        assert_eq!(closing.a3(), first.a0());

        let out = closing.tangent(1.0).unwrap();
        let into = first.tangent(0.0).unwrap();
        assert_relative_eq!(out, into, epsilon = 1e-12);
    }

    #[test]
    fn bounds_span_anchors() {
        let bounds = s_curve().bounds();
        assert_eq!(bounds.min(), p(100.0, 50.0));
        assert_eq!(bounds.max(), p(400.0, 450.0));
    }

    #[test]
    fn tangent_of_coincident_anchors_is_degenerate() {
        let dot = CubicBezier::from_coords((1.0, 1.0), (1.0, 1.0), (1.0, 1.0), (1.0, 1.0));
        assert!(dot.tangent(0.5).is_err());
        assert!(dot.is_closed());
        assert!(!s_curve().is_closed());
    }

    #[test]
    fn display() {
        assert_eq!(
            s_curve().to_string(),
            "((100, 100), (300, 50), (200, 450), (400, 400))"
        );
    }
}
