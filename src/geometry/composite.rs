use std::ops::Index;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Region2, Vector2};

use super::curve::{check_count, CubicBezier, Curve, CurveDomain};

/// An ordered chain of cubic Bézier curves joined end to end.
///
/// Consecutive curves share an anchor (`curve[i].a3 == curve[i + 1].a0`)
/// and every joint is tangent-continuous. The chain starts from one seed
/// curve and only ever grows.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeBezier {
    curves: Vec<CubicBezier>,
    looped: bool,
}

impl CompositeBezier {
    /// Creates a chain holding only `seed`.
    #[must_use]
    pub fn new(seed: CubicBezier) -> Self {
        Self {
            curves: vec![seed],
            looped: false,
        }
    }

    /// Appends a curve that continues smoothly from the last one and ends at `a3`.
    ///
    /// Appending after [`loop_to_start`](Self::loop_to_start) is allowed and
    /// continues from the closing curve, which reopens the outline.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyComposite`] if the chain has no curves.
    pub fn append(&mut self, a2: Point2, a3: Point2) -> Result<()> {
        let last = self.curves.last().ok_or(GeometryError::EmptyComposite)?;
        let next = last.join(a2, a3);
        tracing::debug!(segment = self.curves.len(), %next, "appending curve");
        self.curves.push(next);
        Ok(())
    }

    /// Appends a curve from the end of the chain back to the start of the
    /// first curve, smooth at both joints, closing the chain.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::AlreadyClosed`] if called more than once,
    /// or [`GeometryError::EmptyComposite`] if the chain has no curves.
    pub fn loop_to_start(&mut self) -> Result<()> {
        if self.looped {
            return Err(GeometryError::AlreadyClosed.into());
        }
        let (first, last) = self
            .curves
            .first()
            .zip(self.curves.last())
            .ok_or(GeometryError::EmptyComposite)?;
        let closing = last.join_to_start(first);
        tracing::debug!(segment = self.curves.len(), %closing, "closing loop");
        self.curves.push(closing);
        self.looped = true;
        Ok(())
    }

    /// Returns whether the chain has been looped and still ends where the
    /// first curve starts.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.looped
            && self
                .curves
                .first()
                .zip(self.curves.last())
                .is_some_and(|(first, last)| first.a0() == last.a3())
    }

    /// Number of curves in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Always `false` for a chain built through the public API.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Returns the curves in insertion order.
    #[must_use]
    pub fn curves(&self) -> &[CubicBezier] {
        &self.curves
    }

    /// Returns the curve at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CubicBezier> {
        self.curves.get(index)
    }

    /// Returns the seed curve.
    #[must_use]
    pub fn first(&self) -> Option<&CubicBezier> {
        self.curves.first()
    }

    /// Returns the most recently added curve.
    #[must_use]
    pub fn last(&self) -> Option<&CubicBezier> {
        self.curves.last()
    }

    /// Iterates the curves in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CubicBezier> {
        self.curves.iter()
    }

    /// Componentwise minimum over every curve's anchors.
    #[must_use]
    pub fn min(&self) -> Point2 {
        self.curves
            .iter()
            .map(CubicBezier::min)
            .reduce(|a, b| Point2::new(a.x.min(b.x), a.y.min(b.y)))
            .unwrap_or_else(Point2::origin)
    }

    /// Componentwise maximum over every curve's anchors.
    #[must_use]
    pub fn max(&self) -> Point2 {
        self.curves
            .iter()
            .map(CubicBezier::max)
            .reduce(|a, b| Point2::new(a.x.max(b.x), a.y.max(b.y)))
            .unwrap_or_else(Point2::origin)
    }

    /// Region spanning [`min`](Self::min) to [`max`](Self::max).
    #[must_use]
    pub fn bounds(&self) -> Region2 {
        Region2::from_corners(self.min(), self.max())
    }

    /// Estimates every y at which the first `count` curves (all when `None`)
    /// cross the vertical line at `x`, in chain order.
    pub fn estimate_y(
        &self,
        x: f64,
        resolution: usize,
        count: Option<usize>,
    ) -> impl Iterator<Item = f64> + '_ {
        self.prefix(count)
            .flat_map(move |curve| curve.estimate_y(x, resolution))
    }

    /// Line segments approximating the first `segments` curves (all when
    /// `None`), `count` per curve.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CountOutOfRange`] if `count` is zero.
    pub fn lines(
        &self,
        count: usize,
        segments: Option<usize>,
    ) -> Result<impl Iterator<Item = (Point2, Point2)> + '_> {
        check_count(count)?;
        Ok(self.prefix(segments).flat_map(move |curve| curve.chords(count)))
    }

    fn prefix(&self, count: Option<usize>) -> std::slice::Iter<'_, CubicBezier> {
        let end = count.map_or(self.curves.len(), |n| n.min(self.curves.len()));
        self.curves[..end].iter()
    }

    /// Maps a chain parameter onto a curve and its local parameter.
    fn locate(&self, t: f64) -> Result<(&CubicBezier, f64)> {
        if !self.domain().contains(t) {
            return Err(GeometryError::ParameterOutOfRange { value: t }.into());
        }
        let last = self.curves.len().saturating_sub(1);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (t.floor() as usize).min(last);
        let curve = self.curves.get(index).ok_or(GeometryError::EmptyComposite)?;
        #[allow(clippy::cast_precision_loss)]
        let local = t - index as f64;
        Ok((curve, local))
    }
}

impl Curve for CompositeBezier {
    /// Evaluates the chain at `t ∈ [0, len]`; segment `i` covers `[i, i + 1]`.
    fn evaluate(&self, t: f64) -> Result<Point2> {
        let (curve, local) = self.locate(t)?;
        curve.solve(local)
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        let (curve, local) = self.locate(t)?;
        curve.tangent(local)
    }

    #[allow(clippy::cast_precision_loss)]
    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, self.curves.len() as f64)
    }

    fn is_closed(&self) -> bool {
        CompositeBezier::is_closed(self)
    }
}

impl Index<usize> for CompositeBezier {
    type Output = CubicBezier;

    fn index(&self, index: usize) -> &Self::Output {
        &self.curves[index]
    }
}

impl<'a> IntoIterator for &'a CompositeBezier {
    type Item = &'a CubicBezier;
    type IntoIter = std::slice::Iter<'a, CubicBezier>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}
