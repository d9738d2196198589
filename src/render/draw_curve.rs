use crate::error::Result;
use crate::geometry::CubicBezier;
use crate::math::{Point2, Region2};

use super::painter::Painter;
use super::{check_target, Canvas, RenderParams};

/// Draws a single curve: its anchors, anchor lines, the curve itself and
/// optional estimate markers.
#[derive(Debug, Clone)]
pub struct DrawCurve<'a> {
    curve: &'a CubicBezier,
    pixel_bounds: Region2,
    curve_bounds: Option<Region2>,
    estimate_x: Vec<f64>,
    params: RenderParams,
}

impl<'a> DrawCurve<'a> {
    /// Creates a draw operation mapping the curve's own bounds onto `pixel_bounds`.
    #[must_use]
    pub fn new(curve: &'a CubicBezier, pixel_bounds: Region2) -> Self {
        Self {
            curve,
            pixel_bounds,
            curve_bounds: None,
            estimate_x: Vec::new(),
            params: RenderParams::default(),
        }
    }

    /// Uses `bounds` as the curve-space region instead of the curve's own bounds.
    #[must_use]
    pub fn curve_bounds(mut self, bounds: Region2) -> Self {
        self.curve_bounds = Some(bounds);
        self
    }

    /// Marks every estimated y at each of the given x positions.
    #[must_use]
    pub fn estimate_y(mut self, xs: impl IntoIterator<Item = f64>) -> Self {
        self.estimate_x = xs.into_iter().collect();
        self
    }

    /// Replaces the default render parameters.
    #[must_use]
    pub fn params(mut self, params: RenderParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the drawing.
    ///
    /// Nothing is drawn unless every check passes.
    ///
    /// # Errors
    ///
    /// Returns an error if the pixel region has no drawable area or the
    /// parameters are invalid.
    pub fn execute<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<()> {
        check_target(&self.pixel_bounds)?;
        self.params.validate()?;
        let lines = self.curve.lines(self.params.resolution)?;

        tracing::debug!(
            curve = %self.curve,
            resolution = self.params.resolution,
            estimates = self.estimate_x.len(),
            "drawing curve"
        );

        let curve_bounds = self.curve_bounds.unwrap_or_else(|| self.curve.bounds());
        let mut painter = Painter::new(canvas, curve_bounds, self.pixel_bounds, self.params);

        painter.controls(self.curve);
        for (a, b) in lines {
            painter.stroke(a, b);
        }
        for &x in &self.estimate_x {
            for y in self.curve.estimate_y(x, self.params.resolution) {
                tracing::trace!(x, y, "estimate marker");
                painter.marker(Point2::new(x, y));
            }
        }
        Ok(())
    }
}
