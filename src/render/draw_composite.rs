use crate::error::Result;
use crate::geometry::CompositeBezier;
use crate::math::{Point2, Region2};

use super::painter::Painter;
use super::{check_target, Canvas, RenderParams};

/// Draws the first `count` curves of a composite in the composite's own
/// bounds, so successive prefixes line up frame by frame.
#[derive(Debug, Clone)]
pub struct DrawComposite<'a> {
    composite: &'a CompositeBezier,
    pixel_bounds: Region2,
    count: Option<usize>,
    estimate_x: Vec<f64>,
    axis: bool,
    title: Option<String>,
    params: RenderParams,
}

impl<'a> DrawComposite<'a> {
    /// Creates a draw operation for every curve of `composite`.
    #[must_use]
    pub fn new(composite: &'a CompositeBezier, pixel_bounds: Region2) -> Self {
        Self {
            composite,
            pixel_bounds,
            count: None,
            estimate_x: Vec::new(),
            axis: false,
            title: None,
            params: RenderParams::default(),
        }
    }

    /// Draws only the first `count` curves.
    #[must_use]
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Marks every estimated y over the drawn curves at each x position.
    #[must_use]
    pub fn estimate_y(mut self, xs: impl IntoIterator<Item = f64>) -> Self {
        self.estimate_x = xs.into_iter().collect();
        self
    }

    /// Draws the bottom and left edges of the bounds with their extremes.
    #[must_use]
    pub fn axis(mut self, axis: bool) -> Self {
        self.axis = axis;
        self
    }

    /// Writes `title` above the drawing.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
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
    /// # Errors
    ///
    /// Returns an error if the pixel region has no drawable area or the
    /// parameters are invalid. Nothing is drawn in that case.
    pub fn execute<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<()> {
        check_target(&self.pixel_bounds)?;
        self.params.validate()?;
        let resolution = self.params.resolution;
        let lines = self.composite.lines(resolution, self.count)?;

        let drawn = self
            .count
            .map_or(self.composite.len(), |n| n.min(self.composite.len()));
        tracing::debug!(
            segments = drawn,
            of = self.composite.len(),
            resolution,
            "drawing composite"
        );

        let mut painter = Painter::new(
            canvas,
            self.composite.bounds(),
            self.pixel_bounds,
            self.params,
        );

        if self.axis {
            painter.axis();
        }
        for curve in self.composite.iter().take(drawn) {
            painter.controls(curve);
        }
        for (a, b) in lines {
            painter.stroke(a, b);
        }
        for &x in &self.estimate_x {
            for y in self.composite.estimate_y(x, resolution, Some(drawn)) {
                painter.marker(Point2::new(x, y));
            }
        }
        if let Some(title) = &self.title {
            painter.title(title);
        }
        Ok(())
    }
}
