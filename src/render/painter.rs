use crate::geometry::CubicBezier;
use crate::math::{DisplayPoint, Point2, Region2, Vector2};

use super::{top_left, Canvas, RenderParams};

/// Maps curve-space geometry into pixel space and draws it with a fixed style.
pub(super) struct Painter<'c, C: Canvas + ?Sized> {
    canvas: &'c mut C,
    curve_bounds: Region2,
    pixel_bounds: Region2,
    params: RenderParams,
}

impl<'c, C: Canvas + ?Sized> Painter<'c, C> {
    pub(super) fn new(
        canvas: &'c mut C,
        curve_bounds: Region2,
        pixel_bounds: Region2,
        params: RenderParams,
    ) -> Self {
        Self {
            canvas,
            curve_bounds,
            pixel_bounds,
            params,
        }
    }

    fn to_pixels(&self, point: Point2) -> Point2 {
        self.curve_bounds.interpolate(point, &self.pixel_bounds)
    }

    /// Draws the four anchors and the lines joining each endpoint to its
    /// control point.
    pub(super) fn controls(&mut self, curve: &CubicBezier) {
        for anchor in curve.anchors() {
            self.anchor(anchor);
        }
        self.anchor_line(curve.a0(), curve.a1());
        self.anchor_line(curve.a2(), curve.a3());
    }

    pub(super) fn anchor(&mut self, point: Point2) {
        let centre = self.to_pixels(point);
        let half = Vector2::repeat(self.params.anchor_size / 2.0);
        self.canvas
            .ellipse(centre - half, centre + half, self.params.palette.anchor);
    }

    pub(super) fn anchor_line(&mut self, a: Point2, b: Point2) {
        let (from, to) = (self.to_pixels(a), self.to_pixels(b));
        let palette = self.params.palette;
        self.canvas
            .line(from, to, palette.anchor_line, self.params.guide_width);
    }

    /// Draws one segment of the curve approximation.
    pub(super) fn stroke(&mut self, a: Point2, b: Point2) {
        let (from, to) = (self.to_pixels(a), self.to_pixels(b));
        let palette = self.params.palette;
        self.canvas
            .line(from, to, palette.curve, self.params.curve_width);
    }

    /// Draws a cross centred on an estimated point.
    pub(super) fn marker(&mut self, point: Point2) {
        let p = self.to_pixels(point);
        let size = self.params.marker_size;
        let color = self.params.palette.estimate;
        let width = self.params.guide_width;
        self.canvas.line(
            Point2::new(p.x, p.y - size),
            Point2::new(p.x, p.y + size),
            color,
            width,
        );
        self.canvas.line(
            Point2::new(p.x - size, p.y),
            Point2::new(p.x + size, p.y),
            color,
            width,
        );
    }

    /// Draws the bottom and left edges of the curve bounds, labelled with
    /// their extremes.
    pub(super) fn axis(&mut self) {
        let min = self.curve_bounds.min();
        let max = self.curve_bounds.max();
        let color = self.params.palette.axis;
        let width = self.params.guide_width;

        let origin = self.to_pixels(min);
        let x_end = self.to_pixels(Point2::new(max.x, min.y));
        let y_end = self.to_pixels(Point2::new(min.x, max.y));

        self.canvas.line(origin, x_end, color, width);
        self.canvas.line(origin, y_end, color, width);
        self.canvas.text(origin, &DisplayPoint(&min).to_string(), color);
        self.canvas.text(x_end, &max.x.to_string(), color);
        self.canvas.text(y_end, &max.y.to_string(), color);
    }

    /// Writes `title` just above the top-left corner of the pixel region.
    pub(super) fn title(&mut self, title: &str) {
        let corner = top_left(&self.pixel_bounds);
        let at = Point2::new(corner.x, corner.y - self.params.marker_size);
        self.canvas.text(at, title, self.params.palette.title);
    }
}
