//! Drawing curves onto a caller-supplied target.
//!
//! The library never owns pixels. A draw operation maps curve-space
//! coordinates into a pixel-space [`Region2`] and pushes primitives into a
//! [`Canvas`], which a backend implements however it likes.

mod display_list;
mod draw_composite;
mod draw_curve;
mod painter;
mod style;

pub use display_list::{DisplayList, DrawCommand};
pub use draw_composite::DrawComposite;
pub use draw_curve::DrawCurve;
pub use style::{Palette, RenderParams, Rgb};

use crate::error::{RenderError, Result};
use crate::math::{DisplayPoint, Point2, Region2};

/// A drawing target receiving primitives in pixel space.
pub trait Canvas {
    /// Draws a straight line.
    fn line(&mut self, from: Point2, to: Point2, color: Rgb, width: u32);

    /// Draws a filled ellipse inscribed in the box from `min` to `max`.
    fn ellipse(&mut self, min: Point2, max: Point2, fill: Rgb);

    /// Draws a text label anchored at `at`.
    fn text(&mut self, at: Point2, text: &str, color: Rgb);
}

/// Rejects pixel regions that cannot be drawn into.
fn check_target(pixel_bounds: &Region2) -> Result<()> {
    if pixel_bounds.is_degenerate() {
        return Err(RenderError::InvalidTarget(format!(
            "pixel region at {} with size {} has no drawable area",
            DisplayPoint(&pixel_bounds.origin),
            DisplayPoint(&Point2::from(pixel_bounds.size)),
        ))
        .into());
    }
    Ok(())
}

/// Upper bound on the number of positions [`x_positions`] returns.
pub const MAX_X_POSITIONS: u32 = 100_000;

/// Returns x positions from `floor(min.x)` to `ceil(max.x)` inclusive,
/// `step` apart.
///
/// Handy for choosing the columns to estimate y at. A non-positive or
/// non-finite `step`, or non-finite bounds, give no positions. At most
/// [`MAX_X_POSITIONS`] positions are returned.
#[must_use]
pub fn x_positions(bounds: &Region2, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0) {
        return Vec::new();
    }
    let (min, max) = horizontal_extent(bounds);
    if !(min.is_finite() && max.is_finite()) {
        return Vec::new();
    }
    let start = min.floor();
    let end = max.ceil();
    let steps = ((end - start) / step).floor();
    if !steps.is_finite() {
        return Vec::new();
    }
    let cap = f64::from(MAX_X_POSITIONS - 1);
    if steps > cap {
        tracing::debug!(step, min, max, "x positions capped at {MAX_X_POSITIONS}");
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let last = steps.min(cap) as u32;
    (0..=last).map(|i| start + f64::from(i) * step).collect()
}

fn horizontal_extent(bounds: &Region2) -> (f64, f64) {
    let a = bounds.min().x;
    let b = bounds.max().x;
    (a.min(b), a.max(b))
}

/// The top-left corner of a pixel region, whatever the sign of its size.
fn top_left(pixel_bounds: &Region2) -> Point2 {
    let a = pixel_bounds.min();
    let b = pixel_bounds.max();
    Point2::new(a.x.min(b.x), a.y.min(b.y))
}

/// Standard output region used throughout the tests: 500px square with a
/// 50px margin, flipped so y grows upward.
#[cfg(test)]
pub(crate) fn test_pixels() -> Region2 {
    use crate::math::Vector2;

    let margin = Vector2::new(50.0, 50.0);
    let size = Vector2::new(500.0, 500.0) - margin - margin;
    Region2::new(Point2::from(margin), size).upside_down()
}
