use crate::error::{RenderError, Result};
use crate::geometry::DEFAULT_RESOLUTION;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self(255, 255, 255);
}

/// Colors used for each kind of drawn element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Anchor dots.
    pub anchor: Rgb,
    /// Lines from the endpoints to their control points.
    pub anchor_line: Rgb,
    /// The curve itself.
    pub curve: Rgb,
    /// Crosses marking estimated points.
    pub estimate: Rgb,
    /// Axis lines and their labels.
    pub axis: Rgb,
    /// Title text.
    pub title: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            anchor: Rgb(255, 0, 0),
            anchor_line: Rgb(200, 200, 200),
            curve: Rgb(0, 0, 255),
            estimate: Rgb(255, 0, 255),
            axis: Rgb::BLACK,
            title: Rgb::BLACK,
        }
    }
}

/// Parameters controlling how curves are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    /// Number of line segments drawn per curve, also used for y estimation.
    pub resolution: usize,
    /// Diameter of anchor dots, in pixels.
    pub anchor_size: f64,
    /// Half-length of each arm of an estimate cross, in pixels.
    pub marker_size: f64,
    /// Line width of the curve.
    pub curve_width: u32,
    /// Line width of anchor lines, markers and axes.
    pub guide_width: u32,
    /// Colors for each drawn element.
    pub palette: Palette,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            anchor_size: 8.0,
            marker_size: 10.0,
            curve_width: 2,
            guide_width: 1,
            palette: Palette::default(),
        }
    }
}

impl RenderParams {
    /// Returns default parameters with the given resolution.
    #[must_use]
    pub fn with_resolution(resolution: usize) -> Self {
        Self {
            resolution,
            ..Self::default()
        }
    }

    /// Checks that every size is usable.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidParameters`] if the resolution is zero or
    /// a size is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.resolution == 0 {
            return Err(RenderError::InvalidParameters("resolution must be >= 1".to_owned()).into());
        }
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.anchor_size) {
            return Err(RenderError::InvalidParameters(format!(
                "anchor size ({}) must be positive",
                self.anchor_size
            ))
            .into());
        }
        if !positive(self.marker_size) {
            return Err(RenderError::InvalidParameters(format!(
                "marker size ({}) must be positive",
                self.marker_size
            ))
            .into());
        }
        Ok(())
    }
}
