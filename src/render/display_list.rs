use crate::math::Point2;

use super::{Canvas, Rgb};

/// A single recorded drawing primitive, in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point2,
        to: Point2,
        color: Rgb,
        width: u32,
    },
    Ellipse {
        min: Point2,
        max: Point2,
        fill: Rgb,
    },
    Text {
        at: Point2,
        text: String,
        color: Rgb,
    },
}

/// A [`Canvas`] that records every primitive in drawing order.
///
/// Useful for replaying onto a real backend later, or for inspecting what
/// a draw operation produced.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    /// The recorded commands.
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Creates an empty display list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns whether nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates the recorded lines drawn in `color`.
    pub fn lines_with(&self, color: Rgb) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        self.commands.iter().filter_map(move |command| match command {
            DrawCommand::Line {
                from, to, color: c, ..
            } if *c == color => Some((*from, *to)),
            _ => None,
        })
    }

    /// Iterates the recorded ellipses as `(min, max)` corners.
    pub fn ellipses(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Ellipse { min, max, .. } => Some((*min, *max)),
            _ => None,
        })
    }

    /// Iterates the recorded text strings.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for DisplayList {
    fn line(&mut self, from: Point2, to: Point2, color: Rgb, width: u32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn ellipse(&mut self, min: Point2, max: Point2, fill: Rgb) {
        self.commands.push(DrawCommand::Ellipse { min, max, fill });
    }

    fn text(&mut self, at: Point2, text: &str, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            at,
            text: text.to_owned(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut list = DisplayList::new();
        assert!(list.is_empty());

        list.ellipse(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0), Rgb(255, 0, 0));
        list.line(Point2::new(0.0, 0.0), Point2::new(5.0, 5.0), Rgb::BLACK, 1);
        list.text(Point2::new(1.0, 1.0), "hello", Rgb::BLACK);

        assert_eq!(list.len(), 3);
        assert!(matches!(list.commands[0], DrawCommand::Ellipse { .. }));
        assert!(matches!(list.commands[1], DrawCommand::Line { width: 1, .. }));
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["hello"]);
    }

    #[test]
    fn lines_with_filters_by_color() {
        let mut list = DisplayList::new();
        list.line(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Rgb::BLACK, 1);
        list.line(Point2::new(1.0, 0.0), Point2::new(2.0, 0.0), Rgb::WHITE, 1);
        assert_eq!(list.lines_with(Rgb::WHITE).count(), 1);
        assert_eq!(list.lines_with(Rgb(1, 2, 3)).count(), 0);
    }
}
