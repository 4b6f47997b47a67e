//! Vector images drawn from a path in their own viewport.

use crate::geometry::{Rect, Size};
use crate::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageVector {
    pub name: String,
    /// Coordinate space the path is authored in.
    pub viewport: Size,
    pub path: Path,
}

impl ImageVector {
    pub fn new(name: impl Into<String>, viewport: Size, path: Path) -> Self {
        Self {
            name: name.into(),
            viewport,
            path,
        }
    }

    /// Path scaled uniformly to fit `bounds` and centered inside it.
    pub fn placed_in(&self, bounds: Rect) -> Path {
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return Path::new();
        }
        let scale = (bounds.width / self.viewport.width).min(bounds.height / self.viewport.height);
        let dx = bounds.x + (bounds.width - self.viewport.width * scale) / 2.0;
        let dy = bounds.y + (bounds.height - self.viewport.height * scale) / 2.0;
        self.path.transformed(scale, dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PathCommand, Point};

    #[test]
    fn placed_in_centers_non_square_bounds() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(24.0, 24.0);
        let icon = ImageVector::new("diagonal", Size::new(24.0, 24.0), path);

        let placed = icon.placed_in(Rect::new(100.0, 0.0, 96.0, 48.0));
        assert_eq!(placed.commands()[0], PathCommand::MoveTo(Point::new(124.0, 0.0)));
        assert_eq!(placed.commands()[1], PathCommand::LineTo(Point::new(172.0, 48.0)));
    }

    #[test]
    fn degenerate_viewport_yields_empty_path() {
        let icon = ImageVector::new("empty", Size::ZERO, Path::new());
        assert!(icon.placed_in(Rect::new(0.0, 0.0, 10.0, 10.0)).is_empty());
    }
}
