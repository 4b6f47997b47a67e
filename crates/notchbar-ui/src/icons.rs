//! Built-in 24x24 icons used by [`default_items`](crate::default_items).

use notchbar_ui_graphics::{FillType, ImageVector, Path, Rect, Size};

const VIEWPORT: Size = Size::new(24.0, 24.0);

pub fn home() -> ImageVector {
    let mut path = Path::new();
    path.move_to(12.0, 3.0);
    path.line_to(21.0, 11.0);
    path.line_to(19.0, 11.0);
    path.line_to(19.0, 21.0);
    path.line_to(5.0, 21.0);
    path.line_to(5.0, 11.0);
    path.line_to(3.0, 11.0);
    path.close();
    ImageVector::new("home", VIEWPORT, path)
}

/// Map pin: a circle head narrowing to a point.
pub fn location() -> ImageVector {
    let head = Rect::new(6.0, 2.0, 12.0, 12.0);
    let mut path = Path::new();
    path.move_to(12.0, 22.0);
    path.arc_to(head, 150.0, 240.0, false);
    path.close();
    path.add_arc(Rect::new(10.0, 6.0, 4.0, 4.0), 0.0, 360.0);
    ImageVector::new("location", VIEWPORT, path.with_fill_type(FillType::EvenOdd))
}

/// Clock face with hands cut out.
pub fn history() -> ImageVector {
    let mut path = Path::new();
    path.add_arc(Rect::new(3.0, 3.0, 18.0, 18.0), 0.0, 360.0);
    path.close();
    path.move_to(11.0, 6.0);
    path.line_to(13.0, 6.0);
    path.line_to(13.0, 11.4);
    path.line_to(16.6, 14.0);
    path.line_to(15.6, 15.6);
    path.line_to(11.0, 12.4);
    path.close();
    ImageVector::new("history", VIEWPORT, path.with_fill_type(FillType::EvenOdd))
}

/// Gear: an eight-toothed ring.
pub fn settings() -> ImageVector {
    let mut path = Path::new();
    for tooth in 0..8 {
        let angle = (tooth as f32 * 45.0).to_radians();
        let (sin, cos) = angle.sin_cos();
        let (cx, cy) = (12.0 + 8.5 * cos, 12.0 + 8.5 * sin);
        path.move_to(cx - 1.5 * cos + 1.5 * sin, cy - 1.5 * sin - 1.5 * cos);
        path.line_to(cx + 1.5 * cos + 1.5 * sin, cy + 1.5 * sin - 1.5 * cos);
        path.line_to(cx + 1.5 * cos - 1.5 * sin, cy + 1.5 * sin + 1.5 * cos);
        path.line_to(cx - 1.5 * cos - 1.5 * sin, cy - 1.5 * sin + 1.5 * cos);
        path.close();
    }
    path.add_arc(Rect::new(4.5, 4.5, 15.0, 15.0), 0.0, 360.0);
    path.close();
    path.add_arc(Rect::new(9.0, 9.0, 6.0, 6.0), 0.0, 360.0);
    path.close();
    ImageVector::new("settings", VIEWPORT, path)
}
