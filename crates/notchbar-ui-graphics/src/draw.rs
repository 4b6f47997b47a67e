//! Draw primitives and the scope used to record them.

use crate::brush::Brush;
use crate::color::Color;
use crate::geometry::{Rect, Size};
use crate::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Path {
        path: Path,
        brush: Brush,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        font_size: f32,
    },
}

pub trait DrawScope {
    fn size(&self) -> Size;
    /// Fills `path` with `brush`.
    fn draw_path(&mut self, path: Path, brush: Brush);
    fn draw_text(&mut self, rect: Rect, text: &str, color: Color, font_size: f32);
    fn into_primitives(self) -> Vec<DrawPrimitive>;
}

#[derive(Default)]
pub struct DrawScopeDefault {
    size: Size,
    primitives: Vec<DrawPrimitive>,
}

impl DrawScopeDefault {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            primitives: Vec::new(),
        }
    }
}

impl DrawScope for DrawScopeDefault {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_path(&mut self, path: Path, brush: Brush) {
        if path.is_empty() {
            return;
        }
        self.primitives.push(DrawPrimitive::Path { path, brush });
    }

    fn draw_text(&mut self, rect: Rect, text: &str, color: Color, font_size: f32) {
        if color.a() <= 0.0 || text.is_empty() {
            return;
        }
        self.primitives.push(DrawPrimitive::Text {
            rect,
            text: text.to_string(),
            color,
            font_size,
        });
    }

    fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_skips_invisible_output() {
        let mut scope = DrawScopeDefault::new(Size::new(10.0, 10.0));
        scope.draw_path(Path::new(), Brush::solid(Color::WHITE));
        scope.draw_text(Rect::new(0.0, 0.0, 5.0, 5.0), "hidden", Color::TRANSPARENT, 12.0);
        scope.draw_text(Rect::new(0.0, 0.0, 5.0, 5.0), "shown", Color::WHITE, 12.0);
        let primitives = scope.into_primitives();
        assert_eq!(primitives.len(), 1);
        assert!(matches!(&primitives[0], DrawPrimitive::Text { text, .. } if text == "shown"));
    }
}
