//! Text measurement used to lay out labels.

use notchbar_ui_graphics::Size;

pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> Size;
}

/// Fixed-advance estimate for hosts without a font backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceTextMeasurer {
    /// Glyph advance as a fraction of the font size.
    pub advance: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
}

impl Default for MonospaceTextMeasurer {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMeasurer for MonospaceTextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> Size {
        let longest_line = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        let line_count = text.lines().count().max(1);
        Size::new(
            longest_line as f32 * font_size * self.advance,
            line_count as f32 * font_size * self.line_height,
        )
    }
}
