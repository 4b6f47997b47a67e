//! Notch position and bar outline.

use notchbar_ui_graphics::{Density, Path, Rect, Size};

use crate::style::BarStyle;

/// Horizontal center of the notch beneath item `selected_index` when `count`
/// items share `width`.
///
/// `count` must be at least 1; zero yields a non-finite result.
pub fn middle_position(selected_index: usize, count: usize, width: f32) -> f32 {
    let slot_width = width / count as f32;
    if selected_index == 0 {
        slot_width / 2.0
    } else if Some(selected_index) == count.checked_sub(1) {
        // Measured from the trailing edge so the last slot lands exactly on it.
        width - slot_width / 2.0
    } else {
        slot_width / 2.0 + slot_width * selected_index as f32
    }
}

/// Style dimensions resolved to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarMetrics {
    pub height: f32,
    pub arc_height: f32,
    pub arc_width: f32,
    pub arc_top: f32,
    pub icon_size: f32,
    pub label_padding: f32,
    pub label_text_size: f32,
}

impl BarMetrics {
    pub fn resolve(style: &BarStyle, density: Density) -> Self {
        Self {
            height: density.dp_to_px(style.height),
            arc_height: density.dp_to_px(style.arc_height),
            arc_width: density.dp_to_px(style.arc_width),
            arc_top: style.arc_top_offset,
            icon_size: density.dp_to_px(style.icon_size),
            label_padding: density.dp_to_px(style.label_padding_vertical),
            label_text_size: density.sp_to_px(style.label_text_size),
        }
    }

    /// Height of the row holding the items, below the arc band.
    pub fn row_height(&self) -> f32 {
        (self.height - self.arc_height).max(0.0)
    }
}

/// Oval whose upper half forms the notch around `center_x`.
pub fn notch_oval(metrics: &BarMetrics, center_x: f32) -> Rect {
    Rect::from_ltrb(
        center_x - metrics.arc_width,
        metrics.arc_top,
        center_x + metrics.arc_width,
        metrics.arc_top + 2.0 * metrics.arc_height,
    )
}

/// Outline of the bar: the body below the arc band plus the notch arc as a
/// second contour.
pub fn build_bar_path(size: Size, metrics: &BarMetrics, center_x: f32) -> Path {
    let mut path = Path::new();
    path.move_to(0.0, metrics.arc_height);
    path.line_to(size.width, metrics.arc_height);
    path.line_to(size.width, size.height);
    path.line_to(0.0, size.height);
    path.add_arc(notch_oval(metrics, center_x), 180.0, 180.0);
    path
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
