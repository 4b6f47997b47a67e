//! Placement of the item columns inside the bar.

use notchbar_ui_graphics::{Point, Rect, Size};
use notchbar_ui_layout::{distribute_weighted, Alignment, AxisAlignment};

use crate::geometry::BarMetrics;

/// Where one item's pieces go for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemLayout {
    /// Full slot; also the tap region.
    pub slot: Rect,
    pub icon: Rect,
    /// Resting place of the label, before any transition offset.
    pub label: Option<Rect>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    pub size: Size,
    /// Row below the arc band that holds the items.
    pub row: Rect,
    pub items: Vec<ItemLayout>,
}

impl BarLayout {
    /// Lays out `label_sizes.len()` equal-weight columns. A `Some` label size
    /// means that item's label currently takes space.
    pub fn measure(width: f32, metrics: &BarMetrics, label_sizes: &[Option<Size>]) -> Self {
        let size = Size::new(width, metrics.height);
        let row = Alignment::BOTTOM_CENTER.place(
            Size::new(width, metrics.row_height()),
            Rect::from_size(size),
        );
        let weights = vec![1.0; label_sizes.len()];
        let items = distribute_weighted(row.width, &weights)
            .into_iter()
            .zip(label_sizes)
            .map(|(weighted, label_size)| {
                let slot = Rect::new(row.x + weighted.x, row.y, weighted.width, row.height);
                Self::place_column(slot, metrics, *label_size)
            })
            .collect();
        Self { size, row, items }
    }

    fn place_column(slot: Rect, metrics: &BarMetrics, label_size: Option<Size>) -> ItemLayout {
        let icon_size = Size::new(metrics.icon_size, metrics.icon_size);
        let label_block = label_size.map(|size| size.height + 2.0 * metrics.label_padding);
        let column_height = icon_size.height + label_block.unwrap_or(0.0);
        let column_width =
            label_size.map_or(icon_size.width, |size| size.width.max(icon_size.width));
        let column = Alignment::CENTER.place(Size::new(column_width, column_height), slot);

        let centered = |width: f32| {
            column.x + AxisAlignment::Center.offset(column.width, width)
        };
        let icon = Rect::from_origin_size(Point::new(centered(icon_size.width), column.y), icon_size);
        let label = label_size.map(|size| {
            Rect::new(
                centered(size.width),
                icon.bottom() + metrics.label_padding,
                size.width,
                size.height,
            )
        });
        ItemLayout { slot, icon, label }
    }

    /// Index of the slot containing `(x, y)`. Anything in the row past the
    /// last slot's summed edge, trailing edge included, belongs to the last slot.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        if self.row.width <= 0.0 || !self.row.contains(x, y) {
            return None;
        }
        let last = self.items.len().checked_sub(1)?;
        self.items
            .iter()
            .position(|item| x >= item.slot.x && x < item.slot.right())
            .or(Some(last))
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
