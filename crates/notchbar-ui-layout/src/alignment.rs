//! Placing a child inside a container.

use notchbar_ui_graphics::{Rect, Size};

/// Where a child sits along one axis of its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisAlignment {
    Start,
    Center,
    End,
}

impl AxisAlignment {
    /// Offset of a `child`-long span inside `available`. Children larger than
    /// the container are pinned to the start.
    pub fn offset(&self, available: f32, child: f32) -> f32 {
        let free = (available - child).max(0.0);
        match self {
            AxisAlignment::Start => 0.0,
            AxisAlignment::Center => free / 2.0,
            AxisAlignment::End => free,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: AxisAlignment,
    pub vertical: AxisAlignment,
}

impl Alignment {
    pub const fn new(horizontal: AxisAlignment, vertical: AxisAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const CENTER: Self = Self::new(AxisAlignment::Center, AxisAlignment::Center);
    /// Horizontally centered, resting on the bottom edge.
    pub const BOTTOM_CENTER: Self = Self::new(AxisAlignment::Center, AxisAlignment::End);

    /// Rect of size `child` placed inside `container`.
    pub fn place(&self, child: Size, container: Rect) -> Rect {
        Rect::new(
            container.x + self.horizontal.offset(container.width, child.width),
            container.y + self.vertical.offset(container.height, child.height),
            child.width,
            child.height,
        )
    }
}
