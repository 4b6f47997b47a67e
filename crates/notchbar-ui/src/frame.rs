//! Output of one render pass.

use notchbar_ui_graphics::{Color, DrawPrimitive, Path, Rect, Size};

#[derive(Clone, Debug, PartialEq)]
pub struct LabelFrame {
    pub text: String,
    /// Position including the current enter/exit offset.
    pub rect: Rect,
    pub alpha: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ItemFrame {
    pub index: usize,
    pub selected: bool,
    pub slot: Rect,
    pub icon: Rect,
    pub tint: Color,
    pub label: Option<LabelFrame>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarFrame {
    pub size: Size,
    /// Animated notch center used for this frame.
    pub notch_center: f32,
    pub bar_path: Path,
    pub items: Vec<ItemFrame>,
    /// Everything above in paint order: bar, then icons, then labels.
    pub primitives: Vec<DrawPrimitive>,
}

impl BarFrame {
    pub fn visible_labels(&self) -> impl Iterator<Item = &LabelFrame> {
        self.items.iter().filter_map(|item| item.label.as_ref())
    }
}
