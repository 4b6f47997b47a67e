use notchbar_ui_graphics::ImageVector;

use crate::icons;

/// One destination in the bar: an icon and the label shown while selected.
#[derive(Clone, Debug, PartialEq)]
pub struct BarItem {
    pub icon: ImageVector,
    pub label: String,
}

impl BarItem {
    pub fn new(icon: ImageVector, label: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
        }
    }
}

/// Home, location, history and settings, labelled "Screen 1" to "Screen 4".
pub fn default_items() -> Vec<BarItem> {
    [icons::home(), icons::location(), icons::history(), icons::settings()]
        .into_iter()
        .enumerate()
        .map(|(index, icon)| BarItem::new(icon, format!("Screen {}", index + 1)))
        .collect()
}
