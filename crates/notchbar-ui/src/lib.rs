//! Animated bottom navigation bar whose curved notch slides beneath the
//! selected item.
//!
//! [`FancyBottomBar`] owns the selection state and its animations. Hosts feed
//! it layout widths and taps, pump the shared [`FrameClock`], and draw the
//! [`BarFrame`] returned by [`FancyBottomBar::render`].

mod bar;
mod error;
mod frame;
mod geometry;
pub mod icons;
mod item;
mod layout;
mod state;
mod style;
mod text;

pub use bar::FancyBottomBar;
pub use error::BarError;
pub use frame::{BarFrame, ItemFrame, LabelFrame};
pub use geometry::{build_bar_path, middle_position, notch_oval, BarMetrics};
pub use item::{default_items, BarItem};
pub use layout::{BarLayout, ItemLayout};
pub use state::{BarState, NotchPhase};
pub use style::{BarStyle, DEFAULT_BAR_COLOR};
pub use text::{MonospaceTextMeasurer, TextMeasurer};

pub use notchbar_animation::{AnimationSpec, Easing, EnterTransition, ExitTransition, FrameClock};
pub use notchbar_ui_graphics::{
    Brush, Color, Density, Dp, DrawPrimitive, ImageVector, Path, Point, Rect, Size, Sp,
};
