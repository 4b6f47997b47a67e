//! Visual configuration of the bar.

use notchbar_animation::{AnimationSpec, Easing, EnterTransition, ExitTransition};
use notchbar_ui_graphics::{Color, Dp, Sp};

use crate::error::BarError;

pub const DEFAULT_BAR_COLOR: Color = Color::from_argb(0xFF2142A2);

const TRANSITION_MILLIS: u64 = 500;

#[derive(Clone, Debug, PartialEq)]
pub struct BarStyle {
    pub height: Dp,
    pub arc_height: Dp,
    /// Horizontal radius of the notch.
    pub arc_width: Dp,
    /// Top of the notch oval, in raw pixels.
    pub arc_top_offset: f32,
    pub bar_color: Color,
    pub selected_tint: Color,
    pub unselected_tint: Color,
    pub label_color: Color,
    pub icon_size: Dp,
    pub label_padding_vertical: Dp,
    pub label_text_size: Sp,
    pub notch_animation: AnimationSpec,
    pub label_enter: EnterTransition,
    pub label_exit: ExitTransition,
}

impl Default for BarStyle {
    fn default() -> Self {
        let tween = AnimationSpec::tween(TRANSITION_MILLIS, Easing::FastOutSlowIn);
        Self {
            height: Dp(80.0),
            arc_height: Dp(20.0),
            arc_width: Dp(30.0),
            arc_top_offset: 20.0,
            bar_color: DEFAULT_BAR_COLOR,
            selected_tint: Color::WHITE,
            unselected_tint: Color::LIGHT_GRAY,
            label_color: Color::WHITE,
            icon_size: Dp(24.0),
            label_padding_vertical: Dp(5.0),
            label_text_size: Sp(14.0),
            notch_animation: tween,
            label_enter: EnterTransition::slide_in_vertically(0.5, tween),
            // Exiting labels keep full alpha; pass 0.0 for a visible fade.
            label_exit: ExitTransition::fade_out(1.0, tween),
        }
    }
}

impl BarStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_height(mut self, height: Dp) -> Self {
        self.height = height;
        self
    }

    pub fn with_arc(mut self, arc_width: Dp, arc_height: Dp) -> Self {
        self.arc_width = arc_width;
        self.arc_height = arc_height;
        self
    }

    pub fn with_bar_color(mut self, color: Color) -> Self {
        self.bar_color = color;
        self
    }

    pub fn with_tints(mut self, selected: Color, unselected: Color) -> Self {
        self.selected_tint = selected;
        self.unselected_tint = unselected;
        self
    }

    pub fn with_notch_animation(mut self, spec: AnimationSpec) -> Self {
        self.notch_animation = spec;
        self
    }

    pub fn with_label_transitions(mut self, enter: EnterTransition, exit: ExitTransition) -> Self {
        self.label_enter = enter;
        self.label_exit = exit;
        self
    }

    pub fn validate(&self) -> Result<(), BarError> {
        let dimensions = [
            ("height", self.height.0),
            ("arc_height", self.arc_height.0),
            ("arc_width", self.arc_width.0),
            ("arc_top_offset", self.arc_top_offset),
            ("icon_size", self.icon_size.0),
            ("label_padding_vertical", self.label_padding_vertical.0),
            ("label_text_size", self.label_text_size.0),
        ];
        for (field, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(BarError::InvalidStyle { field, value });
            }
        }
        if self.arc_height.0 > self.height.0 {
            return Err(BarError::InvalidStyle {
                field: "arc_height",
                value: self.arc_height.0,
            });
        }
        Ok(())
    }
}
