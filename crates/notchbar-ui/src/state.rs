//! Selection state owned by the bar.

use notchbar_animation::AnimationSpec;

/// Whether the notch has completed its first placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotchPhase {
    /// Nothing animated yet; target changes snap.
    Initial,
    /// Target changes tween.
    Steady,
}

impl NotchPhase {
    pub fn notch_spec(&self, steady: AnimationSpec) -> AnimationSpec {
        match self {
            NotchPhase::Initial => AnimationSpec::snap(),
            NotchPhase::Steady => steady,
        }
    }
}

/// Inputs of the derived geometry. Mutated only through the transitions below.
#[derive(Clone, Debug, PartialEq)]
pub struct BarState {
    selected_index: usize,
    width: f32,
    phase: NotchPhase,
}

impl Default for BarState {
    fn default() -> Self {
        Self::new()
    }
}

impl BarState {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            width: 0.0,
            phase: NotchPhase::Initial,
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn phase(&self) -> NotchPhase {
        self.phase
    }

    /// Tap transition. Returns whether the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        if self.selected_index == index {
            return false;
        }
        self.selected_index = index;
        true
    }

    /// Layout transition. Returns whether the width changed.
    pub fn resize(&mut self, width: f32) -> bool {
        if self.width == width {
            return false;
        }
        self.width = width;
        true
    }

    /// First animation finished.
    pub fn settle(&mut self) {
        self.phase = NotchPhase::Steady;
    }
}
