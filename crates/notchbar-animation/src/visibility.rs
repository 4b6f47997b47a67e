//! Animated visibility: content that transitions in and out instead of
//! appearing and disappearing in a single frame.

use std::cell::Cell;

use crate::animation::{Animatable, AnimationSpec};
use crate::frame_clock::FrameClock;

/// How content appears.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnterTransition {
    /// Slides up into place from `initial_offset_fraction` of its own height below.
    SlideInVertically {
        initial_offset_fraction: f32,
        spec: AnimationSpec,
    },
    FadeIn {
        initial_alpha: f32,
        spec: AnimationSpec,
    },
}

/// How content disappears.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExitTransition {
    FadeOut {
        target_alpha: f32,
        spec: AnimationSpec,
    },
    SlideOutVertically {
        target_offset_fraction: f32,
        spec: AnimationSpec,
    },
}

/// Visual adjustments for one frame of a visibility transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityFrame {
    pub alpha: f32,
    pub offset_y: f32,
}

impl VisibilityFrame {
    pub const SETTLED: VisibilityFrame = VisibilityFrame {
        alpha: 1.0,
        offset_y: 0.0,
    };
}

impl EnterTransition {
    pub fn slide_in_vertically(initial_offset_fraction: f32, spec: AnimationSpec) -> Self {
        EnterTransition::SlideInVertically {
            initial_offset_fraction,
            spec,
        }
    }

    pub fn fade_in(spec: AnimationSpec) -> Self {
        EnterTransition::FadeIn {
            initial_alpha: 0.0,
            spec,
        }
    }

    pub fn spec(&self) -> AnimationSpec {
        match self {
            EnterTransition::SlideInVertically { spec, .. } | EnterTransition::FadeIn { spec, .. } => {
                *spec
            }
        }
    }

    /// `progress` runs from 0 (hidden) to 1 (fully entered).
    fn frame(&self, progress: f32, content_height: f32) -> VisibilityFrame {
        let remaining = 1.0 - progress;
        match *self {
            EnterTransition::SlideInVertically {
                initial_offset_fraction,
                ..
            } => VisibilityFrame {
                alpha: 1.0,
                offset_y: content_height * initial_offset_fraction * remaining,
            },
            EnterTransition::FadeIn { initial_alpha, .. } => VisibilityFrame {
                alpha: initial_alpha + (1.0 - initial_alpha) * progress,
                offset_y: 0.0,
            },
        }
    }
}

impl ExitTransition {
    pub fn fade_out(target_alpha: f32, spec: AnimationSpec) -> Self {
        ExitTransition::FadeOut { target_alpha, spec }
    }

    pub fn slide_out_vertically(target_offset_fraction: f32, spec: AnimationSpec) -> Self {
        ExitTransition::SlideOutVertically {
            target_offset_fraction,
            spec,
        }
    }

    pub fn spec(&self) -> AnimationSpec {
        match self {
            ExitTransition::FadeOut { spec, .. }
            | ExitTransition::SlideOutVertically { spec, .. } => *spec,
        }
    }

    /// `progress` runs from 0 (fully shown) to 1 (gone).
    fn frame(&self, progress: f32, content_height: f32) -> VisibilityFrame {
        match *self {
            ExitTransition::FadeOut { target_alpha, .. } => VisibilityFrame {
                alpha: 1.0 + (target_alpha - 1.0) * progress,
                offset_y: 0.0,
            },
            ExitTransition::SlideOutVertically {
                target_offset_fraction,
                ..
            } => VisibilityFrame {
                alpha: 1.0,
                offset_y: content_height * target_offset_fraction * progress,
            },
        }
    }
}

/// Tracks one piece of content through enter and exit transitions.
///
/// Content created visible starts settled, without an enter animation.
pub struct VisibilityAnimation {
    /// 0 = hidden, 1 = fully shown.
    progress: Animatable<f32>,
    visible: Cell<bool>,
    enter: EnterTransition,
    exit: ExitTransition,
}

impl VisibilityAnimation {
    pub fn new(
        visible: bool,
        enter: EnterTransition,
        exit: ExitTransition,
        clock: &FrameClock,
    ) -> Self {
        let initial = if visible { 1.0 } else { 0.0 };
        Self {
            progress: Animatable::new(initial, clock),
            visible: Cell::new(visible),
            enter,
            exit,
        }
    }

    /// Starts the enter or exit transition when visibility flips.
    pub fn set_visible(&self, visible: bool) {
        if self.visible.replace(visible) == visible {
            return;
        }
        if visible {
            self.progress.animate_to(1.0, self.enter.spec());
        } else {
            self.progress.animate_to(0.0, self.exit.spec());
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Whether the content should be drawn, including while it exits.
    pub fn is_rendered(&self) -> bool {
        self.visible.get() || self.progress.value() > 0.0
    }

    pub fn is_running(&self) -> bool {
        self.progress.is_running()
    }

    /// Alpha and offset for the current frame, or `None` once fully hidden.
    pub fn frame(&self, content_height: f32) -> Option<VisibilityFrame> {
        if !self.is_rendered() {
            return None;
        }
        let progress = self.progress.value();
        if self.visible.get() {
            Some(self.enter.frame(progress, content_height))
        } else {
            Some(self.exit.frame(1.0 - progress, content_height))
        }
    }
}

#[cfg(test)]
#[path = "tests/visibility_tests.rs"]
mod tests;
