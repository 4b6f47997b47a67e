//! A float that follows a target value, animating whenever the target moves.

use crate::animation::{Animatable, AnimationSpec};
use crate::frame_clock::FrameClock;

pub struct FloatAnimationState {
    animatable: Animatable<f32>,
    label: String,
}

impl FloatAnimationState {
    pub fn new(initial: f32, clock: &FrameClock, label: impl Into<String>) -> Self {
        Self {
            animatable: Animatable::new(initial, clock),
            label: label.into(),
        }
    }

    /// Feeds the latest target. A new animation starts only when the target
    /// differs from the current one; `spec` applies to that animation.
    /// Returns whether an animation was started.
    pub fn update(&self, target: f32, spec: AnimationSpec) -> bool {
        let is_new_target = (self.animatable.target() - target).abs() > f32::EPSILON;
        if !is_new_target {
            return false;
        }
        log::trace!(
            "{}: retarget {} -> {} over {}ms",
            self.label,
            self.animatable.value(),
            target,
            spec.duration_millis
        );
        self.animatable.animate_to(target, spec);
        true
    }

    pub fn value(&self) -> f32 {
        self.animatable.value()
    }

    pub fn target(&self) -> f32 {
        self.animatable.target()
    }

    pub fn is_running(&self) -> bool {
        self.animatable.is_running()
    }

    pub fn set_finished_listener(&self, mut listener: impl FnMut(f32) + 'static) {
        self.animatable.set_on_finished(move |value| listener(*value));
    }
}
