//! Tween animations driven by a [`FrameClock`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::easing::Easing;
use crate::frame_clock::{FrameCallbackRegistration, FrameClock};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Tween specification: duration, easing and an optional start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// A zero-length tween. Animating with it snaps to the target.
    pub fn snap() -> Self {
        Self::linear(0)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Whether the animation finishes without waiting for a frame.
    pub fn is_immediate(&self) -> bool {
        self.duration_millis == 0 && self.delay_millis == 0
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

type FinishedListener<T> = Box<dyn FnMut(&T)>;

/// Shared handle to a value animated over frames. Clones share the same value.
pub struct Animatable<T: Lerp + Clone + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Lerp + Clone + 'static> {
    clock: FrameClock,
    current: T,
    start: T,
    target: T,
    spec: AnimationSpec,
    running: bool,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_finished: Option<FinishedListener<T>>,
}

impl<T: Lerp + Clone + 'static> Animatable<T> {
    pub fn new(initial: T, clock: &FrameClock) -> Self {
        let inner = AnimatableInner {
            clock: clock.clone(),
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spec: AnimationSpec::default(),
            running: false,
            start_time_nanos: None,
            registration: None,
            on_finished: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animates from the current value to `target`. A running animation is
    /// interrupted and the new one starts from wherever the value is now.
    pub fn animate_to(&self, target: T, spec: AnimationSpec) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.start = inner.current.clone();
            inner.target = target.clone();
            inner.spec = spec;
            inner.start_time_nanos = None;

            if spec.is_immediate() {
                inner.current = target;
                inner.start = inner.current.clone();
                inner.running = false;
            } else {
                inner.running = true;
            }
        }

        if spec.is_immediate() {
            Self::notify_finished(&self.inner);
        } else {
            Self::schedule_frame(&self.inner);
        }
    }

    /// Jumps to `target` without animating. Cancels any running animation and
    /// does not notify the finished listener.
    pub fn snap_to(&self, target: T) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.current = target.clone();
        inner.start = target.clone();
        inner.target = target;
        inner.running = false;
        inner.start_time_nanos = None;
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Called with the final value each time an animation reaches its target.
    pub fn set_on_finished(&self, listener: impl FnMut(&T) + 'static) {
        self.inner.borrow_mut().on_finished = Some(Box::new(listener));
    }

    fn notify_finished(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let (listener, value) = {
            let mut inner = this.borrow_mut();
            (inner.on_finished.take(), inner.current.clone())
        };
        if let Some(mut listener) = listener {
            listener(&value);
            let mut inner = this.borrow_mut();
            if inner.on_finished.is_none() {
                inner.on_finished = Some(listener);
            }
        }
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let finished = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if !inner.running {
                return;
            }

            let spec = inner.spec;
            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let delay_nanos = spec.delay_millis * 1_000_000;

            if elapsed_nanos < delay_nanos {
                false
            } else {
                let duration_nanos = spec.duration_millis * 1_000_000;
                let linear_progress = if duration_nanos == 0 {
                    1.0
                } else {
                    ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0)
                };
                let progress = spec.easing.transform(linear_progress);
                inner.current = inner.start.lerp(&inner.target, progress);

                if linear_progress >= 1.0 {
                    inner.current = inner.target.clone();
                    inner.start = inner.target.clone();
                    inner.start_time_nanos = None;
                    inner.running = false;
                    true
                } else {
                    false
                }
            }
        };

        if finished {
            log::trace!("animation finished at frame {frame_time_nanos}");
            Self::notify_finished(this);
        } else {
            Self::schedule_frame(this);
        }
    }
}

impl<T: Lerp + Clone + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
