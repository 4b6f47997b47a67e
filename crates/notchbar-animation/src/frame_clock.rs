//! Frame clock that delivers frame timestamps to registered callbacks.
//!
//! The host calls [`FrameClock::drain_frame_callbacks`] once per frame.
//! Callbacks fire once; a callback that wants the next frame registers again.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type FrameCallbackId = u64;

type FrameCallback = Box<dyn FnOnce(u64)>;

#[derive(Default)]
struct FrameClockInner {
    next_id: FrameCallbackId,
    callbacks: Vec<(FrameCallbackId, FrameCallback)>,
    last_frame_nanos: Option<u64>,
}

#[derive(Clone, Default)]
pub struct FrameClock {
    inner: Rc<RefCell<FrameClockInner>>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.callbacks.push((id, Box::new(callback)));
        FrameCallbackRegistration {
            clock: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Runs every callback registered before this call with `frame_time_nanos`.
    /// Returns how many callbacks ran.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        let callbacks = {
            let mut inner = self.inner.borrow_mut();
            inner.last_frame_nanos = Some(frame_time_nanos);
            std::mem::take(&mut inner.callbacks)
        };
        let count = callbacks.len();
        for (_, callback) in callbacks {
            callback(frame_time_nanos);
        }
        count
    }

    pub fn has_pending_callbacks(&self) -> bool {
        !self.inner.borrow().callbacks.is_empty()
    }

    pub fn last_frame_nanos(&self) -> Option<u64> {
        self.inner.borrow().last_frame_nanos
    }
}

/// Handle to a pending frame callback. Dropping it cancels the callback.
pub struct FrameCallbackRegistration {
    clock: Weak<RefCell<FrameClockInner>>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn cancel(mut self) {
        self.cancel_inner();
    }

    fn cancel_inner(&mut self) {
        if let (Some(id), Some(clock)) = (self.id.take(), self.clock.upgrade()) {
            clock
                .borrow_mut()
                .callbacks
                .retain(|(callback_id, _)| *callback_id != id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.cancel_inner();
    }
}
