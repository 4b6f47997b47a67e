//! Deterministic frame pump for animation tests.

use notchbar_animation::FrameClock;

/// One frame at ~60 FPS.
pub const FRAME_NANOS_60FPS: u64 = 16_666_667;

/// Drives a [`FrameClock`] with synthetic, evenly spaced timestamps.
pub struct FrameDriver {
    clock: FrameClock,
    now_nanos: u64,
    frame_nanos: u64,
    frames: u64,
}

impl FrameDriver {
    pub fn new(clock: FrameClock) -> Self {
        Self {
            clock,
            now_nanos: 0,
            frame_nanos: FRAME_NANOS_60FPS,
            frames: 0,
        }
    }

    pub fn with_frame_nanos(mut self, frame_nanos: u64) -> Self {
        self.frame_nanos = frame_nanos.max(1);
        self
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn now_nanos(&self) -> u64 {
        self.now_nanos
    }

    pub fn now_millis(&self) -> u64 {
        self.now_nanos / 1_000_000
    }

    /// Number of frames delivered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Delivers one frame at the current time, then advances the time.
    pub fn frame(&mut self) -> usize {
        let ran = self.clock.drain_frame_callbacks(self.now_nanos);
        self.frames += 1;
        self.now_nanos += self.frame_nanos;
        ran
    }

    /// Delivers frames covering `millis` of time.
    pub fn advance_by_millis(&mut self, millis: u64) {
        let until = self.now_nanos + millis * 1_000_000;
        while self.now_nanos <= until {
            self.frame();
        }
    }

    /// Delivers frames until no callback is pending, calling `observe` after each.
    /// Returns the number of frames delivered, or `None` if still busy after `max_frames`.
    pub fn run_until_idle_with(
        &mut self,
        max_frames: usize,
        mut observe: impl FnMut(u64),
    ) -> Option<usize> {
        for delivered in 0..max_frames {
            if !self.clock.has_pending_callbacks() {
                return Some(delivered);
            }
            let frame_time = self.now_nanos;
            self.frame();
            observe(frame_time);
        }
        if self.clock.has_pending_callbacks() {
            log::warn!("clock still busy after {max_frames} frames");
            None
        } else {
            Some(max_frames)
        }
    }

    pub fn run_until_idle(&mut self, max_frames: usize) -> Option<usize> {
        self.run_until_idle_with(max_frames, |_| {})
    }
}
