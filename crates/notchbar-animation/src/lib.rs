//! Animation system for notchbar
//!
//! Time-based tweens driven by a [`FrameClock`], plus the two higher level
//! helpers the bar needs: animate-as-state for a single float and animated
//! visibility for content that slides or fades in and out.

mod animate_as_state;
mod animation;
mod easing;
mod frame_clock;
mod visibility;

pub use animate_as_state::*;
pub use animation::*;
pub use easing::*;
pub use frame_clock::*;
pub use visibility::*;
