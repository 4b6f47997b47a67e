//! Testing utilities and harness for notchbar

mod frame_driver;

pub use frame_driver::*;

pub mod prelude {
    pub use crate::frame_driver::{FrameDriver, FRAME_NANOS_60FPS};
}
