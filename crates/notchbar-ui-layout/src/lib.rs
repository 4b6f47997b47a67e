//! Layout contracts & policies for notchbar

mod alignment;
mod weighted;

pub use alignment::*;
pub use weighted::*;

pub mod prelude {
    pub use crate::alignment::{Alignment, AxisAlignment};
    pub use crate::weighted::{distribute_weighted, WeightedSlot};
}
