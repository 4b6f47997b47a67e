//! Pure math/data for drawing & units in notchbar
//!
//! Geometry primitives, colors, brushes, paths, vector images and unit types
//! shared by the layout, animation and widget crates.

mod brush;
mod color;
mod draw;
mod geometry;
mod path;
mod unit;
mod vector;

pub use brush::*;
pub use color::*;
pub use draw::*;
pub use geometry::*;
pub use path::*;
pub use unit::*;
pub use vector::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::draw::{DrawPrimitive, DrawScope, DrawScopeDefault};
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::path::{FillType, Path, PathCommand};
    pub use crate::unit::{Density, Dp, Sp};
    pub use crate::vector::ImageVector;
}
