//! Brush definitions for painting

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    /// Returns the color for a solid brush.
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Brush::Solid(color) => Some(*color),
        }
    }
}
