//! Floating-point geometric primitives.

mod point2;
mod triangle2;
mod vec2;

pub use point2::Point2;
pub use triangle2::{CircumcircleTest, Triangle2};
pub use vec2::Vec2;
