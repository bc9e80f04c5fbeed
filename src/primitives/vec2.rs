//! Displacement between two points.

use num_traits::Float;
use std::ops::Mul;

/// A 2D offset, the result of subtracting two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Perp-dot product. Positive when `other` turns counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared length.
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// `max(|x|, |y|)`, the half-side of the smallest centered square holding the offset.
    #[inline]
    pub fn max_abs_component(self) -> F {
        self.x.abs().max(self.y.abs())
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}
