//! Triangulation parameters.

use crate::error::{DelaunayError, DelaunayResult};
use num_traits::Float;

/// How cavity edges shared by two removed triangles are cancelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgeCancellation {
    /// Count each undirected edge in a hash map and keep edges seen once.
    #[default]
    Hashed,

    /// Compare every pair of buffered edges and drop reverse or duplicate pairs.
    /// Quadratic in the cavity size, which is small in practice.
    Pairwise,
}

/// Parameters for Delaunay triangulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelaunayParams<F> {
    /// Tolerance for horizontal-edge detection in the circumcenter solve and
    /// for the inclusive in-circumcircle test.
    ///
    /// The tolerance is absolute and the circle test compares squared
    /// distances, so it must be scaled to the input. The default `1e-9` suits
    /// coordinates of order one; for an extent `s`, use roughly `1e-9 * s * s`.
    /// A tolerance close to the squared extent merges unrelated circles and
    /// yields overlapping triangles, or none at all.
    pub epsilon: F,

    /// Cavity edge cancellation strategy.
    pub edge_cancellation: EdgeCancellation,

    /// Super-triangle half-extent as a multiple of the bounding box's larger side.
    ///
    /// The default `2.0` keeps the super-triangle vertices close to the input,
    /// so triangles near the convex hull whose circumcircle reaches a
    /// super-triangle vertex are lost. The result is then non-convex and has
    /// fewer than `2n - h - 2` triangles. A large scale such as `1000.0`
    /// recovers the full convex triangulation for typical inputs.
    pub super_triangle_scale: F,

    /// Super-triangle half-extent for a single point, as a multiple of the
    /// point's largest absolute coordinate. Falls back to 1 when that is zero.
    pub single_point_scale: F,
}

impl<F: Float> Default for DelaunayParams<F> {
    fn default() -> Self {
        Self {
            epsilon: F::from(1e-9).unwrap(),
            edge_cancellation: EdgeCancellation::default(),
            super_triangle_scale: F::from(2.0).unwrap(),
            single_point_scale: F::from(0.125).unwrap(),
        }
    }
}

impl<F: Float> DelaunayParams<F> {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the geometric tolerance.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: F) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the edge cancellation strategy.
    #[must_use]
    pub fn with_edge_cancellation(mut self, strategy: EdgeCancellation) -> Self {
        self.edge_cancellation = strategy;
        self
    }

    /// Set the super-triangle scale for multi-point inputs.
    #[must_use]
    pub fn with_super_triangle_scale(mut self, scale: F) -> Self {
        self.super_triangle_scale = scale;
        self
    }

    /// Set the super-triangle scale for single-point inputs.
    #[must_use]
    pub fn with_single_point_scale(mut self, scale: F) -> Self {
        self.single_point_scale = scale;
        self
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`DelaunayError::InvalidParameter`] for a negative or
    /// non-finite epsilon, or a scale that is not finite and positive.
    pub fn validate(&self) -> DelaunayResult<()> {
        if !self.epsilon.is_finite() || self.epsilon < F::zero() {
            return Err(invalid("epsilon", self.epsilon));
        }
        if !self.super_triangle_scale.is_finite() || self.super_triangle_scale <= F::zero() {
            return Err(invalid("super_triangle_scale", self.super_triangle_scale));
        }
        if !self.single_point_scale.is_finite() || self.single_point_scale <= F::zero() {
            return Err(invalid("single_point_scale", self.single_point_scale));
        }
        Ok(())
    }
}

fn invalid<F: Float>(name: &'static str, value: F) -> DelaunayError {
    DelaunayError::InvalidParameter {
        name,
        value: value.to_f64().unwrap_or(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params: DelaunayParams<f64> = DelaunayParams::new();
        assert_eq!(params.epsilon, 1e-9);
        assert_eq!(params.edge_cancellation, EdgeCancellation::Hashed);
        assert_eq!(params.super_triangle_scale, 2.0);
        assert_eq!(params.single_point_scale, 0.125);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let params: DelaunayParams<f64> = DelaunayParams::new()
            .with_epsilon(1e-6)
            .with_edge_cancellation(EdgeCancellation::Pairwise)
            .with_super_triangle_scale(20.0)
            .with_single_point_scale(0.5);
        assert_eq!(params.epsilon, 1e-6);
        assert_eq!(params.edge_cancellation, EdgeCancellation::Pairwise);
        assert_eq!(params.super_triangle_scale, 20.0);
        assert_eq!(params.single_point_scale, 0.5);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let negative = DelaunayParams::<f64>::new().with_epsilon(-1.0);
        assert_eq!(
            negative.validate(),
            Err(DelaunayError::InvalidParameter {
                name: "epsilon",
                value: -1.0
            })
        );

        let zero_scale = DelaunayParams::<f64>::new().with_super_triangle_scale(0.0);
        assert!(matches!(
            zero_scale.validate(),
            Err(DelaunayError::InvalidParameter {
                name: "super_triangle_scale",
                ..
            })
        ));

        let nan_scale = DelaunayParams::<f64>::new().with_single_point_scale(f64::NAN);
        assert!(nan_scale.validate().is_err());
    }

    #[test]
    fn test_zero_epsilon_is_allowed() {
        let params = DelaunayParams::<f64>::new().with_epsilon(0.0);
        assert!(params.validate().is_ok());
    }
}
