//! Enclosing triangle used to seed incremental insertion.

use super::DelaunayParams;
use crate::bounds::Aabb2;
use crate::error::{DelaunayError, DelaunayResult};
use crate::primitives::{Point2, Triangle2, Vec2};
use num_traits::Float;

/// A synthetic triangle enclosing every input point.
///
/// Its vertices are appended after the input points during triangulation and
/// every triangle touching them is discarded at the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperTriangle<F> {
    /// Vertices in clockwise order: bottom-left, top, bottom-right.
    pub vertices: [Point2<F>; 3],
    /// Center of the input's bounding box.
    pub center: Point2<F>,
    /// Half-extent `k`; the vertices are `center + (-k, -k)`, `(0, k)`, `(k, -k)`.
    pub half_extent: F,
}

impl<F: Float> SuperTriangle<F> {
    /// Builds the super-triangle for `points` with default parameters.
    ///
    /// # Errors
    ///
    /// Returns [`DelaunayError::EmptyInput`] if `points` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use delaunay2d::triangulation::SuperTriangle;
    /// use delaunay2d::Point2;
    ///
    /// let points = [Point2::new(0.0_f64, 0.0), Point2::new(4.0, 2.0)];
    /// let st = SuperTriangle::enclosing(&points).unwrap();
    ///
    /// assert_eq!(st.center, Point2::new(2.0, 1.0));
    /// assert_eq!(st.half_extent, 8.0);
    /// assert!(points.iter().all(|&p| st.encloses(p)));
    /// ```
    pub fn enclosing(points: &[Point2<F>]) -> DelaunayResult<Self> {
        Self::enclosing_with_params(points, &DelaunayParams::default())
    }

    /// Builds the super-triangle for `points`.
    ///
    /// The half-extent is `super_triangle_scale` times the larger side of the
    /// bounding box. A zero-size box (one point, or all points coincident)
    /// instead uses `single_point_scale` times the point's largest absolute
    /// coordinate, or 1 if that is zero, so the triangle never collapses.
    ///
    /// # Errors
    ///
    /// Returns [`DelaunayError::EmptyInput`] if `points` is empty.
    pub fn enclosing_with_params(
        points: &[Point2<F>],
        params: &DelaunayParams<F>,
    ) -> DelaunayResult<Self> {
        let bounds = Aabb2::from_points(points.iter().copied()).ok_or(DelaunayError::EmptyInput)?;
        let center = bounds.center();

        let half_extent = if bounds.is_point() {
            let k = center.to_vec().max_abs_component() * params.single_point_scale;
            if k > F::zero() {
                k
            } else {
                F::one()
            }
        } else {
            bounds.spread() * params.super_triangle_scale
        };

        Ok(Self::around(center, half_extent))
    }

    /// Builds the triangle with the given center and half-extent.
    pub fn around(center: Point2<F>, half_extent: F) -> Self {
        let k = half_extent;
        Self {
            vertices: [
                center + Vec2::new(-k, -k),
                center + Vec2::new(F::zero(), k),
                center + Vec2::new(k, -k),
            ],
            center,
            half_extent,
        }
    }

    /// Returns the triangle as geometry.
    #[inline]
    pub fn triangle(&self) -> Triangle2<F> {
        let [a, b, c] = self.vertices;
        Triangle2::new(a, b, c)
    }

    /// Checks if `p` lies strictly inside the triangle.
    pub fn encloses(&self, p: Point2<F>) -> bool {
        let [a, b, c] = self.vertices;
        let zero = F::zero();
        // Clockwise winding: inside means right of every edge.
        Triangle2::new(a, b, p).signed_area2() < zero
            && Triangle2::new(b, c, p).signed_area2() < zero
            && Triangle2::new(c, a, p).signed_area2() < zero
    }
}
