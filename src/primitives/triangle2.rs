//! 2D triangle type with circumcircle queries.

use super::Point2;
use crate::error::{DelaunayError, DelaunayResult};
use num_traits::Float;

/// A triangle given by three 2D points.
///
/// No winding is enforced; the circumcircle does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2<F> {
    pub a: Point2<F>,
    pub b: Point2<F>,
    pub c: Point2<F>,
}

/// Outcome of testing a point against a triangle's circumcircle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircumcircleTest {
    /// The point lies inside or on the circumcircle (within tolerance).
    pub inside: bool,
    /// The point lies right of the circumcircle by more than the radius.
    ///
    /// When points are visited in ascending x order, no later point can be
    /// inside this circumcircle either.
    pub done: bool,
}

impl<F: Float> Triangle2<F> {
    /// Creates a new triangle.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self { a, b, c }
    }

    /// Returns twice the signed area.
    ///
    /// Negative for clockwise triangles, positive for counter-clockwise ones.
    #[inline]
    pub fn signed_area2(&self) -> F {
        (self.b - self.a).cross(self.c - self.a)
    }

    /// Computes the circumcenter by intersecting two perpendicular bisectors.
    ///
    /// Bisectors of horizontal edges (within `eps`) have infinite slope, so the
    /// pair is chosen to avoid them: a horizontal `ab` edge fixes the center's
    /// x coordinate directly, and likewise for `bc`.
    ///
    /// # Errors
    ///
    /// Returns [`DelaunayError::CoincidentPoints`] when both `ab` and `bc` are
    /// horizontal, or when the bisectors are parallel (collinear vertices).
    ///
    /// # Example
    ///
    /// ```
    /// use delaunay2d::primitives::{Point2, Triangle2};
    ///
    /// let t = Triangle2::new(
    ///     Point2::new(0.0_f64, 0.0),
    ///     Point2::new(4.0, 0.0),
    ///     Point2::new(0.0, 4.0),
    /// );
    /// let c = t.circumcenter(1e-9).unwrap();
    /// assert!((c.x - 2.0).abs() < 1e-12 && (c.y - 2.0).abs() < 1e-12);
    /// ```
    pub fn circumcenter(&self, eps: F) -> DelaunayResult<Point2<F>> {
        let two = F::one() + F::one();

        let (x1, y1) = (self.a.x, self.a.y);
        let (x2, y2) = (self.b.x, self.b.y);
        let (x3, y3) = (self.c.x, self.c.y);

        let dy12 = (y1 - y2).abs();
        let dy23 = (y2 - y3).abs();

        if dy12 < eps && dy23 < eps {
            return Err(DelaunayError::CoincidentPoints);
        }

        let (xc, yc) = if dy12 < eps {
            let m2 = -(x3 - x2) / (y3 - y2);
            let mx2 = (x2 + x3) / two;
            let my2 = (y2 + y3) / two;
            let xc = (x2 + x1) / two;
            (xc, m2 * (xc - mx2) + my2)
        } else if dy23 < eps {
            let m1 = -(x2 - x1) / (y2 - y1);
            let mx1 = (x1 + x2) / two;
            let my1 = (y1 + y2) / two;
            let xc = (x3 + x2) / two;
            (xc, m1 * (xc - mx1) + my1)
        } else {
            let m1 = -(x2 - x1) / (y2 - y1);
            let m2 = -(x3 - x2) / (y3 - y2);
            let mx1 = (x1 + x2) / two;
            let mx2 = (x2 + x3) / two;
            let my1 = (y1 + y2) / two;
            let my2 = (y2 + y3) / two;
            let xc = (m1 * mx1 - m2 * mx2 + my2 - my1) / (m1 - m2);
            // Solve on the steeper edge's bisector for a better-conditioned y.
            let yc = if dy12 > dy23 {
                m1 * (xc - mx1) + my1
            } else {
                m2 * (xc - mx2) + my2
            };
            (xc, yc)
        };

        if !(xc.is_finite() && yc.is_finite()) {
            return Err(DelaunayError::CoincidentPoints);
        }

        Ok(Point2::new(xc, yc))
    }

    /// Tests `p` against the circumcircle of this triangle.
    ///
    /// `inside` is inclusive: points within `eps` of the circle (in squared
    /// distance) count as inside.
    ///
    /// # Errors
    ///
    /// Propagates [`DelaunayError::CoincidentPoints`] from
    /// [`circumcenter`](Self::circumcenter).
    ///
    /// # Example
    ///
    /// ```
    /// use delaunay2d::primitives::{Point2, Triangle2};
    ///
    /// let t = Triangle2::new(
    ///     Point2::new(0.0_f64, 0.0),
    ///     Point2::new(1.0, 0.0),
    ///     Point2::new(0.5, 0.866),
    /// );
    ///
    /// let near = t.in_circumcircle(Point2::new(0.5, 0.3), 1e-9).unwrap();
    /// assert!(near.inside && !near.done);
    ///
    /// let far_right = t.in_circumcircle(Point2::new(10.0, 0.0), 1e-9).unwrap();
    /// assert!(!far_right.inside && far_right.done);
    /// ```
    pub fn in_circumcircle(&self, p: Point2<F>, eps: F) -> DelaunayResult<CircumcircleTest> {
        let center = self.circumcenter(eps)?;
        let r2 = self.a.distance_squared(center);

        let dx = p.x - center.x;
        let dy = p.y - center.y;
        let d2 = dx * dx + dy * dy;

        Ok(CircumcircleTest {
            inside: d2 - r2 <= eps,
            done: dx > F::zero() && dx * dx > r2,
        })
    }
}
