//! Convex hull of a point set.
//!
//! Used to check triangulation boundaries: a Delaunay triangulation covers
//! exactly the convex hull of its points, so every boundary edge must lie on
//! it and the triangle count follows from the number of hull points.
//!
//! # Example
//!
//! ```
//! use delaunay2d::hull::convex_hull_indices;
//! use delaunay2d::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 0.5), // Interior point
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let hull = convex_hull_indices(&points, 0.0);
//!
//! assert_eq!(hull.len(), 4);
//! assert!(!hull.contains(&2));
//! ```

use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the convex hull using Andrew's monotone chain algorithm.
///
/// Returns indices into `points` in counter-clockwise order, starting from the
/// lowest-x point. Points within `eps` of a hull edge (measured as the cross
/// product of the turn) are dropped, so only corners are returned.
///
/// # Complexity
///
/// - Time: O(n log n) due to sorting
/// - Space: O(n)
pub fn convex_hull_indices<F: Float>(points: &[Point2<F>], eps: F) -> Vec<usize> {
    if points.len() < 3 {
        return (0..points.len()).collect();
    }

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&i, &j| {
        let (a, b) = (points[i], points[j]);
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });

    let mut lower: Vec<usize> = Vec::new();
    for &i in &order {
        while lower.len() >= 2
            && turn(points, lower[lower.len() - 2], lower[lower.len() - 1], i) <= eps
        {
            lower.pop();
        }
        lower.push(i);
    }

    let mut upper: Vec<usize> = Vec::new();
    for &i in order.iter().rev() {
        while upper.len() >= 2
            && turn(points, upper[upper.len() - 2], upper[upper.len() - 1], i) <= eps
        {
            upper.pop();
        }
        upper.push(i);
    }

    // Endpoints are shared between the chains.
    lower.pop();
    upper.pop();

    lower.extend(upper);
    lower
}

/// Counts the points that lie on the boundary of a convex hull.
///
/// `hull` holds vertex indices as returned by [`convex_hull_indices`]. A point
/// is on the boundary when its distance to some hull edge is at most `eps`.
/// Hull corners are always counted.
pub fn hull_boundary_count<F: Float>(points: &[Point2<F>], hull: &[usize], eps: F) -> usize {
    if hull.len() < 2 {
        return hull.len();
    }

    let eps_sq = eps * eps;
    points
        .iter()
        .filter(|&&p| {
            (0..hull.len()).any(|k| {
                let a = points[hull[k]];
                let b = points[hull[(k + 1) % hull.len()]];
                segment_distance_squared(a, b, p) <= eps_sq
            })
        })
        .count()
}

/// Cross product of `(a - o)` and `(b - o)`; positive for a left turn.
fn turn<F: Float>(points: &[Point2<F>], o: usize, a: usize, b: usize) -> F {
    (points[a] - points[o]).cross(points[b] - points[o])
}

fn segment_distance_squared<F: Float>(a: Point2<F>, b: Point2<F>, p: Point2<F>) -> F {
    let ab = b - a;
    let len_sq = ab.magnitude_squared();
    if len_sq <= F::zero() {
        return a.distance_squared(p);
    }
    let t = ((p - a).dot(ab) / len_sq).max(F::zero()).min(F::one());
    let closest = a + ab * t;
    closest.distance_squared(p)
}
