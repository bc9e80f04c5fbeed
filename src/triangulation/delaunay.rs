//! Delaunay triangulation by incremental insertion (Bowyer-Watson).
//!
//! Delaunay triangulation maximizes the minimum angle of all triangles,
//! avoiding skinny triangles when possible. It has the property that no
//! point lies inside the circumcircle of any triangle.
//!
//! # Algorithm
//!
//! 1. Sort the points by ascending x and seed the mesh with a super-triangle
//! 2. For each point, remove every triangle whose circumcircle contains it and
//!    connect the boundary of the resulting cavity to the point
//! 3. Remove triangles connected to the super-triangle vertices
//!
//! Because points arrive in x order, a triangle whose circumcircle lies
//! entirely left of the current point can never be hit again. Such triangles
//! are marked done and skipped by later steps.
//!
//! # Complexity
//!
//! - Time: O(n²) worst case, close to O(n) per step for typical inputs
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use delaunay2d::triangulation::delaunay_triangulation;
//! use delaunay2d::Point2;
//!
//! let mut points: Vec<Point2<f64>> = vec![
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.5, 1.0),
//!     Point2::new(0.5, 0.3),
//! ];
//!
//! let triangles = delaunay_triangulation(&mut points)?;
//! assert_eq!(triangles.len(), 3);
//!
//! // Indices refer to the slice after sorting by x.
//! assert!(points.windows(2).all(|w| w[0].x <= w[1].x));
//! for tri in &triangles {
//!     assert!(tri.indices().iter().all(|&i| i < points.len()));
//! }
//! # Ok::<(), delaunay2d::DelaunayError>(())
//! ```

use super::{DelaunayParams, EdgeBuffer, SuperTriangle, Triangle, Triangulation};
use crate::error::{DelaunayError, DelaunayResult};
use crate::primitives::{Point2, Triangle2};
use num_traits::Float;
use tracing::{debug, trace, warn};

/// A triangle still in the working set, with its done flag.
#[derive(Debug, Clone, Copy)]
struct ActiveTriangle {
    triangle: Triangle,
    done: bool,
}

impl ActiveTriangle {
    #[inline]
    fn open(triangle: Triangle) -> Self {
        Self {
            triangle,
            done: false,
        }
    }
}

/// Computes the Delaunay triangulation of `points`, sorting them in place.
///
/// `points` is reordered by ascending x (unstable for equal x) and the returned
/// triangles index into that sorted order, not the caller's original order.
/// Use [`triangulate`] to keep the input untouched.
///
/// Triangles are clockwise. A single point, or a fully collinear set, yields
/// no triangles.
///
/// With default parameters the super-triangle is only twice the input's
/// extent, and triangles near the convex hull can be missing from the result.
/// Raise [`DelaunayParams::super_triangle_scale`] (e.g.
/// `with_super_triangle_scale(1000.0)`) when the full convex triangulation is
/// needed. [`DelaunayParams::epsilon`] is an absolute tolerance on squared
/// distances; inputs far from unit scale need it scaled to match.
///
/// # Errors
///
/// Returns [`DelaunayError::EmptyInput`] if `points` is empty. Degenerate
/// triangles met along the way never fail the call.
pub fn delaunay_triangulation<F: Float>(points: &mut [Point2<F>]) -> DelaunayResult<Vec<Triangle>> {
    delaunay_triangulation_with_params(points, &DelaunayParams::default())
}

/// Like [`delaunay_triangulation`], with explicit parameters.
///
/// # Errors
///
/// Returns [`DelaunayError::InvalidParameter`] if `params` fails validation,
/// or [`DelaunayError::EmptyInput`] if `points` is empty.
pub fn delaunay_triangulation_with_params<F: Float>(
    points: &mut [Point2<F>],
    params: &DelaunayParams<F>,
) -> DelaunayResult<Vec<Triangle>> {
    params.validate()?;
    if points.is_empty() {
        return Err(DelaunayError::EmptyInput);
    }

    points.sort_unstable_by(Point2::cmp_x);

    let super_triangle = SuperTriangle::enclosing_with_params(points, params)?;

    // Squared circumradii are of order k²; an epsilon near that swallows the test.
    let k = super_triangle.half_extent;
    if params.epsilon * F::from(1e6).unwrap_or_else(F::max_value) > k * k {
        warn!(
            "Epsilon {} is large for a super-triangle half-extent of {}; scale epsilon to the input",
            params.epsilon.to_f64().unwrap_or(f64::NAN),
            k.to_f64().unwrap_or(f64::NAN)
        );
    }

    Ok(insert_points(points, &super_triangle, params))
}

/// Computes the Delaunay triangulation of an owned point set.
///
/// Returns the points sorted by x together with the triangles indexing them.
///
/// The same parameter caveats as [`delaunay_triangulation`] apply: the default
/// super-triangle can drop triangles near the hull, and the default epsilon
/// assumes coordinates of order one.
///
/// # Errors
///
/// Returns [`DelaunayError::EmptyInput`] if `points` is empty.
///
/// # Example
///
/// ```
/// use delaunay2d::triangulation::triangulate;
/// use delaunay2d::Point2;
///
/// let points = vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ];
///
/// let mesh = triangulate(points)?;
/// assert_eq!(mesh.len(), 2);
/// assert_eq!(mesh.boundary_edges().len(), 4);
/// assert!(mesh.is_delaunay(1e-9));
/// # Ok::<(), delaunay2d::DelaunayError>(())
/// ```
pub fn triangulate<F: Float>(points: Vec<Point2<F>>) -> DelaunayResult<Triangulation<F>> {
    triangulate_with_params(points, &DelaunayParams::default())
}

/// Like [`triangulate`], with explicit parameters.
///
/// # Errors
///
/// Returns [`DelaunayError::InvalidParameter`] if `params` fails validation,
/// or [`DelaunayError::EmptyInput`] if `points` is empty.
pub fn triangulate_with_params<F: Float>(
    mut points: Vec<Point2<F>>,
    params: &DelaunayParams<F>,
) -> DelaunayResult<Triangulation<F>> {
    let triangles = delaunay_triangulation_with_params(&mut points, params)?;
    Ok(Triangulation::from_parts(points, triangles))
}

/// Inserts x-sorted `points` one at a time into the super-triangle mesh.
fn insert_points<F: Float>(
    points: &[Point2<F>],
    super_triangle: &SuperTriangle<F>,
    params: &DelaunayParams<F>,
) -> Vec<Triangle> {
    let n = points.len();
    let vertex = |i: usize| -> Point2<F> {
        if i < n {
            points[i]
        } else {
            super_triangle.vertices[i - n]
        }
    };

    debug!(
        "Triangulating {} points, super-triangle half-extent {}",
        n,
        super_triangle.half_extent.to_f64().unwrap_or(f64::NAN)
    );

    let mut active: Vec<ActiveTriangle> = Vec::with_capacity(2 * n + 1);
    active.push(ActiveTriangle::open(Triangle::new(n, n + 1, n + 2)));

    let mut cavity = EdgeBuffer::with_capacity(32);
    let mut degenerate = 0usize;

    for (i, &p) in points.iter().enumerate() {
        cavity.clear();

        let mut j = 0;
        while j < active.len() {
            if active[j].done {
                j += 1;
                continue;
            }

            let t = active[j].triangle;
            let geometry = Triangle2::new(vertex(t.a), vertex(t.b), vertex(t.c));

            match geometry.in_circumcircle(p, params.epsilon) {
                Ok(test) if test.inside => {
                    cavity.push_triangle(t);
                    // The swapped-in triangle lands at `j` and is examined next.
                    active.swap_remove(j);
                    continue;
                }
                Ok(test) => active[j].done = test.done,
                Err(_) => {
                    trace!("Closing degenerate triangle {:?} at point {}", t, i);
                    active[j].done = true;
                    degenerate += 1;
                }
            }
            j += 1;
        }

        let removed = cavity.len() / 3;
        cavity.cancel_shared(params.edge_cancellation);

        trace!(
            "Point {}: removed {} triangles, {} boundary edges",
            i,
            removed,
            cavity.len()
        );

        active.extend(
            cavity
                .edges()
                .iter()
                .map(|e| ActiveTriangle::open(Triangle::new(e.from, e.to, i))),
        );
    }

    let candidates = active.len();
    let triangles: Vec<Triangle> = active
        .into_iter()
        .map(|slot| slot.triangle)
        .filter(|t| !t.references_at_least(n))
        .collect();

    if degenerate > 0 {
        warn!(
            "Closed {} degenerate triangles during insertion; mesh may be imperfect",
            degenerate
        );
    }
    debug!(
        "Triangulation complete: {} triangles ({} discarded with super-triangle vertices, {} degenerate closed)",
        triangles.len(),
        candidates - triangles.len(),
        degenerate
    );

    triangles
}
