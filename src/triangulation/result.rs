//! Owned triangulation result and mesh checks.

use super::{Edge, Triangle};
use crate::hull::{convex_hull_indices, hull_boundary_count};
use crate::primitives::{Point2, Triangle2};
use num_traits::Float;
use std::collections::HashMap;

/// A triangulated point set.
///
/// Holds the points in the x-sorted order the triangles index into.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation<F> {
    points: Vec<Point2<F>>,
    triangles: Vec<Triangle>,
}

/// Summary of a triangulation's structural and Delaunay checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of triangles checked.
    pub triangle_count: usize,
    /// Triangles with an index outside the point array.
    pub invalid_indices: usize,
    /// Triangles naming the same vertex twice.
    pub repeated_vertices: usize,
    /// Triangles without a usable circumcircle.
    pub degenerate_triangles: usize,
    /// Directed edges used by more than one triangle (inconsistent winding).
    pub orientation_conflicts: usize,
    /// Edges used by exactly one triangle.
    pub boundary_edges: usize,
    /// Boundary edges with input points strictly on their outer side.
    pub boundary_edges_off_hull: usize,
    /// Points on the convex hull boundary.
    pub hull_points: usize,
    /// `2n - h - 2`, when the hull has at least three corners.
    pub expected_triangle_count: Option<usize>,
    /// Triangles whose circumcircle strictly contains another point.
    pub delaunay_violations: usize,
}

impl ValidationReport {
    /// Checks that every count is clean.
    pub fn is_valid(&self) -> bool {
        self.invalid_indices == 0
            && self.repeated_vertices == 0
            && self.degenerate_triangles == 0
            && self.orientation_conflicts == 0
            && self.boundary_edges_off_hull == 0
            && self.delaunay_violations == 0
            && self
                .expected_triangle_count
                .map_or(true, |expected| expected == self.triangle_count)
    }
}

impl<F: Float> Triangulation<F> {
    /// Wraps points and the triangles indexing them.
    pub fn from_parts(points: Vec<Point2<F>>, triangles: Vec<Triangle>) -> Self {
        Self { points, triangles }
    }

    /// The points, sorted by ascending x.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// The triangles, clockwise, in no particular order.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Whether there are no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Splits into points and triangles.
    pub fn into_parts(self) -> (Vec<Point2<F>>, Vec<Triangle>) {
        (self.points, self.triangles)
    }

    /// Returns the geometry of a triangle.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range for this triangulation's points.
    #[inline]
    pub fn triangle_points(&self, t: &Triangle) -> Triangle2<F> {
        Triangle2::new(self.points[t.a], self.points[t.b], self.points[t.c])
    }

    /// Iterates over every directed triangle edge.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.triangles.iter().flat_map(|t| t.edges())
    }

    /// Directed edges with no reverse partner, i.e. the mesh boundary.
    pub fn boundary_edges(&self) -> Vec<Edge> {
        self.boundary_with_opposite()
            .into_iter()
            .map(|(edge, _)| edge)
            .collect()
    }

    /// Number of undirected edges shared by two triangles.
    pub fn interior_edge_count(&self) -> usize {
        self.undirected_counts()
            .values()
            .filter(|&&count| count == 2)
            .count()
    }

    /// Checks that no point lies strictly inside any circumcircle.
    ///
    /// A point counts as inside when its squared distance to the circumcenter
    /// is below the squared radius by more than `tolerance`. Degenerate
    /// triangles are skipped.
    pub fn is_delaunay(&self, tolerance: F) -> bool {
        self.triangles
            .iter()
            .all(|t| self.circumcircle_violations(t, tolerance).unwrap_or(0) == 0)
    }

    /// Runs every structural and Delaunay check.
    pub fn validate(&self, tolerance: F) -> ValidationReport {
        let n = self.points.len();
        let mut report = ValidationReport {
            triangle_count: self.triangles.len(),
            ..ValidationReport::default()
        };

        let mut checkable = true;
        for t in &self.triangles {
            if t.references_at_least(n) {
                report.invalid_indices += 1;
                checkable = false;
                continue;
            }
            if t.a == t.b || t.b == t.c || t.c == t.a {
                report.repeated_vertices += 1;
                continue;
            }
            match self.circumcircle_violations(t, tolerance) {
                Some(0) => {}
                Some(_) => report.delaunay_violations += 1,
                None => report.degenerate_triangles += 1,
            }
        }

        let mut directed: HashMap<Edge, usize> = HashMap::new();
        for edge in self.edges() {
            *directed.entry(edge).or_insert(0) += 1;
        }
        report.orientation_conflicts = directed.values().filter(|&&count| count > 1).count();

        if checkable {
            let boundary = self.boundary_with_opposite();
            report.boundary_edges = boundary.len();
            report.boundary_edges_off_hull = boundary
                .iter()
                .filter(|&&(edge, opposite)| !self.is_hull_edge(edge, opposite, tolerance))
                .count();
        }

        let hull = convex_hull_indices(&self.points, tolerance);
        report.hull_points = hull_boundary_count(&self.points, &hull, tolerance);
        if hull.len() >= 3 {
            report.expected_triangle_count = (2 * n).checked_sub(report.hull_points + 2);
        }

        report
    }

    /// Boundary edges paired with the vertex opposite them in their triangle.
    fn boundary_with_opposite(&self) -> Vec<(Edge, usize)> {
        let counts = self.undirected_counts();
        self.triangles
            .iter()
            .flat_map(|t| t.edges().into_iter().map(move |edge| (edge, t)))
            .filter(|(edge, _)| counts.get(&edge.undirected()).copied() == Some(1))
            .filter_map(|(edge, t)| t.opposite(edge).map(|v| (edge, v)))
            .collect()
    }

    fn undirected_counts(&self) -> HashMap<(usize, usize), usize> {
        let mut counts = HashMap::with_capacity(self.triangles.len() * 2);
        for edge in self.edges() {
            *counts.entry(edge.undirected()).or_insert(0) += 1;
        }
        counts
    }

    /// Counts points strictly inside the circumcircle, or `None` if degenerate.
    fn circumcircle_violations(&self, t: &Triangle, tolerance: F) -> Option<usize> {
        let geometry = self.triangle_points(t);
        // Only exactly horizontal edges take the special case here; `tolerance`
        // applies to the distance comparison alone.
        let center = geometry.circumcenter(F::epsilon()).ok()?;
        let r2 = geometry.a.distance_squared(center);

        let count = self
            .points
            .iter()
            .enumerate()
            .filter(|&(i, &p)| !t.contains_vertex(i) && p.distance_squared(center) < r2 - tolerance)
            .count();
        Some(count)
    }

    /// No point may lie strictly on the far side of `edge` from `opposite`.
    fn is_hull_edge(&self, edge: Edge, opposite: usize, tolerance: F) -> bool {
        let a = self.points[edge.from];
        let b = self.points[edge.to];
        let ab = b - a;
        let len = ab.magnitude_squared().sqrt();
        if len <= F::zero() {
            return false;
        }

        let inner = ab.cross(self.points[opposite] - a);
        let limit = tolerance * len;
        self.points.iter().all(|&p| {
            let side = ab.cross(p - a);
            if inner < F::zero() {
                side <= limit
            } else {
                side >= -limit
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangulation::triangulate;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn test_square_queries() {
        let mesh = triangulate(pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])).unwrap();
        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh.edges().count(), 6);
        assert_eq!(mesh.boundary_edges().len(), 4);
        assert_eq!(mesh.interior_edge_count(), 1);

        let report = mesh.validate(1e-9);
        assert_eq!(report.hull_points, 4);
        assert_eq!(report.expected_triangle_count, Some(2));
        assert!(report.is_valid(), "{:?}", report);
    }

    #[test]
    fn test_into_parts() {
        let mesh = triangulate(pts(&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0)])).unwrap();
        let (points, triangles) = mesh.into_parts();
        assert_eq!(points[2], Point2::new(1.0, 0.0));
        assert_eq!(triangles.len(), 1);
    }

    #[test]
    fn test_triangle_points() {
        let mesh = triangulate(pts(&[(0.0, 0.0), (2.0, 0.0), (0.0, 2.0)])).unwrap();
        let geometry = mesh.triangle_points(&mesh.triangles()[0]);
        assert!(geometry.signed_area2() < 0.0);
    }

    #[test]
    fn test_validate_flags_non_delaunay_mesh() {
        // The short diagonal of this kite is the Delaunay one; force the long one.
        let points = pts(&[(0.0, 0.0), (1.0, -0.2), (2.0, 0.0), (1.0, 0.2)]);
        let mesh = Triangulation::from_parts(
            points,
            vec![Triangle::new(0, 3, 2), Triangle::new(0, 2, 1)],
        );
        assert!(!mesh.is_delaunay(1e-9));
        let report = mesh.validate(1e-9);
        assert_eq!(report.delaunay_violations, 2);
        assert_eq!(report.orientation_conflicts, 0);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_validate_flags_boundary_off_hull() {
        // Dart with a reflex vertex at 1: edges 0-1 and 1-2 are not on the hull.
        let points = pts(&[(0.0, 0.0), (2.0, 1.0), (4.0, 0.0), (2.0, 4.0)]);
        let mesh = Triangulation::from_parts(
            points,
            vec![Triangle::new(0, 1, 3), Triangle::new(1, 2, 3)],
        );
        let report = mesh.validate(1e-9);
        assert_eq!(report.orientation_conflicts, 0);
        assert_eq!(report.boundary_edges, 4);
        assert_eq!(report.boundary_edges_off_hull, 2);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_validate_flags_orientation_conflict() {
        let points = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]);
        // Both triangles traverse 1 -> 2.
        let mesh = Triangulation::from_parts(
            points,
            vec![Triangle::new(0, 1, 2), Triangle::new(3, 1, 2)],
        );
        let report = mesh.validate(1e-9);
        assert_eq!(report.orientation_conflicts, 1);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_validate_flags_invalid_indices() {
        let mesh = Triangulation::from_parts(
            pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]),
            vec![Triangle::new(0, 1, 7)],
        );
        let report = mesh.validate(1e-9);
        assert_eq!(report.invalid_indices, 1);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_validate_flags_missing_triangles() {
        let points = pts(&[(0.0, 0.0), (0.0, 4.0), (4.0, 0.0), (4.0, 4.0)]);
        let mesh = Triangulation::from_parts(points, vec![Triangle::new(0, 1, 3)]);
        let report = mesh.validate(1e-9);
        assert_eq!(report.expected_triangle_count, Some(2));
        assert!(!report.is_valid());
    }

    #[test]
    fn test_collinear_result_validates_without_expected_count() {
        let mesh = triangulate(pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])).unwrap();
        let report = mesh.validate(1e-9);
        assert_eq!(report.invalid_indices, 0);
        assert_eq!(report.expected_triangle_count, None);
    }
}
