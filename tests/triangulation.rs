//! End-to-end triangulation scenarios.

use std::collections::{HashMap, HashSet};

use delaunay2d::hull::{convex_hull_indices, hull_boundary_count};
use delaunay2d::triangulation::{delaunay_triangulation, triangulate, triangulate_with_params};
use delaunay2d::{DelaunayError, DelaunayParams, EdgeCancellation, Point2, Triangle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn pts(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
    coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

/// Four unit-square corners plus interior points kept 0.2 away from the sides.
fn square_with_interior(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    while points.len() < count {
        points.push(Point2::new(
            rng.random_range(0.2..0.8),
            rng.random_range(0.2..0.8),
        ));
    }
    points
}

fn uniform_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point2::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
        .collect()
}

fn undirected_counts(triangles: &[Triangle]) -> HashMap<(usize, usize), usize> {
    let mut counts = HashMap::new();
    for t in triangles {
        for e in t.edges() {
            *counts.entry(e.undirected()).or_insert(0) += 1;
        }
    }
    counts
}

#[test]
fn test_empty_input_fails() {
    let mut points: Vec<Point2<f64>> = Vec::new();
    assert_eq!(
        delaunay_triangulation(&mut points),
        Err(DelaunayError::EmptyInput)
    );
}

#[test]
fn test_three_points_make_one_triangle() {
    let mesh = triangulate(pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)])).unwrap();
    assert_eq!(mesh.len(), 1);
    assert_eq!(mesh.triangles()[0].sorted_indices(), [0, 1, 2]);
}

#[test]
fn test_square_makes_two_delaunay_triangles() {
    let mesh = triangulate(pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])).unwrap();
    assert_eq!(mesh.len(), 2);

    let counts = undirected_counts(mesh.triangles());
    let shared: Vec<_> = counts.iter().filter(|(_, &c)| c == 2).collect();
    assert_eq!(shared.len(), 1);

    // The shared edge is one of the diagonals.
    let (&(a, b), _) = shared[0];
    let (pa, pb) = (mesh.points()[a], mesh.points()[b]);
    assert!(pa.x != pb.x && pa.y != pb.y);

    assert!(mesh.is_delaunay(1e-9));
    assert!(mesh.validate(1e-9).is_valid());
}

#[test]
fn test_single_point_has_no_triangles() {
    let mut points = pts(&[(5.0, 5.0)]);
    let triangles = delaunay_triangulation(&mut points).unwrap();
    assert!(triangles.is_empty());
    assert_eq!(points, pts(&[(5.0, 5.0)]));
}

#[test]
fn test_collinear_points_do_not_crash() {
    let mesh = triangulate(pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])).unwrap();
    assert!(mesh.len() <= 1);
    for t in mesh.triangles() {
        assert!(!t.references_at_least(3));
    }
}

#[test]
fn test_input_is_sorted_in_place() {
    let mut points = uniform_points(50, 3);
    let original = points.clone();
    let triangles = delaunay_triangulation(&mut points).unwrap();

    assert!(points.windows(2).all(|w| w[0].x <= w[1].x));
    assert_eq!(points.len(), original.len());
    for p in &original {
        assert!(points.contains(p));
    }
    for t in &triangles {
        assert!(!t.references_at_least(points.len()));
    }
}

#[test]
fn test_corners_with_interior_points_default_params() {
    let points = square_with_interior(100, 2024);
    let n = points.len();
    let mesh = triangulate(points).unwrap();

    let hull = convex_hull_indices(mesh.points(), 1e-12);
    let h = hull_boundary_count(mesh.points(), &hull, 1e-12);
    assert_eq!(h, 4);
    assert_eq!(mesh.len(), 2 * n - h - 2);

    // Every edge is shared by two triangles except the hull edges.
    let counts = undirected_counts(mesh.triangles());
    assert!(counts.values().all(|&c| c == 1 || c == 2));
    assert_eq!(counts.values().filter(|&&c| c == 1).count(), h);
    assert_eq!(mesh.boundary_edges().len(), h);

    let report = mesh.validate(1e-7);
    assert!(report.is_valid(), "{:?}", report);
}

#[test]
fn test_hundred_uniform_points_form_convex_triangulation() {
    let params = DelaunayParams::new().with_super_triangle_scale(1000.0);

    for seed in [11, 2024, 77] {
        let points = uniform_points(100, seed);
        let n = points.len();
        let mesh = triangulate_with_params(points, &params).unwrap();

        let report = mesh.validate(1e-7);
        assert_eq!(report.expected_triangle_count, Some(mesh.len()), "seed {}", seed);
        assert_eq!(mesh.len(), 2 * n - report.hull_points - 2, "seed {}", seed);
        assert_eq!(report.boundary_edges, report.hull_points, "seed {}", seed);
        assert_eq!(report.boundary_edges_off_hull, 0, "seed {}", seed);
        assert!(report.is_valid(), "seed {}: {:?}", seed, report);
    }
}

#[test]
fn test_small_extent_with_scaled_epsilon() {
    let points: Vec<Point2<f64>> = square_with_interior(30, 7)
        .into_iter()
        .map(|p| Point2::new(p.x * 1e-4, p.y * 1e-4))
        .collect();
    let params = DelaunayParams::new().with_epsilon(1e-15);
    let mesh = triangulate_with_params(points, &params).unwrap();

    let report = mesh.validate(1e-15);
    assert_eq!(report.hull_points, 4);
    assert_eq!(report.orientation_conflicts, 0);
    assert_eq!(mesh.len(), 2 * 30 - 4 - 2);
    assert!(report.is_valid(), "{:?}", report);
}

#[test]
fn test_uniform_points_default_params_are_delaunay() {
    let points = uniform_points(200, 99);
    let mesh = triangulate(points).unwrap();

    let report = mesh.validate(1e-7);
    assert_eq!(report.invalid_indices, 0);
    assert_eq!(report.repeated_vertices, 0);
    assert_eq!(report.orientation_conflicts, 0);
    assert_eq!(report.delaunay_violations, 0);
    // A tight super-triangle can only lose triangles near the hull.
    let expected = report.expected_triangle_count.unwrap();
    assert!(mesh.len() <= expected);
    assert!(mesh.len() > expected / 2);
}

#[test]
fn test_shared_edges_have_opposite_orientation() {
    let mesh = triangulate(square_with_interior(60, 5)).unwrap();
    let mut seen = HashSet::new();
    for e in mesh.edges() {
        assert!(seen.insert(e), "directed edge {:?} used twice", e);
    }
    for e in mesh.edges() {
        let reverse_present = seen.contains(&e.reversed());
        let on_boundary = mesh.boundary_edges().contains(&e);
        assert!(reverse_present != on_boundary);
    }
}

#[test]
fn test_shuffled_input_gives_same_mesh() {
    let points = uniform_points(80, 17);
    let mut shuffled = points.clone();
    shuffled.reverse();
    shuffled.rotate_left(13);

    let a = triangulate(points).unwrap();
    let b = triangulate(shuffled).unwrap();
    assert_eq!(a.points(), b.points());

    let set = |mesh: &delaunay2d::Triangulation<f64>| -> HashSet<[usize; 3]> {
        mesh.triangles().iter().map(Triangle::sorted_indices).collect()
    };
    assert_eq!(set(&a), set(&b));
}

#[test]
fn test_cancellation_strategies_produce_same_mesh() {
    let points = uniform_points(150, 8);
    let hashed = triangulate_with_params(
        points.clone(),
        &DelaunayParams::new().with_edge_cancellation(EdgeCancellation::Hashed),
    )
    .unwrap();
    let pairwise = triangulate_with_params(
        points,
        &DelaunayParams::new().with_edge_cancellation(EdgeCancellation::Pairwise),
    )
    .unwrap();
    assert_eq!(hashed, pairwise);
}

#[test]
fn test_clustered_duplicates_do_not_fail() {
    let mut points = pts(&[
        (1.0, 1.0),
        (1.0, 1.0),
        (2.0, 1.0),
        (2.0, 1.0),
        (1.5, 2.0),
    ]);
    let triangles = delaunay_triangulation(&mut points).unwrap();
    for t in &triangles {
        assert!(!t.references_at_least(points.len()));
        assert!(t.a != t.b && t.b != t.c && t.c != t.a);
    }
}
