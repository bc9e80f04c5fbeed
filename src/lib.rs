//! delaunay2d - Planar Delaunay triangulation
//!
//! Triangulates scattered 2D points by incremental insertion into an
//! enclosing super-triangle. Points are processed in ascending x order so
//! that triangles behind the sweep can be retired early.
//!
//! # Example
//!
//! ```
//! use delaunay2d::{triangulate, Point2};
//!
//! let points = vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(0.5, 0.5),
//! ];
//!
//! let mesh = triangulate(points)?;
//! assert_eq!(mesh.len(), 4);
//! assert!(mesh.validate(1e-9).is_valid());
//! # Ok::<(), delaunay2d::DelaunayError>(())
//! ```

pub mod bounds;
pub mod error;
pub mod hull;
pub mod primitives;
pub mod triangulation;

pub use error::{DelaunayError, DelaunayResult};
pub use primitives::{Point2, Triangle2, Vec2};
pub use triangulation::{
    delaunay_triangulation, delaunay_triangulation_with_params, triangulate,
    triangulate_with_params, DelaunayParams, EdgeCancellation, Triangle, Triangulation,
};
