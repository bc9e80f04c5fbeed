//! Delaunay triangulation of planar point sets.
//!
//! The insertion engine lives in [`delaunay_triangulation`]; [`triangulate`]
//! wraps it with an owned [`Triangulation`] that can check its own mesh.

mod delaunay;
mod edge_buffer;
mod mesh;
mod params;
mod result;
mod super_triangle;

pub use delaunay::{
    delaunay_triangulation, delaunay_triangulation_with_params, triangulate,
    triangulate_with_params,
};
pub use edge_buffer::EdgeBuffer;
pub use mesh::{Edge, Triangle};
pub use params::{DelaunayParams, EdgeCancellation};
pub use result::{Triangulation, ValidationReport};
pub use super_triangle::SuperTriangle;
