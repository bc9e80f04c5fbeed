//! Cavity edge buffer for the insertion engine.
//!
//! Every triangle removed for a new point contributes its three directed
//! edges. Edges shared by two removed triangles are interior to the cavity
//! and cancel; the survivors form the cavity boundary.

use super::{Edge, EdgeCancellation, Triangle};
use std::collections::HashMap;

/// Ordered buffer of directed cavity edges.
#[derive(Debug, Clone, Default)]
pub struct EdgeBuffer {
    edges: Vec<Edge>,
}

impl EdgeBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with room for `capacity` edges.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    /// Removes every edge, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    /// Appends the triangle's edges in rotation order.
    #[inline]
    pub fn push_triangle(&mut self, triangle: Triangle) {
        self.edges.extend(triangle.edges());
    }

    /// Number of buffered edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the buffer holds no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Buffered edges in insertion order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Removes every edge that is shared by two buffered triangles.
    ///
    /// An edge cancels against its reverse, and also against an exact
    /// duplicate, which consistent winding never produces. Survivors keep
    /// their direction and relative order.
    pub fn cancel_shared(&mut self, strategy: EdgeCancellation) {
        match strategy {
            EdgeCancellation::Hashed => self.cancel_hashed(),
            EdgeCancellation::Pairwise => self.cancel_pairwise(),
        }
    }

    fn cancel_hashed(&mut self) {
        let mut counts: HashMap<(usize, usize), usize> = HashMap::with_capacity(self.edges.len());
        for edge in &self.edges {
            *counts.entry(edge.undirected()).or_insert(0) += 1;
        }
        self.edges
            .retain(|edge| counts.get(&edge.undirected()).copied() == Some(1));
    }

    fn cancel_pairwise(&mut self) {
        let n = self.edges.len();
        let mut keep = vec![true; n];

        for j in 0..n {
            if !keep[j] {
                continue;
            }
            let ej = self.edges[j];
            for k in (j + 1)..n {
                if keep[k] && (self.edges[k] == ej.reversed() || self.edges[k] == ej) {
                    keep[j] = false;
                    keep[k] = false;
                    break;
                }
            }
        }

        let mut flags = keep.into_iter();
        self.edges.retain(|_| flags.next().unwrap_or(false));
    }
}
