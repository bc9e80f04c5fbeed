//! Index-based triangle and edge records.

/// A triangle represented by indices into a point array.
///
/// Triangles built by the insertion engine are clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First vertex index
    pub a: usize,
    /// Second vertex index
    pub b: usize,
    /// Third vertex index
    pub c: usize,
}

impl Triangle {
    /// Creates a new triangle from vertex indices.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the vertex indices as an array.
    #[inline]
    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the three directed edges in rotation order `ab`, `bc`, `ca`.
    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }

    /// Checks if the triangle contains a specific vertex index.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }

    /// Checks if any vertex index is `n` or greater.
    #[inline]
    pub fn references_at_least(&self, n: usize) -> bool {
        self.a >= n || self.b >= n || self.c >= n
    }

    /// Returns the vertex not on `edge`, if `edge` belongs to this triangle.
    pub fn opposite(&self, edge: Edge) -> Option<usize> {
        self.edges()
            .iter()
            .zip([self.c, self.a, self.b])
            .find(|(e, _)| e.undirected() == edge.undirected())
            .map(|(_, v)| v)
    }

    /// Returns the indices sorted ascending, for order-free comparison.
    #[inline]
    pub fn sorted_indices(&self) -> [usize; 3] {
        let mut v = self.indices();
        v.sort_unstable();
        v
    }
}

/// A directed edge between two vertex indices.
///
/// Two triangles with consistent winding traverse their shared edge in
/// opposite directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Start vertex index
    pub from: usize,
    /// End vertex index
    pub to: usize,
}

impl Edge {
    /// Creates a new directed edge.
    #[inline]
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Returns the same edge traversed the other way.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Returns the endpoints with the smaller index first.
    #[inline]
    pub fn undirected(self) -> (usize, usize) {
        if self.from < self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}
