//! Weighted directed graphs consumed by the shortest-path and spanning-tree
//! engines
//!
//! The engines only need two things from a graph: its vertex count and, per
//! vertex, the outgoing edges. That contract is the [`WeightedGraph`] trait.
//! [`Graph`] is the adjacency-list implementation used throughout the crate.

/// Vertex identifier, an index in `0..vertex_count`
pub type Vertex = usize;

/// Non-negative edge weight
pub type Weight = u32;

/// An outgoing edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub to: Vertex,
    pub weight: Weight,
}

/// The view of a graph the engines need
///
/// `neighbors` must return the same sequence every time it is called for a
/// vertex during one traversal.
pub trait WeightedGraph {
    /// Number of vertices; valid vertices are `0..vertex_count()`
    fn vertex_count(&self) -> usize;

    /// Outgoing edges of `vertex`
    fn neighbors(&self, vertex: Vertex) -> &[Edge];
}

/// Adjacency-list graph with a fixed vertex set
///
/// # Example
///
/// ```rust
/// use decrease_key_heaps::graph::{Graph, WeightedGraph};
///
/// let mut graph = Graph::new(3);
/// graph.add_undirected_edge(0, 1, 4);
/// graph.add_directed_edge(1, 2, 1);
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.neighbors(1).len(), 2);
/// assert_eq!(graph.edge_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        Graph {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Adds an edge from `from` to `to`
    ///
    /// # Panics
    /// Panics if either endpoint is not a vertex of the graph.
    pub fn add_directed_edge(&mut self, from: Vertex, to: Vertex, weight: Weight) {
        let vertex_count = self.adjacency.len();
        assert!(
            from < vertex_count && to < vertex_count,
            "edge {from} -> {to} out of range for graph with {vertex_count} vertices"
        );
        self.adjacency[from].push(Edge { to, weight });
    }

    /// Adds edges in both directions between `a` and `b`
    pub fn add_undirected_edge(&mut self, a: Vertex, b: Vertex, weight: Weight) {
        self.add_directed_edge(a, b, weight);
        self.add_directed_edge(b, a, weight);
    }

    /// Number of directed edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Number of undirected edges, assuming every edge was added both ways
    pub fn undirected_edge_count(&self) -> usize {
        self.edge_count() / 2
    }

    /// Iterates over all directed edges as `(from, edge)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Edge)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |&edge| (from, edge)))
    }
}

impl WeightedGraph for Graph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbors(&self, vertex: Vertex) -> &[Edge] {
        &self.adjacency[vertex]
    }
}
