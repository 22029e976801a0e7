//! Single-source shortest paths (Dijkstra's algorithm)
//!
//! The engine is generic over the heap, so the same code runs with the
//! Fibonacci heap or the pairing heap. Every vertex is queued at the start
//! and relaxed through `decrease_key`, which is where the two heaps' amortized
//! bounds differ.
//!
//! # Example
//!
//! ```rust
//! use decrease_key_heaps::graph::Graph;
//! use decrease_key_heaps::shortest_path::dijkstra;
//! use decrease_key_heaps::fibonacci::FibonacciHeap;
//!
//! let mut graph = Graph::new(4);
//! graph.add_directed_edge(0, 1, 10);
//! graph.add_directed_edge(0, 2, 1);
//! graph.add_directed_edge(2, 1, 5);
//! graph.add_directed_edge(1, 3, 1);
//!
//! let paths = dijkstra::<_, FibonacciHeap<_, _>>(&graph, 0).unwrap();
//! assert_eq!(paths.distance(3), Some(7));
//! assert_eq!(paths.path_to(3), Some(vec![0, 2, 1, 3]));
//! ```

use crate::fibonacci::FibonacciHeap;
use crate::graph::{Vertex, WeightedGraph};
use crate::label_setting::{settle, UNREACHED};
use crate::pairing::PairingHeap;
use crate::stats::HeapStats;
use crate::traits::{Heap, HeapError, HeapKind};

/// Length of a path: the sum of its edge weights
pub type Distance = u64;

/// Result of a single-source shortest path search
///
/// Equality compares the search result only; the heap statistics carry
/// wall-clock timings and are ignored.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    /// The vertex the search started from
    pub source: Vertex,
    /// Shortest distance per vertex, `None` if unreachable
    pub distances: Vec<Option<Distance>>,
    /// Previous vertex on a shortest path, `None` for the source and
    /// unreachable vertices
    pub predecessors: Vec<Option<Vertex>>,
    /// Operation counts of the heap used by the search
    pub stats: HeapStats,
}

impl PartialEq for ShortestPaths {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.distances == other.distances
            && self.predecessors == other.predecessors
    }
}

impl Eq for ShortestPaths {}

impl ShortestPaths {
    /// Shortest distance from the source to `vertex`
    pub fn distance(&self, vertex: Vertex) -> Option<Distance> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: Vertex) -> bool {
        self.distance(vertex).is_some()
    }

    /// Reconstructs a shortest path from the source to `target` (inclusive)
    pub fn path_to(&self, target: Vertex) -> Option<Vec<Vertex>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessors[current] {
            path.push(previous);
            current = previous;
        }

        path.reverse();
        Some(path)
    }
}

/// Runs Dijkstra's algorithm from `source` using heap type `H`
///
/// Edge weights are non-negative by construction, so the result is exact.
///
/// # Errors
/// Heap errors are propagated; they indicate a broken heap, not a property
/// of the graph.
///
/// # Panics
/// Panics if `source` is not a vertex of `graph`.
pub fn dijkstra<G, H>(graph: &G, source: Vertex) -> Result<ShortestPaths, HeapError>
where
    G: WeightedGraph + ?Sized,
    H: Heap<Vertex, Distance>,
{
    tracing::debug!(
        source,
        vertices = graph.vertex_count(),
        "running dijkstra"
    );

    let labels = settle::<G, H, _>(graph, source, |distance, weight| {
        distance.saturating_add(Distance::from(weight))
    })?;

    tracing::debug!(
        reached = labels.settled,
        decrease_keys = labels.stats.decrease_key_count,
        "dijkstra finished"
    );

    Ok(ShortestPaths {
        source,
        distances: labels
            .keys
            .into_iter()
            .map(|key| (key != UNREACHED).then_some(key))
            .collect(),
        predecessors: labels.parents,
        stats: labels.stats,
    })
}

/// Runs Dijkstra's algorithm with a heap variant chosen at runtime
pub fn shortest_paths<G>(
    graph: &G,
    source: Vertex,
    kind: HeapKind,
) -> Result<ShortestPaths, HeapError>
where
    G: WeightedGraph + ?Sized,
{
    match kind {
        HeapKind::Fibonacci => dijkstra::<G, FibonacciHeap<Vertex, Distance>>(graph, source),
        HeapKind::Pairing => dijkstra::<G, PairingHeap<Vertex, Distance>>(graph, source),
    }
}
