//! Minimum spanning tree (Prim's algorithm)
//!
//! Same control structure as [`crate::shortest_path`], but a vertex's key is
//! the weight of the cheapest known edge attaching it to the growing tree, not
//! a cumulative distance.
//!
//! The graph is expected to be undirected (every edge present in both
//! directions). If it is not connected from the start vertex, the result
//! covers only the start vertex's component: other vertices keep no parent and
//! add nothing to the total weight.

use crate::fibonacci::FibonacciHeap;
use crate::graph::{Vertex, WeightedGraph};
use crate::label_setting::{settle, UNREACHED};
use crate::pairing::PairingHeap;
use crate::stats::HeapStats;
use crate::traits::{Heap, HeapError, HeapKind};

/// Result of Prim's algorithm
///
/// Equality compares the tree only; the heap statistics carry wall-clock
/// timings and are ignored.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    /// The vertex the tree was grown from
    pub root: Vertex,
    /// Tree parent per vertex, `None` for the root and vertices outside the
    /// root's component
    pub parents: Vec<Option<Vertex>>,
    /// Weight of the edge attaching each vertex to its parent
    pub attach_weights: Vec<Option<u64>>,
    /// Sum of the weights of all tree edges
    pub total_weight: u64,
    /// Operation counts of the heap used by the search
    pub stats: HeapStats,
}

impl PartialEq for SpanningTree {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
            && self.parents == other.parents
            && self.attach_weights == other.attach_weights
            && self.total_weight == other.total_weight
    }
}

impl Eq for SpanningTree {}

impl SpanningTree {
    /// Tree edges as `(parent, child, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex, u64)> + '_ {
        self.parents
            .iter()
            .zip(&self.attach_weights)
            .enumerate()
            .filter_map(|(child, (parent, weight))| Some(((*parent)?, child, (*weight)?)))
    }

    /// Number of vertices in the tree, including the root
    pub fn vertex_count(&self) -> usize {
        1 + self.parents.iter().filter(|p| p.is_some()).count()
    }

    /// True if the tree reaches every vertex of the graph
    pub fn is_spanning(&self) -> bool {
        self.vertex_count() == self.parents.len()
    }
}

/// Runs Prim's algorithm from `start` using heap type `H`
///
/// # Errors
/// Heap errors are propagated; they indicate a broken heap, not a property
/// of the graph.
///
/// # Panics
/// Panics if `start` is not a vertex of `graph`.
pub fn prim<G, H>(graph: &G, start: Vertex) -> Result<SpanningTree, HeapError>
where
    G: WeightedGraph + ?Sized,
    H: Heap<Vertex, u64>,
{
    tracing::debug!(start, vertices = graph.vertex_count(), "running prim");

    let labels = settle::<G, H, _>(graph, start, |_, weight| u64::from(weight))?;

    let attach_weights: Vec<Option<u64>> = labels
        .keys
        .iter()
        .zip(&labels.parents)
        .map(|(&key, parent)| parent.and((key != UNREACHED).then_some(key)))
        .collect();
    let total_weight: u64 = attach_weights.iter().flatten().sum();

    tracing::debug!(
        reached = labels.settled,
        total_weight,
        decrease_keys = labels.stats.decrease_key_count,
        "prim finished"
    );

    Ok(SpanningTree {
        root: start,
        parents: labels.parents,
        attach_weights,
        total_weight,
        stats: labels.stats,
    })
}

/// Runs Prim's algorithm with a heap variant chosen at runtime
pub fn minimum_spanning_tree<G>(
    graph: &G,
    start: Vertex,
    kind: HeapKind,
) -> Result<SpanningTree, HeapError>
where
    G: WeightedGraph + ?Sized,
{
    match kind {
        HeapKind::Fibonacci => prim::<G, FibonacciHeap<Vertex, u64>>(graph, start),
        HeapKind::Pairing => prim::<G, PairingHeap<Vertex, u64>>(graph, start),
    }
}
