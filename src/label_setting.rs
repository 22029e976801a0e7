//! The label-setting loop shared by Dijkstra and Prim
//!
//! Every vertex is inserted up front keyed by its initial label (0 for the
//! start vertex, unreached for the rest). Vertices are settled in order of
//! `delete_min`; a vertex already settled is skipped rather than removed
//! eagerly, since neither heap supports arbitrary deletion. Relaxation lowers
//! a neighbour's label through `decrease_key` on the handle kept per vertex.
//! The two engines differ only in how a candidate label is computed from the
//! settled vertex's label and the edge weight.

use crate::graph::{Vertex, Weight, WeightedGraph};
use crate::stats::HeapStats;
use crate::traits::{Heap, HeapError};

/// Label of a vertex no edge has reached yet
pub(crate) const UNREACHED: u64 = u64::MAX;

pub(crate) struct Labels {
    pub(crate) keys: Vec<u64>,
    pub(crate) parents: Vec<Option<Vertex>>,
    pub(crate) settled: usize,
    pub(crate) stats: HeapStats,
}

/// Runs the label-setting loop from `start`
///
/// `candidate(label, weight)` gives the label an edge of `weight` offers to a
/// neighbour of a vertex settled with `label`.
///
/// # Panics
/// Panics if `start` is not a vertex of `graph`.
pub(crate) fn settle<G, H, F>(graph: &G, start: Vertex, candidate: F) -> Result<Labels, HeapError>
where
    G: WeightedGraph + ?Sized,
    H: Heap<Vertex, u64>,
    F: Fn(u64, Weight) -> u64,
{
    let vertex_count = graph.vertex_count();
    assert!(
        start < vertex_count,
        "start vertex {start} out of range for graph with {vertex_count} vertices"
    );

    let mut keys = vec![UNREACHED; vertex_count];
    let mut parents = vec![None; vertex_count];
    let mut finalized = vec![false; vertex_count];
    keys[start] = 0;

    let mut heap = H::new();
    let handles: Vec<H::Handle> = keys
        .iter()
        .enumerate()
        .map(|(vertex, &key)| heap.insert(key, vertex))
        .collect();

    let mut settled = 0;
    while !heap.is_empty() {
        let (_, u) = heap.delete_min()?;
        if finalized[u] {
            continue;
        }
        finalized[u] = true;

        if keys[u] == UNREACHED {
            tracing::trace!(
                vertex = u,
                unreached = heap.len() + 1,
                "remaining vertices are unreachable"
            );
            break;
        }
        settled += 1;

        for edge in graph.neighbors(u) {
            let v = edge.to;
            if finalized[v] {
                continue;
            }

            let label = candidate(keys[u], edge.weight);
            if label < keys[v] {
                keys[v] = label;
                parents[v] = Some(u);
                heap.decrease_key(handles[v], label)?;
            }
        }
    }

    Ok(Labels {
        keys,
        parents,
        settled,
        stats: heap.stats().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fibonacci::FibonacciHeap;
    use crate::graph::Graph;
    use crate::pairing::PairingHeap;

    #[test]
    fn test_every_vertex_inserted_and_settled_once() {
        let mut graph = Graph::new(4);
        graph.add_undirected_edge(0, 1, 3);
        graph.add_undirected_edge(1, 2, 3);
        graph.add_undirected_edge(0, 2, 10);
        graph.add_undirected_edge(2, 3, 1);

        let labels =
            settle::<_, FibonacciHeap<Vertex, u64>, _>(&graph, 0, |l, w| l + u64::from(w))
                .unwrap();
        assert_eq!(labels.keys, vec![0, 3, 6, 7]);
        assert_eq!(labels.settled, 4);
        assert_eq!(labels.stats.insert_count, 4);
        assert_eq!(labels.stats.delete_min_count, 4);
        // 1 and 2 from 0, 2 again from 1, then 3 from 2
        assert_eq!(labels.stats.decrease_key_count, 4);
    }

    #[test]
    fn test_stops_at_first_unreached_vertex() {
        let mut graph = Graph::new(5);
        graph.add_directed_edge(0, 1, 1);

        let labels = settle::<_, PairingHeap<Vertex, u64>, _>(&graph, 0, |_, w| u64::from(w))
            .unwrap();
        assert_eq!(labels.settled, 2);
        assert_eq!(labels.keys[2..], [UNREACHED; 3]);
        // Two settled plus the unreached vertex that ended the loop
        assert_eq!(labels.stats.delete_min_count, 3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_start_out_of_range_panics() {
        let graph = Graph::new(2);
        let _ = settle::<_, PairingHeap<Vertex, u64>, _>(&graph, 2, |l, _| l);
    }
}
