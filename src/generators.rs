//! Seeded synthetic graph families for tests and benchmarks
//!
//! All generators are deterministic for a given seed. Randomness comes from
//! [`ChaCha8Rng`], whose output is stable across platforms and `rand`
//! releases, so a (family, size, seed) triple always names the same graph.

use crate::graph::{Graph, Vertex, Weight};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random undirected multigraph
///
/// Makes `edge_attempts` draws of two uniform endpoints and a weight in
/// `1..=max_weight`; draws that pick the same vertex twice are skipped, so the
/// result can have fewer edges than attempts. Parallel edges are kept.
pub fn random_undirected(
    vertex_count: usize,
    edge_attempts: usize,
    max_weight: Weight,
    seed: u64,
) -> Graph {
    let mut graph = Graph::new(vertex_count);
    if vertex_count == 0 {
        return graph;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let max_weight = max_weight.max(1);
    for _ in 0..edge_attempts {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        let weight = rng.gen_range(1..=max_weight);
        if u == v {
            continue;
        }
        graph.add_undirected_edge(u, v, weight);
    }
    graph
}

/// Undirected 4-neighbour lattice with random weights in `1..=max_weight`
///
/// Vertex `(r, c)` has index `r * cols + c`.
pub fn grid(rows: usize, cols: usize, max_weight: Weight, seed: u64) -> Graph {
    let mut graph = Graph::new(rows * cols);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let max_weight = max_weight.max(1);

    for r in 0..rows {
        for c in 0..cols {
            let here = r * cols + c;
            if c + 1 < cols {
                graph.add_undirected_edge(here, here + 1, rng.gen_range(1..=max_weight));
            }
            if r + 1 < rows {
                graph.add_undirected_edge(here, here + cols, rng.gen_range(1..=max_weight));
            }
        }
    }
    graph
}

/// Graph that maximises decrease-key traffic for Dijkstra from vertex 0
///
/// Vertices `0..=hubs` form a unit-weight chain, so hub `i` settles at
/// distance `i`, in order. Every hub is joined to every remaining vertex with
/// weight `max_weight + 2 * (hubs - i)`, making the tentative distance offered
/// by hub `i` equal to `max_weight + 2 * hubs - i`: each settled hub strictly
/// improves every non-hub, forcing one decrease-key per (hub, non-hub) pair.
///
/// `hubs` is clamped to `vertex_count - 1`.
pub fn synthetic_worst_case(vertex_count: usize, hubs: usize, max_weight: Weight) -> Graph {
    let mut graph = Graph::new(vertex_count);
    if vertex_count < 2 {
        return graph;
    }

    let hubs = hubs.min(vertex_count - 1);
    for hub in 0..hubs {
        graph.add_undirected_edge(hub, hub + 1, 1);
    }

    for hub in 0..=hubs {
        let weight = hub_weight(max_weight, hubs, hub);
        for target in (hubs + 1)..vertex_count {
            graph.add_undirected_edge(hub, target, weight);
        }
    }
    graph
}

fn hub_weight(max_weight: Weight, hubs: usize, hub: Vertex) -> Weight {
    let offset = 2 * (hubs - hub);
    max_weight.saturating_add(Weight::try_from(offset).unwrap_or(Weight::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;

    #[test]
    fn test_random_is_deterministic() {
        let a = random_undirected(50, 200, 20, 7);
        let b = random_undirected(50, 200, 20, 7);
        let c = random_undirected(50, 200, 20, 8);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_random_has_no_self_loops_and_bounded_weights() {
        let graph = random_undirected(30, 500, 9, 42);
        assert!(graph.undirected_edge_count() <= 500);
        for (from, edge) in graph.edges() {
            assert_ne!(from, edge.to);
            assert!((1..=9).contains(&edge.weight));
        }
    }

    #[test]
    fn test_random_degenerate_sizes() {
        assert_eq!(random_undirected(0, 10, 5, 1).vertex_count(), 0);
        assert_eq!(random_undirected(1, 10, 5, 1).edge_count(), 0);
    }

    #[test]
    fn test_grid_shape() {
        let graph = grid(3, 4, 10, 1);
        assert_eq!(graph.vertex_count(), 12);
        // 3 * 3 horizontal + 2 * 4 vertical
        assert_eq!(graph.undirected_edge_count(), 17);
        assert_eq!(graph.neighbors(0).len(), 2);
        assert_eq!(graph.neighbors(5).len(), 4);
    }

    #[test]
    fn test_worst_case_weights_decrease_along_chain() {
        let graph = synthetic_worst_case(10, 3, 5);
        let target = 9;
        let offers: Vec<u64> = (0..=3)
            .map(|hub| {
                let edge = graph
                    .neighbors(hub)
                    .iter()
                    .find(|e| e.to == target)
                    .unwrap();
                hub as u64 + u64::from(edge.weight)
            })
            .collect();
        assert!(offers.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_worst_case_clamps_hubs() {
        let graph = synthetic_worst_case(3, 10, 1);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.neighbors(0), &[crate::graph::Edge { to: 1, weight: 1 }]);
        assert_eq!(synthetic_worst_case(1, 4, 1).edge_count(), 0);
    }
}
