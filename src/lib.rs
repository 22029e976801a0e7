//! Decrease-key capable heaps and the graph algorithms built on them
//!
//! This crate provides two mergeable priority queues with efficient
//! `decrease_key` support, and uses them as the relaxation structure of two
//! classical graph algorithms.
//!
//! # Features
//!
//! - **Fibonacci Heap**: O(1) amortized insert and decrease_key; O(log n) amortized delete-min
//! - **Pairing Heap**: O(1) amortized insert; O(log n) amortized delete-min;
//!   o(log n) amortized decrease_key
//! - **Dijkstra**: single-source shortest paths, generic over the heap
//! - **Prim**: minimum spanning tree, generic over the heap
//!
//! Both heaps store their nodes in an arena and hand out `Copy` handles that
//! stay valid across any number of `decrease_key` calls, until the element is
//! removed by `delete_min`.
//!
//! # Example
//!
//! ```rust
//! use decrease_key_heaps::fibonacci::FibonacciHeap;
//! use decrease_key_heaps::Heap;
//!
//! let mut heap = FibonacciHeap::new();
//! let handle1 = heap.insert(5, "item1");
//! let handle2 = heap.insert(3, "item2");
//! heap.decrease_key(handle1, 1).unwrap();
//! assert_eq!(heap.find_min(), Ok((&1, &"item1")));
//! assert_eq!(heap.get(handle2), Some((&3, &"item2")));
//! ```
//!
//! Running the graph engines with a heap picked at runtime:
//!
//! ```rust
//! use decrease_key_heaps::graph::Graph;
//! use decrease_key_heaps::{minimum_spanning_tree, shortest_paths, HeapKind};
//!
//! let mut graph = Graph::new(3);
//! graph.add_undirected_edge(0, 1, 2);
//! graph.add_undirected_edge(1, 2, 3);
//! graph.add_undirected_edge(0, 2, 9);
//!
//! let paths = shortest_paths(&graph, 0, HeapKind::Pairing).unwrap();
//! assert_eq!(paths.distances, vec![Some(0), Some(2), Some(5)]);
//!
//! let tree = minimum_spanning_tree(&graph, 0, HeapKind::Fibonacci).unwrap();
//! assert_eq!(tree.total_weight, 5);
//! ```

pub mod fibonacci;
pub mod generators;
pub mod graph;
mod label_setting;
pub mod pairing;
pub mod shortest_path;
pub mod spanning_tree;
pub mod stats;
pub mod traits;

// Re-export the main trait and entry points for convenience
pub use shortest_path::{dijkstra, shortest_paths, ShortestPaths};
pub use spanning_tree::{minimum_spanning_tree, prim, SpanningTree};
pub use stats::HeapStats;
pub use traits::{Heap, HeapError, HeapKind};
