//! Benchmark harness comparing the Fibonacci and pairing heaps inside
//! Dijkstra and Prim
//!
//! For every size and trial it builds four graph families, runs both
//! algorithms with both heaps, and writes one CSV row per run with the total
//! run time and the per-operation counts and times reported by the heap.
//!
//! ```sh
//! cargo run --release -- --sizes 1000,5000 --trials 5 --output results.csv
//! RUST_LOG=debug cargo run --release -- --sizes 200 --trials 1
//! ```

use anyhow::{ensure, Context};
use clap::Parser;
use decrease_key_heaps::graph::{Graph, WeightedGraph};
use decrease_key_heaps::{
    generators, minimum_spanning_tree, shortest_paths, HeapKind, HeapStats,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const CSV_HEADER: &str = concat!(
    "graph_type,vertices,edges,algorithm,heap,trial,total_us,",
    "insert_count,deletemin_count,decreasekey_count,",
    "insert_ns,deletemin_ns,decreasekey_ns"
);

#[derive(Parser, Debug)]
#[command(
    name = "heap-bench",
    version,
    about = "Compare Fibonacci and pairing heaps in Dijkstra and Prim"
)]
struct Cli {
    /// Vertex counts to benchmark
    #[arg(long, value_delimiter = ',', default_value = "1000,5000")]
    sizes: Vec<usize>,

    /// Trials per size; trial t seeds the random families with 1000+t, 2000+t, 3000+t
    #[arg(long, default_value_t = 5)]
    trials: u64,

    /// Largest edge weight
    #[arg(long, default_value_t = 20)]
    max_weight: u32,

    /// Source vertex for Dijkstra and start vertex for Prim
    #[arg(long, default_value_t = 0)]
    source: usize,

    /// Hubs in the synthetic worst-case family (default: vertices / 4)
    #[arg(long)]
    hubs: Option<usize>,

    /// Only run with these heaps (default: all)
    #[arg(long, value_delimiter = ',')]
    heaps: Vec<HeapKind>,

    /// CSV output path
    #[arg(short, long, default_value = "results.csv")]
    output: PathBuf,
}

#[derive(Debug, Clone, Copy)]
enum Algorithm {
    Dijkstra,
    Prim,
}

impl Algorithm {
    fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Prim => "prim",
        }
    }

    fn run(
        self,
        graph: &Graph,
        source: usize,
        heap: HeapKind,
    ) -> anyhow::Result<(Duration, HeapStats)> {
        let start = Instant::now();
        let stats = match self {
            Algorithm::Dijkstra => shortest_paths(graph, source, heap)?.stats,
            Algorithm::Prim => minimum_spanning_tree(graph, source, heap)?.stats,
        };
        Ok((start.elapsed(), stats))
    }
}

/// Hub count of the synthetic worst-case graph on `n` vertices
fn worst_case_hubs(n: usize, hubs: Option<usize>) -> usize {
    hubs.unwrap_or(n / 4)
}

/// The four graph families of one (size, trial) cell
fn graph_families(
    n: usize,
    trial: u64,
    max_weight: u32,
    hubs: Option<usize>,
) -> [(&'static str, Graph); 4] {
    let side = ((n as f64).sqrt().round() as usize).max(1);
    [
        (
            "random_sparse",
            generators::random_undirected(n, 5 * n, max_weight, 1000 + trial),
        ),
        (
            "random_dense",
            generators::random_undirected(n, 20 * n, max_weight, 2000 + trial),
        ),
        ("grid", generators::grid(side, side, max_weight, 3000 + trial)),
        (
            "synthetic_worst",
            generators::synthetic_worst_case(n, worst_case_hubs(n, hubs), max_weight),
        ),
    ]
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    ensure!(!cli.sizes.is_empty(), "at least one size is required");
    let heaps = if cli.heaps.is_empty() {
        HeapKind::ALL.to_vec()
    } else {
        cli.heaps.clone()
    };

    let file = File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{CSV_HEADER}")?;

    for &n in &cli.sizes {
        for trial in 0..cli.trials {
            for (family, graph) in graph_families(n, trial, cli.max_weight, cli.hubs) {
                let vertices = checked_vertex_count(&graph, cli.source)?;
                let edges = graph.undirected_edge_count();
                tracing::info!(family, vertices, edges, trial, "benchmarking");

                for algorithm in [Algorithm::Dijkstra, Algorithm::Prim] {
                    for &heap in &heaps {
                        let (total, stats) = algorithm.run(&graph, cli.source, heap)?;
                        writeln!(
                            out,
                            "{},{},{},{},{},{},{},{},{},{},{},{},{}",
                            family,
                            vertices,
                            edges,
                            algorithm.name(),
                            heap,
                            trial,
                            total.as_micros(),
                            stats.insert_count,
                            stats.delete_min_count,
                            stats.decrease_key_count,
                            stats.insert_time.as_nanos(),
                            stats.delete_min_time.as_nanos(),
                            stats.decrease_key_time.as_nanos(),
                        )?;
                    }
                }
            }
        }
    }

    out.flush()?;
    tracing::info!(output = %cli.output.display(), "results written");
    Ok(())
}

/// Vertex count of `graph`, checking that `source` is one of its vertices
fn checked_vertex_count(graph: &Graph, source: usize) -> anyhow::Result<usize> {
    let vertices = graph.vertex_count();
    ensure!(
        source < vertices,
        "source vertex {source} out of range for graph with {vertices} vertices"
    );
    Ok(vertices)
}
