//! Demo driver: builds the same random graph in both backends, reports
//! reachability-component statistics, and times repeated full-graph
//! depth-first sweeps to compare the storage strategies.

use std::time::Instant;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use arcgraph::{component_stats, depth_first, DenseGraph, GraphResult, GraphView, SparseGraph};

#[derive(Parser, Debug)]
#[command(name = "arcgraph", about = "Compare sparse and dense graph backends")]
struct Args {
    /// Number of vertices in the generated graph
    #[arg(long, default_value_t = 1000)]
    vertices: usize,

    /// Number of random directed edges to insert (default: one per vertex)
    #[arg(long)]
    edges: Option<usize>,

    /// RNG seed; omit for a random seed
    #[arg(long)]
    seed: Option<u64>,

    /// How many full-graph DFS sweeps to time per backend
    #[arg(long, default_value_t = 100)]
    iterations: usize,
}

fn main() -> GraphResult<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let n = args.vertices;
    let m = args.edges.unwrap_or(n);
    let seed = args.seed.unwrap_or_else(rand::random);

    println!("arcgraph demo: n = {n}, m = {m}, seed = {seed}");
    println!("==============================================");

    let (sparse, dense) = build_graphs(n, m, seed)?;
    debug!(
        edges = sparse.edge_count(),
        "graphs populated identically in both backends"
    );

    let sparse_stats = component_stats(&sparse);
    let dense_stats = component_stats(&dense);
    println!(
        "Components (sparse): {} (largest {})",
        sparse_stats.count, sparse_stats.largest
    );
    println!(
        "Components (dense):  {} (largest {})",
        dense_stats.count, dense_stats.largest
    );
    assert_eq!(sparse_stats, dense_stats);

    println!();
    println!("Timing {} DFS sweeps per backend...", args.iterations);
    let sparse_elapsed = time_sweeps(&sparse, args.iterations);
    let dense_elapsed = time_sweeps(&dense, args.iterations);
    println!("sparse: {sparse_elapsed:?}");
    println!("dense:  {dense_elapsed:?}");

    Ok(())
}

/// Inserts `m` distinct random edges, connecting both backends identically.
fn build_graphs(n: usize, m: usize, seed: u64) -> GraphResult<(SparseGraph<()>, DenseGraph<()>)> {
    assert!(n > 0, "graph must have at least one vertex");
    assert!(m <= n * n, "cannot place {m} distinct edges in {n} vertices");

    let mut sparse = SparseGraph::new(n);
    let mut dense = DenseGraph::new(n);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut placed = 0;
    while placed < m {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        if sparse.has_edge(from, to)? {
            continue;
        }
        sparse.add_edge(from, to)?;
        dense.add_edge(from, to)?;
        placed += 1;
    }
    Ok((sparse, dense))
}

/// Runs `iterations` whole-graph DFS decompositions and returns the elapsed
/// wall time. One visited buffer is reused per sweep, reset between sweeps.
fn time_sweeps<G: GraphView>(g: &G, iterations: usize) -> std::time::Duration {
    let mut visited = vec![false; g.vertex_count()];
    let start = Instant::now();
    for _ in 0..iterations {
        visited.fill(false);
        for v in 0..g.vertex_count() {
            if !visited[v] {
                depth_first(g, v, &mut visited, |_| {});
            }
        }
    }
    start.elapsed()
}
