use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use arcgraph::{depth_first, DenseGraph, GraphView, SparseGraph};

/// Builds both backends with the same `n` random directed edges.
fn random_graphs(n: usize, seed: u64) -> (SparseGraph<()>, DenseGraph<()>) {
    let mut sparse = SparseGraph::new(n);
    let mut dense = DenseGraph::new(n);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut placed = 0;
    while placed < n {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        if sparse.has_edge(from, to).unwrap() {
            continue;
        }
        sparse.add_edge(from, to).unwrap();
        dense.add_edge(from, to).unwrap();
        placed += 1;
    }
    (sparse, dense)
}

/// One whole-graph DFS decomposition.
fn sweep<G: GraphView>(g: &G) -> usize {
    let mut visited = vec![false; g.vertex_count()];
    let mut discovered = 0;
    for v in 0..g.vertex_count() {
        if !visited[v] {
            depth_first(g, v, &mut visited, |_| discovered += 1);
        }
    }
    discovered
}

/// Benchmark edge insertion throughput per backend.
fn bench_edge_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_insertion");

    for size in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("sparse", size), size, |b, &size| {
            b.iter(|| {
                let mut g: SparseGraph<()> = SparseGraph::new(size);
                for v in 0..size {
                    g.add_edge(v, (v * 7 + 1) % size).unwrap();
                }
                criterion::black_box(g.edge_count());
            });
        });
        group.bench_with_input(BenchmarkId::new("dense", size), size, |b, &size| {
            b.iter(|| {
                let mut g: DenseGraph<()> = DenseGraph::new(size);
                for v in 0..size {
                    g.add_edge(v, (v * 7 + 1) % size).unwrap();
                }
                criterion::black_box(g.edge_count());
            });
        });
    }
    group.finish();
}

/// Benchmark full-graph DFS decomposition, sparse vs dense.
fn bench_dfs_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("dfs_sweep");

    for size in [100, 1000].iter() {
        let (sparse, dense) = random_graphs(*size, 42);

        group.bench_with_input(BenchmarkId::new("sparse", size), size, |b, _| {
            b.iter(|| criterion::black_box(sweep(&sparse)));
        });
        group.bench_with_input(BenchmarkId::new("dense", size), size, |b, _| {
            b.iter(|| criterion::black_box(sweep(&dense)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_edge_insertion, bench_dfs_sweep);
criterion_main!(benches);
