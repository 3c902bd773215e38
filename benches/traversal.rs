//! Benchmarks for traversal performance
//!
//! Runs the sequence algorithms over generated layered DAGs to keep an
//! eye on the O(V+E) behavior as graphs grow.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphwalk::graph::DirectedGraph;
use graphwalk::traversal::{breadth_first, depth_first, topological_sort};

/// Build a layered DAG: `layers` layers of `width` vertices, every vertex
/// wired to each vertex of the next layer.
fn layered_dag(layers: usize, width: usize) -> DirectedGraph {
    let mut graph = DirectedGraph::new();

    for layer in 0..layers {
        for slot in 0..width {
            graph
                .insert_vertex(format!("v{}-{}", layer, slot))
                .unwrap();
        }
    }

    for layer in 0..layers.saturating_sub(1) {
        for from in 0..width {
            for to in 0..width {
                graph
                    .insert_edge(
                        &format!("v{}-{}", layer, from),
                        &format!("v{}-{}", layer + 1, to),
                    )
                    .unwrap();
            }
        }
    }

    graph
}

/// Benchmark depth-first traversal
fn bench_depth_first(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth_first");

    for layers in [10, 50, 100, 200].iter() {
        let graph = layered_dag(*layers, 10);

        group.bench_with_input(BenchmarkId::new("layers", layers), layers, |b, _| {
            b.iter(|| black_box(depth_first(&graph, "v0-0").unwrap()));
        });
    }

    group.finish();
}

/// Benchmark breadth-first traversal
fn bench_breadth_first(c: &mut Criterion) {
    let mut group = c.benchmark_group("breadth_first");

    for layers in [10, 50, 100, 200].iter() {
        let graph = layered_dag(*layers, 10);

        group.bench_with_input(BenchmarkId::new("layers", layers), layers, |b, _| {
            b.iter(|| black_box(breadth_first(&graph, "v0-0").unwrap()));
        });
    }

    group.finish();
}

/// Benchmark full-graph topological sort
fn bench_topological_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("topological_sort");

    for layers in [10, 50, 100, 200].iter() {
        let graph = layered_dag(*layers, 10);

        group.bench_with_input(BenchmarkId::new("layers", layers), layers, |b, _| {
            b.iter(|| black_box(topological_sort(&graph, None).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_depth_first,
    bench_breadth_first,
    bench_topological_sort
);
criterion_main!(benches);
