//! # Segue Performance Benchmarks
//!
//! Benchmarks for the pieces with real algorithmic weight: rebuilding the
//! adjacency graph from the catalog and running the longest-chain search
//! over graphs of different shapes.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark group
//! cargo bench graph_build
//! cargo bench chain_search
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use segue::chain;
use segue::graph::SongGraph;
use segue::store::TransitionStore;

/// Helper: a straight chain of `n` songs (s0 -> s1 -> ... -> s(n-1)).
fn linear_store(n: usize) -> TransitionStore {
    let mut store = TransitionStore::new();
    for i in 0..n.saturating_sub(1) {
        store
            .add_transition(&format!("Song {i:04}"), &format!("Song {:04}", i + 1), None)
            .expect("linear catalog is always valid");
    }
    store
}

/// Helper: a branching catalog where every song fans out to `fanout`
/// later songs, with a back edge every tenth song to exercise pruning.
fn branching_store(n: usize, fanout: usize) -> TransitionStore {
    let mut store = TransitionStore::new();
    for i in 0..n {
        for j in 1..=fanout {
            let to = i + j;
            if to < n {
                store
                    .add_transition(&format!("Song {i:04}"), &format!("Song {to:04}"), None)
                    .expect("forward edges are always valid");
            }
        }
        if i % 10 == 9 {
            // A cycle back to the start of the decade.
            let _ = store.add_transition(&format!("Song {i:04}"), &format!("Song {:04}", i - 9), None);
        }
    }
    store
}

/// Benchmark rebuilding the adjacency view from the transition list
fn benchmark_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");

    for size in [100, 500, 1000] {
        let store = branching_store(size, 3);
        group.bench_with_input(
            BenchmarkId::new("from_transitions", size),
            store.transitions(),
            |b, transitions| b.iter(|| SongGraph::from_transitions(black_box(transitions))),
        );
    }

    group.finish();
}

/// Benchmark the longest-chain search over different graph shapes
fn benchmark_chain_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_search");

    // Deep linear chain: stresses the explicit stack.
    let linear = linear_store(1000).graph();
    group.bench_function("linear_1000", |b| {
        b.iter(|| chain::find_longest_chain(black_box(&linear), black_box("Song 0000")))
    });

    // Branching with cycles: stresses pruning and memo reuse.
    for size in [100, 300] {
        let graph = branching_store(size, 3).graph();
        group.bench_with_input(BenchmarkId::new("branching", size), &graph, |b, graph| {
            b.iter(|| chain::find_longest_chain(black_box(graph), black_box("Song 0000")))
        });
    }

    group.finish();
}

/// Benchmark the all-starts scan used by `segue best`
fn benchmark_overall_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("overall_scan");
    group.sample_size(20);

    let graph = branching_store(200, 2).graph();
    group.bench_function("best_of_200", |b| {
        b.iter(|| chain::find_longest_chain_overall(black_box(&graph)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_graph_build,
    benchmark_chain_search,
    benchmark_overall_scan
);

criterion_main!(benches);
