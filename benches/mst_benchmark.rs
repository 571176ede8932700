//! Indexed Heap and Prim Benchmarks
//!
//! ## Groups
//!
//! - **heap_insert_extract**: n inserts followed by n extractions
//! - **heap_build**: `heapify` against n repeated inserts
//! - **heap_delete**: deleting every element in random order
//! - **prim**: Prim's algorithm on random connected graphs, hash and dense
//!   position maps side by side
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench mst_benchmark
//! ```
//!
//! Inputs come from a seeded PRNG, so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use indexed_heap_mst::graph::Graph;
use indexed_heap_mst::position::DensePositions;
use indexed_heap_mst::prim::{prim, prim_dense};
use indexed_heap_mst::{HeapElement, IndexedMinHeap};

// ============================================================================
// Simple PRNG for reproducible benchmarks
// ============================================================================

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state >> 16
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_keys(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.below(1 << 32)).collect()
}

/// Random connected graph: a random spanning path plus extra random edges.
fn random_graph(vertex_count: usize, extra_edges: usize, seed: u64) -> Graph<u64> {
    let mut rng = Lcg::new(seed);
    let mut graph = Graph::with_vertices(vertex_count);
    for v in 2..=vertex_count {
        let u = 1 + rng.below((v - 1) as u64) as usize;
        graph.push_edge(u, v, rng.below(1_000_000)).unwrap();
    }
    for _ in 0..extra_edges {
        let v1 = 1 + rng.below(vertex_count as u64) as usize;
        let v2 = 1 + rng.below(vertex_count as u64) as usize;
        graph.push_edge(v1, v2, rng.below(1_000_000)).unwrap();
    }
    graph
}

fn bench_insert_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_insert_extract");

    for n in SIZES {
        let keys = random_keys(n, 1);

        group.bench_with_input(BenchmarkId::new("hashed", n), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = IndexedMinHeap::with_capacity(keys.len());
                for (id, &key) in keys.iter().enumerate() {
                    heap.insert(HeapElement::new(key, id, ())).unwrap();
                }
                while let Some(element) = heap.pop() {
                    black_box(element);
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("dense", n), &keys, |b, keys| {
            b.iter(|| {
                let mut heap =
                    IndexedMinHeap::with_positions(DensePositions::with_bound(keys.len()));
                for (id, &key) in keys.iter().enumerate() {
                    heap.insert(HeapElement::new(key, id, ())).unwrap();
                }
                while let Some(element) = heap.pop() {
                    black_box(element);
                }
            })
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_build");

    for n in SIZES {
        let batch: Vec<_> = random_keys(n, 2)
            .into_iter()
            .enumerate()
            .map(|(id, key)| HeapElement::new(key, id, ()))
            .collect();

        group.bench_with_input(BenchmarkId::new("heapify", n), &batch, |b, batch| {
            b.iter(|| black_box(IndexedMinHeap::from_batch(batch.iter().copied()).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("repeated_insert", n), &batch, |b, batch| {
            b.iter(|| {
                let mut heap = IndexedMinHeap::new();
                for &element in batch {
                    heap.insert(element).unwrap();
                }
                black_box(heap)
            })
        });
    }

    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_delete");

    for n in SIZES {
        let batch: Vec<_> = random_keys(n, 3)
            .into_iter()
            .enumerate()
            .map(|(id, key)| HeapElement::new(key, id, ()))
            .collect();

        // Deletion order: a seeded shuffle of the ids
        let mut order: Vec<usize> = (0..n).collect();
        let mut rng = Lcg::new(4);
        for i in (1..n).rev() {
            let j = rng.below(i as u64 + 1) as usize;
            order.swap(i, j);
        }

        group.bench_with_input(BenchmarkId::new("random_order", n), &order, |b, order| {
            b.iter(|| {
                let mut heap = IndexedMinHeap::from_batch(batch.iter().copied()).unwrap();
                for id in order {
                    black_box(heap.delete(id));
                }
            })
        });
    }

    group.finish();
}

fn bench_prim(c: &mut Criterion) {
    let mut group = c.benchmark_group("prim");
    group.sample_size(20);

    for vertex_count in SIZES {
        let graph = random_graph(vertex_count, vertex_count * 8, 5);

        group.bench_with_input(BenchmarkId::new("hashed", vertex_count), &graph, |b, graph| {
            b.iter(|| black_box(prim(graph, 1)))
        });

        group.bench_with_input(BenchmarkId::new("dense", vertex_count), &graph, |b, graph| {
            b.iter(|| black_box(prim_dense(graph, 1, graph.vertex_count() + 1)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_extract,
    bench_build,
    bench_delete,
    bench_prim
);
criterion_main!(benches);
