//! Indexed Heaps and Prim's Minimum Spanning Tree
//!
//! This crate provides a binary min-heap whose elements can be looked up and
//! removed by identifier, and an implementation of Prim's minimum spanning
//! tree algorithm that uses it to keep one cheapest candidate edge per
//! frontier vertex.
//!
//! # Features
//!
//! - **Indexed Min-Heap**: O(log n) insert, extract-min and delete by id; O(1) lookup by id; O(n) heapify
//! - **Position Maps**: hash-based (`FxHashMap`) for any hashable id, vector-based for dense integer ids
//! - **Prim's Algorithm**: O(E log V), with `decrease_key` emulated by delete-then-reinsert
//! - **Graph Loader**: edge-list files with 1-based vertices and edge ids in file order
//!
//! # Example
//!
//! ```rust
//! use indexed_heap_mst::graph::Graph;
//! use indexed_heap_mst::prim::prim;
//!
//! let graph: Graph<u32> = "3 3\n1 2 4\n2 3 1\n1 3 2\n".parse().unwrap();
//! let tree = prim(&graph, 1);
//! assert_eq!(graph.tree_weight(&tree), 3);
//! assert!(tree.spans(graph.vertex_count()));
//! ```

pub mod graph;
pub mod indexed_heap;
pub mod position;
pub mod prim;
pub mod traits;

// Re-export the main types for convenience
pub use indexed_heap::{HeapElement, IndexedMinHeap};
pub use traits::{HeapError, PositionMap};
