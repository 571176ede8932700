//! Prim's minimum spanning tree algorithm driven by an [`IndexedMinHeap`]
//!
//! The frontier of unexplored vertices lives in an indexed heap keyed by the
//! weight of the cheapest edge known to connect each vertex to the tree. The
//! heap holds at most one entry per vertex: when a new edge reaches a vertex
//! that already has an entry, the entry is deleted and either reinserted
//! unchanged or replaced by the new, cheaper edge. That delete-then-reinsert
//! step stands in for `decrease_key`.
//!
//! # Design
//!
//! The graph is consumed through [`WeightedGraph`], which only has to list the
//! incident edges of a vertex. Vertices and edges are plain integers; the
//! heap stores the vertex as its id and the edge as its payload, so the
//! result is just the set of chosen edge ids.
//!
//! If the graph is not connected, the returned tree only spans the component
//! of the source. This can be checked with [`SpanningTree::spans`].
//!
//! # Example
//!
//! ```rust
//! use indexed_heap_mst::prim::{prim, Incidence};
//! use rustc_hash::FxHashMap;
//!
//! // 1 --1-- 2 --2-- 3
//! let mut adjacency: FxHashMap<usize, Vec<Incidence<u32>>> = FxHashMap::default();
//! adjacency.insert(1, vec![Incidence::new(2, 1, 1)]);
//! adjacency.insert(2, vec![Incidence::new(1, 1, 1), Incidence::new(3, 2, 2)]);
//! adjacency.insert(3, vec![Incidence::new(2, 2, 2)]);
//!
//! let tree = prim(&adjacency, 1);
//! assert_eq!(tree.len(), 2);
//! assert!(tree.spans(3));
//! ```

use crate::indexed_heap::{HeapElement, IndexedMinHeap};
use crate::position::DensePositions;
use crate::traits::PositionMap;
use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::ops::Add;

/// Vertex identifier.
pub type VertexId = usize;

/// Edge identifier, shared by both directions of an undirected edge.
pub type EdgeId = usize;

/// Trait for types that can be used as edge weights.
///
/// This requires the type to be totally ordered, copyable, and support
/// addition. It also requires a zero value for summing tree weights.
pub trait Weight: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Weight for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// One entry of an adjacency list: an edge seen from one of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Incidence<W> {
    /// The endpoint at the other end of the edge
    pub neighbor: VertexId,
    /// Weight of the edge
    pub weight: W,
    /// Identifier of the edge
    pub edge: EdgeId,
}

impl<W> Incidence<W> {
    /// Creates a new adjacency entry.
    pub fn new(neighbor: VertexId, weight: W, edge: EdgeId) -> Self {
        Incidence {
            neighbor,
            weight,
            edge,
        }
    }
}

/// Trait for undirected weighted graphs Prim's algorithm can run on.
///
/// Both directions of every edge must be listed, with the same edge id.
pub trait WeightedGraph {
    /// The edge weight type
    type Weight: Weight;

    /// Returns the edges incident to `vertex`, in a stable order.
    ///
    /// Unknown vertices have no incident edges.
    fn incident(&self, vertex: VertexId) -> &[Incidence<Self::Weight>];
}

impl<W, S> WeightedGraph for HashMap<VertexId, Vec<Incidence<W>>, S>
where
    W: Weight,
    S: BuildHasher,
{
    type Weight = W;

    fn incident(&self, vertex: VertexId) -> &[Incidence<W>] {
        self.get(&vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// The edges chosen by one run of Prim's algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    /// Vertex the tree was grown from
    source: VertexId,
    /// Chosen edges, in the order their far vertex joined the tree
    edges: Vec<EdgeId>,
}

impl SpanningTree {
    /// The vertex the tree was grown from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// The chosen edges, in the order they joined the tree.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Consumes the tree, returning its edge ids.
    pub fn into_edges(self) -> Vec<EdgeId> {
        self.edges
    }

    /// The chosen edges as a set.
    pub fn edge_set(&self) -> FxHashSet<EdgeId> {
        self.edges.iter().copied().collect()
    }

    /// Number of edges in the tree.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the tree has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns true if `edge` was chosen.
    pub fn contains(&self, edge: EdgeId) -> bool {
        self.edges.contains(&edge)
    }

    /// Returns true if the tree reaches all `vertex_count` vertices, i.e. it
    /// has exactly `vertex_count - 1` edges. A graph with no vertices is
    /// spanned by the empty tree.
    pub fn spans(&self, vertex_count: usize) -> bool {
        match vertex_count.checked_sub(1) {
            Some(needed) => self.edges.len() == needed,
            None => self.edges.is_empty(),
        }
    }

    /// Sums the weights of the chosen edges.
    pub fn total_weight<W: Weight>(&self, weight_of: impl Fn(EdgeId) -> W) -> W {
        self.edges
            .iter()
            .fold(W::default(), |total, &edge| total + weight_of(edge))
    }
}

/// Per-run state: the explored set, the frontier heap and the chosen edges.
struct PrimState<'g, G, M>
where
    G: WeightedGraph,
{
    graph: &'g G,
    explored: FxHashSet<VertexId>,
    /// One entry per frontier vertex: (cheapest weight, vertex, edge)
    unexplored: IndexedMinHeap<G::Weight, VertexId, EdgeId, M>,
    edges: Vec<EdgeId>,
}

impl<'g, G, M> PrimState<'g, G, M>
where
    G: WeightedGraph,
    M: PositionMap<VertexId>,
{
    fn new(graph: &'g G, positions: M) -> Self {
        PrimState {
            graph,
            explored: FxHashSet::default(),
            unexplored: IndexedMinHeap::with_positions(positions),
            edges: Vec::new(),
        }
    }

    /// Offers every edge from `vertex` to an unexplored neighbour as a
    /// candidate connector, keeping only the cheapest per neighbour.
    fn relax(&mut self, vertex: VertexId) {
        let graph = self.graph;
        for incidence in graph.incident(vertex) {
            if self.explored.contains(&incidence.neighbor) {
                continue;
            }

            // Ties go to the newer edge.
            let candidate = match self.unexplored.delete(&incidence.neighbor) {
                Some(existing) if existing.key < incidence.weight => existing,
                _ => HeapElement::new(incidence.weight, incidence.neighbor, incidence.edge),
            };

            self.unexplored
                .insert(candidate)
                .expect("frontier entry was just deleted");
        }
    }

    fn run(mut self, source: VertexId) -> SpanningTree {
        self.explored.insert(source);
        self.relax(source);

        while let Some(HeapElement {
            id: vertex,
            payload: edge,
            ..
        }) = self.unexplored.pop()
        {
            trace!("attaching vertex {} through edge {}", vertex, edge);
            self.explored.insert(vertex);
            self.edges.push(edge);
            self.relax(vertex);
        }

        debug!(
            "prim from vertex {}: {} edges, {} vertices reached",
            source,
            self.edges.len(),
            self.explored.len()
        );

        SpanningTree {
            source,
            edges: self.edges,
        }
    }
}

/// Runs Prim's algorithm from `source`, tracking the frontier in a heap with
/// a hash-based position map.
///
/// # Returns
/// The edges of a minimum spanning tree of the component containing
/// `source`. A source without edges yields an empty tree.
///
/// # Time Complexity
/// O(E log V): every edge traversal costs at most one delete and one insert,
/// every vertex one extraction.
pub fn prim<G: WeightedGraph>(graph: &G, source: VertexId) -> SpanningTree {
    prim_with_positions(graph, source, FxHashMap::default())
}

/// Runs Prim's algorithm from `source` with a dense, vector-backed position
/// map sized for vertex ids below `vertex_bound`.
///
/// Produces the same tree weight as [`prim`]; use it when vertex ids are
/// small and contiguous.
pub fn prim_dense<G: WeightedGraph>(
    graph: &G,
    source: VertexId,
    vertex_bound: usize,
) -> SpanningTree {
    prim_with_positions(graph, source, DensePositions::with_bound(vertex_bound))
}

/// Runs Prim's algorithm from `source` with a caller-supplied position map
/// for the frontier heap.
pub fn prim_with_positions<G, M>(graph: &G, source: VertexId, positions: M) -> SpanningTree
where
    G: WeightedGraph,
    M: PositionMap<VertexId>,
{
    PrimState::new(graph, positions).run(source)
}
