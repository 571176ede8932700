//! Weighted undirected graphs loaded from edge-list files
//!
//! ## File format
//!
//! - The first line is `num_vertices num_edges`
//! - Every following line is `v1 v2 weight`, one undirected edge
//! - Vertices are numbered from 1
//! - Empty lines and lines starting with `#` or `c` are comments
//!
//! Edges get the ids `1..=num_edges` in file order. Both adjacency directions
//! of an edge share its id, and the edge table maps the id back to its
//! endpoints and weight.
//!
//! # Example
//!
//! ```rust
//! use indexed_heap_mst::graph::Graph;
//!
//! let graph: Graph<i64> = "4 5\n1 2 1\n2 3 2\n3 4 1\n1 4 3\n1 3 5\n".parse().unwrap();
//! let tree = graph.minimum_spanning_tree();
//! assert_eq!(graph.tree_weight(&tree), 4);
//! ```

use crate::prim::{prim_dense, EdgeId, Incidence, SpanningTree, VertexId, Weight, WeightedGraph};
use log::{debug, warn};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Error type for loading a graph
#[derive(Debug)]
pub enum GraphError {
    /// Reading the input failed
    Io(io::Error),
    /// The input has no header line
    MissingHeader,
    /// The header is not two vertex/edge counts
    MalformedHeader {
        /// 1-based line number
        line: usize,
    },
    /// An edge line is not `v1 v2 weight`
    MalformedEdge {
        /// 1-based line number
        line: usize,
    },
    /// An edge names a vertex outside `1..=vertex_count`
    VertexOutOfRange {
        /// 1-based line number, if the edge came from a file
        line: Option<usize>,
        /// The offending vertex
        vertex: VertexId,
        /// Number of declared vertices
        vertex_count: usize,
    },
    /// The adjacency table cannot grow far enough to hold `vertex`
    CapacityExceeded {
        /// 1-based line number, if the edge came from a file
        line: Option<usize>,
        /// The endpoint that needed the table to grow
        vertex: VertexId,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::Io(err) => write!(f, "could not read graph: {}", err),
            GraphError::MissingHeader => write!(f, "graph file has no header line"),
            GraphError::MalformedHeader { line } => {
                write!(f, "line {}: expected `num_vertices num_edges`", line)
            }
            GraphError::MalformedEdge { line } => {
                write!(f, "line {}: expected `v1 v2 weight`", line)
            }
            GraphError::VertexOutOfRange {
                line,
                vertex,
                vertex_count,
            } => {
                if let Some(line) = line {
                    write!(f, "line {}: ", line)?;
                }
                write!(
                    f,
                    "vertex {} is outside 1..={} declared vertices",
                    vertex, vertex_count
                )
            }
            GraphError::CapacityExceeded { line, vertex } => {
                if let Some(line) = line {
                    write!(f, "line {}: ", line)?;
                }
                write!(f, "no room for adjacency of vertex {}", vertex)
            }
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraphError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl GraphError {
    /// Attaches a file line number to errors raised by [`Graph::push_edge`].
    fn at_line(self, line_number: usize) -> Self {
        match self {
            GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
                ..
            } => GraphError::VertexOutOfRange {
                line: Some(line_number),
                vertex,
                vertex_count,
            },
            GraphError::CapacityExceeded { vertex, .. } => GraphError::CapacityExceeded {
                line: Some(line_number),
                vertex,
            },
            other => other,
        }
    }
}

impl From<io::Error> for GraphError {
    fn from(err: io::Error) -> Self {
        GraphError::Io(err)
    }
}

/// One row of the edge table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    /// First endpoint
    pub v1: VertexId,
    /// Second endpoint
    pub v2: VertexId,
    /// Edge weight
    pub weight: W,
}

/// An undirected weighted graph with 1-based vertex ids.
#[derive(Debug, Clone)]
pub struct Graph<W> {
    /// Number of declared vertices
    vertex_count: usize,
    /// Adjacency list: vertex -> [(neighbor, weight, edge), ...]; slot 0 unused.
    /// Grown on demand up to the highest endpoint seen.
    adjacency: Vec<Vec<Incidence<W>>>,
    /// Edge table: edge id `i` is stored at `i - 1`
    edges: Vec<Edge<W>>,
}

impl<W: Weight> Graph<W> {
    /// Creates a graph with vertices `1..=vertex_count` and no edges.
    ///
    /// Nothing is allocated per vertex until an edge touches it.
    pub fn with_vertices(vertex_count: usize) -> Self {
        Graph {
            vertex_count,
            adjacency: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Number of declared vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges added so far.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edge with the given id, if any.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<W>> {
        id.checked_sub(1).and_then(|index| self.edges.get(index))
    }

    /// The edge table in id order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Adds an undirected edge and returns its id.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if an endpoint is not in
    /// `1..=vertex_count`, and [`GraphError::CapacityExceeded`] if the
    /// adjacency table cannot be grown to reach it.
    pub fn push_edge(
        &mut self,
        v1: VertexId,
        v2: VertexId,
        weight: W,
    ) -> Result<EdgeId, GraphError> {
        for vertex in [v1, v2] {
            if vertex == 0 || vertex > self.vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    line: None,
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }

        let highest = v1.max(v2);
        if highest >= self.adjacency.len() {
            let additional = (highest - self.adjacency.len()).saturating_add(1);
            self.adjacency
                .try_reserve(additional)
                .map_err(|_| GraphError::CapacityExceeded {
                    line: None,
                    vertex: highest,
                })?;
            self.adjacency.resize_with(highest + 1, Vec::new);
        }

        self.edges.push(Edge { v1, v2, weight });
        let id = self.edges.len();
        self.adjacency[v1].push(Incidence::new(v2, weight, id));
        self.adjacency[v2].push(Incidence::new(v1, weight, id));
        Ok(id)
    }

    /// Runs Prim's algorithm from vertex 1.
    pub fn minimum_spanning_tree(&self) -> SpanningTree {
        self.spanning_tree_from(1)
    }

    /// Runs Prim's algorithm from `source` with a dense position map sized
    /// to the vertices that have edges.
    pub fn spanning_tree_from(&self, source: VertexId) -> SpanningTree {
        prim_dense(self, source, self.adjacency.len())
    }

    /// Sums the weights of the edges of `tree`.
    ///
    /// # Panics
    /// Panics if `tree` holds an edge id this graph does not have.
    pub fn tree_weight(&self, tree: &SpanningTree) -> W {
        tree.total_weight(|id| self.edges[id - 1].weight)
    }
}

impl<W: Weight + FromStr> Graph<W> {
    /// Parses a graph from an edge-list reader.
    ///
    /// A mismatch between the declared and the actual number of edges is
    /// logged, not rejected.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, GraphError> {
        let mut graph = Graph::with_vertices(0);
        let mut declared_edges: Option<usize> = None;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let text = line.trim();

            if text.is_empty() || text.starts_with('#') || text.starts_with('c') {
                continue;
            }

            let parts: Vec<&str> = text.split_whitespace().collect();

            if declared_edges.is_none() {
                let (vertex_count, edge_count) = parse_header(&parts)
                    .ok_or(GraphError::MalformedHeader { line: line_number })?;
                graph = Graph::with_vertices(vertex_count);
                declared_edges = Some(edge_count);
                continue;
            }

            let (v1, v2, weight) = parse_edge::<W>(&parts)
                .ok_or(GraphError::MalformedEdge { line: line_number })?;
            graph
                .push_edge(v1, v2, weight)
                .map_err(|err| err.at_line(line_number))?;
        }

        let declared_edges = declared_edges.ok_or(GraphError::MissingHeader)?;
        if declared_edges != graph.edge_count() {
            warn!(
                "header declares {} edges but {} were read",
                declared_edges,
                graph.edge_count()
            );
        }
        debug!(
            "loaded graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        Ok(graph)
    }

    /// Loads a graph from the file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GraphError> {
        let file = File::open(path)?;
        Self::parse(BufReader::new(file))
    }
}

impl<W: Weight + FromStr> FromStr for Graph<W> {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.as_bytes())
    }
}

impl<W: Weight> WeightedGraph for Graph<W> {
    type Weight = W;

    fn incident(&self, vertex: VertexId) -> &[Incidence<W>] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn parse_header(parts: &[&str]) -> Option<(usize, usize)> {
    match parts {
        [vertices, edges, ..] => {
            let vertices: usize = vertices.parse().ok()?;
            // slot 0 of the adjacency table is reserved
            vertices.checked_add(1)?;
            Some((vertices, edges.parse().ok()?))
        }
        _ => None,
    }
}

fn parse_edge<W: FromStr>(parts: &[&str]) -> Option<(VertexId, VertexId, W)> {
    match parts {
        [v1, v2, weight, ..] => Some((v1.parse().ok()?, v2.parse().ok()?, weight.parse().ok()?)),
        _ => None,
    }
}
