//! Undirected weighted graph over dense adjacency storage
//!
//! Nodes are named `0..vertex_count`. The adjacency matrix is stored flat,
//! row-major, with `None` marking a missing edge.

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Node identifier (index into the adjacency matrix)
pub type NodeId = usize;

/// Weight given to edges added without an explicit positive cost
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Largest vertex count the loader accepts (the matrix holds V² entries)
pub const MAX_VERTICES: usize = 1024;

// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised while loading a graph description
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("failed to read graph file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("graph description is empty, expected a vertex count")]
    MissingVertexCount,

    #[error("vertex count {0} exceeds the loader limit of {max}", max = MAX_VERTICES)]
    TooManyVertices(usize),

    #[error("invalid token {token:?} at position {position}")]
    InvalidToken { token: String, position: usize },

    #[error("edge {from}-{to} references a node outside 0..{vertex_count}")]
    NodeOutOfRange {
        from: NodeId,
        to: NodeId,
        vertex_count: usize,
    },

    #[error("trailing edge description is incomplete ({0} of 3 fields)")]
    TruncatedEdge(usize),
}

// ============================================================================
// GRAPH
// ============================================================================

/// Undirected graph with positive edge costs
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedGraph {
    vertex_count: usize,
    edge_count: usize,
    weights: Vec<Option<f64>>,
}

impl WeightedGraph {
    /// Create a graph with `vertex_count` nodes and no edges
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edge_count: 0,
            weights: vec![None; vertex_count * vertex_count],
        }
    }

    /// Load a graph from a text file (see [`FromStr`] for the format)
    pub fn from_file(path: &Path) -> Result<Self, GraphError> {
        let content = fs::read_to_string(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All node ids, ascending
    pub fn vertices(&self) -> Range<NodeId> {
        0..self.vertex_count
    }

    /// Check whether an edge joins `a` and `b`
    ///
    /// # Panics
    /// If either node is outside `0..vertex_count`.
    pub fn adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.weights[self.index(a, b)].is_some()
    }

    /// Cost of the edge joining `a` and `b`, if any
    pub fn cost(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.weights[self.index(a, b)]
    }

    /// Neighbors of `v` in ascending id order
    ///
    /// Recomputed from the matrix on every call.
    pub fn neighbors(&self, v: NodeId) -> Vec<NodeId> {
        let row = self.index(v, 0);
        self.weights[row..row + self.vertex_count]
            .iter()
            .enumerate()
            .filter_map(|(n, w)| w.map(|_| n))
            .collect()
    }

    /// Add an edge with the default weight
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        self.add_weighted_edge(a, b, DEFAULT_WEIGHT);
    }

    /// Add an edge, or update its weight if it already exists
    ///
    /// Costs that are not strictly positive fall back to [`DEFAULT_WEIGHT`].
    pub fn add_weighted_edge(&mut self, a: NodeId, b: NodeId, cost: f64) {
        if !self.adjacent(a, b) {
            self.edge_count += 1;
        }
        let cost = if cost > 0.0 { cost } else { DEFAULT_WEIGHT };
        self.set(a, b, Some(cost));
    }

    /// Remove the edge between `a` and `b` if it exists
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) {
        if self.adjacent(a, b) {
            self.edge_count -= 1;
        }
        self.set(a, b, None);
    }

    fn set(&mut self, a: NodeId, b: NodeId, value: Option<f64>) {
        let ab = self.index(a, b);
        let ba = self.index(b, a);
        self.weights[ab] = value;
        self.weights[ba] = value;
    }

    fn index(&self, a: NodeId, b: NodeId) -> usize {
        assert!(
            a < self.vertex_count && b < self.vertex_count,
            "node index out of range: ({a}, {b}) with {} vertices",
            self.vertex_count
        );
        a * self.vertex_count + b
    }
}

/// Parse a graph description
///
/// The first token is the vertex count, followed by `from to cost` triples.
/// All tokens are whitespace separated; line breaks carry no meaning.
impl FromStr for WeightedGraph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace().enumerate();

        let (position, first) = tokens.next().ok_or(GraphError::MissingVertexCount)?;
        let vertex_count: usize = parse_token(first, position)?;
        if vertex_count > MAX_VERTICES {
            return Err(GraphError::TooManyVertices(vertex_count));
        }
        let mut graph = WeightedGraph::new(vertex_count);

        let rest: Vec<(usize, &str)> = tokens.collect();
        let mut triples = rest.chunks_exact(3);
        for triple in triples.by_ref() {
            let from: NodeId = parse_token(triple[0].1, triple[0].0)?;
            let to: NodeId = parse_token(triple[1].1, triple[1].0)?;
            let cost: f64 = parse_token(triple[2].1, triple[2].0)?;

            if from >= vertex_count || to >= vertex_count {
                return Err(GraphError::NodeOutOfRange {
                    from,
                    to,
                    vertex_count,
                });
            }
            graph.add_weighted_edge(from, to, cost);
        }

        match triples.remainder().len() {
            0 => Ok(graph),
            n => Err(GraphError::TruncatedEdge(n)),
        }
    }
}

fn parse_token<T: FromStr>(token: &str, position: usize) -> Result<T, GraphError> {
    token.parse().map_err(|_| GraphError::InvalidToken {
        token: token.to_string(),
        position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut g = WeightedGraph::new(4);
        g.add_edge(0, 2);

        assert!(g.adjacent(0, 2));
        assert!(g.adjacent(2, 0));
        assert!(!g.adjacent(0, 1));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_readding_updates_weight_only() {
        let mut g = WeightedGraph::new(3);
        g.add_weighted_edge(0, 1, 2.5);
        g.add_weighted_edge(1, 0, 4.0);

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.cost(0, 1), Some(4.0));
        assert_eq!(g.cost(1, 0), Some(4.0));
    }

    #[test]
    fn test_non_positive_cost_falls_back_to_default() {
        let mut g = WeightedGraph::new(3);
        g.add_weighted_edge(0, 1, -3.0);
        g.add_weighted_edge(1, 2, 0.0);

        assert_eq!(g.cost(0, 1), Some(DEFAULT_WEIGHT));
        assert_eq!(g.cost(1, 2), Some(DEFAULT_WEIGHT));
    }

    #[test]
    fn test_remove_edge() {
        let mut g = WeightedGraph::new(3);
        g.add_edge(0, 1);
        g.remove_edge(1, 0);
        // Removing a missing edge leaves the count alone
        g.remove_edge(1, 2);

        assert!(!g.adjacent(0, 1));
        assert_eq!(g.cost(0, 1), None);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_neighbors_ascending() {
        let mut g = WeightedGraph::new(5);
        g.add_edge(2, 4);
        g.add_edge(2, 0);
        g.add_edge(2, 3);

        assert_eq!(g.neighbors(2), vec![0, 3, 4]);
        assert_eq!(g.neighbors(1), Vec::<NodeId>::new());
    }

    #[test]
    #[should_panic(expected = "node index out of range")]
    fn test_out_of_range_panics() {
        let g = WeightedGraph::new(2);
        g.adjacent(0, 2);
    }

    #[test]
    fn test_parse_description() {
        let g: WeightedGraph = "4\n0 1 2.0\n1 2 3.5\n2 3 -1\n".parse().unwrap();

        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.cost(1, 2), Some(3.5));
        assert_eq!(g.cost(3, 2), Some(DEFAULT_WEIGHT));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "".parse::<WeightedGraph>(),
            Err(GraphError::MissingVertexCount)
        ));
        assert!(matches!(
            "3 0 x 1.0".parse::<WeightedGraph>(),
            Err(GraphError::InvalidToken { position: 2, .. })
        ));
        assert!(matches!(
            "3 0 3 1.0".parse::<WeightedGraph>(),
            Err(GraphError::NodeOutOfRange { to: 3, .. })
        ));
        assert!(matches!(
            "3 0 1 1.0 2 1".parse::<WeightedGraph>(),
            Err(GraphError::TruncatedEdge(2))
        ));
    }

    #[test]
    fn test_oversized_vertex_count_rejected() {
        assert!(matches!(
            "4294967296 0 1 1.0".parse::<WeightedGraph>(),
            Err(GraphError::TooManyVertices(4294967296))
        ));
        assert!(matches!(
            "100000".parse::<WeightedGraph>(),
            Err(GraphError::TooManyVertices(100000))
        ));

        let g: WeightedGraph = format!("{MAX_VERTICES}").parse().unwrap();
        assert_eq!(g.vertex_count(), MAX_VERTICES);
    }

    #[test]
    fn test_from_file_missing() {
        let err = WeightedGraph::from_file(Path::new("/nonexistent/graph.txt")).unwrap_err();
        assert!(matches!(err, GraphError::Io { .. }));
    }
}
