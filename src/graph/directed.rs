//! Label-indexed directed graph.
//!
//! Vertices are addressed by their unique string label. Storage is an
//! insertion-order arena with a label index on the side, so label lookup is
//! O(1) and enumeration order is deterministic across runs.

use std::collections::HashMap;

use super::{GraphError, GraphResult, VertexId};

/// A directed graph whose vertices are addressed by unique string labels.
///
/// Vertices live in an insertion-order arena and are referenced internally
/// by stable integer handles; a `HashMap` maps each label to its handle for
/// O(1) membership checks. Adjacency lists hold out-neighbors in edge
/// insertion order, which makes every enumeration deterministic.
///
/// Labels must be unique: [`insert_edge`](Self::insert_edge) requires both
/// endpoints to already exist, and inserting a duplicate label fails with
/// [`GraphError::DuplicateVertex`] rather than silently overwriting.
///
/// # Example
///
/// ```rust
/// use graphwalk::graph::DirectedGraph;
///
/// let mut graph = DirectedGraph::new();
/// graph.insert_vertex("a").unwrap();
/// graph.insert_vertex("b").unwrap();
/// graph.insert_vertex("c").unwrap();
///
/// graph.insert_edge("a", "b").unwrap();
/// graph.insert_edge("a", "c").unwrap();
///
/// let neighbors: Vec<&str> = graph.neighboring_vertices("a").unwrap().collect();
/// assert_eq!(neighbors, vec!["b", "c"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    /// Vertex labels in insertion order.
    labels: Vec<String>,
    /// Maps labels to their arena indices for O(1) lookup.
    indices: HashMap<String, usize>,
    /// Out-neighbor indices per vertex, in edge insertion order.
    adjacency: Vec<Vec<usize>>,
    /// Total number of directed edges.
    edge_count: usize,
}

impl DirectedGraph {
    /// Creates a new empty graph.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphwalk::graph::DirectedGraph;
    ///
    /// let graph = DirectedGraph::new();
    /// assert!(graph.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with pre-allocated vertex capacity.
    ///
    /// Use this when the approximate vertex count is known up front to
    /// avoid reallocations while loading.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            labels: Vec::with_capacity(vertices),
            indices: HashMap::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Inserts a new vertex with the given label.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateVertex`] if the label is already
    /// present. Every traversal relies on label uniqueness, so duplicates
    /// fail loudly instead of overwriting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphwalk::graph::{DirectedGraph, GraphError};
    ///
    /// let mut graph = DirectedGraph::new();
    /// assert!(graph.insert_vertex("a").is_ok());
    /// assert_eq!(
    ///     graph.insert_vertex("a"),
    ///     Err(GraphError::DuplicateVertex { label: "a".to_string() })
    /// );
    /// ```
    pub fn insert_vertex(&mut self, label: impl Into<String>) -> GraphResult<VertexId> {
        let label = label.into();
        if self.indices.contains_key(&label) {
            return Err(GraphError::DuplicateVertex { label });
        }

        let idx = self.labels.len();
        self.indices.insert(label.clone(), idx);
        self.labels.push(label);
        self.adjacency.push(Vec::new());
        Ok(VertexId(idx))
    }

    /// Inserts a directed edge between two existing vertices.
    ///
    /// Insertion is idempotent: if the edge is already present the graph is
    /// left untouched and `Ok(false)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either endpoint label is
    /// absent. Edges never create vertices implicitly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphwalk::graph::DirectedGraph;
    ///
    /// let mut graph = DirectedGraph::new();
    /// graph.insert_vertex("a").unwrap();
    /// graph.insert_vertex("b").unwrap();
    ///
    /// assert_eq!(graph.insert_edge("a", "b"), Ok(true));
    /// assert_eq!(graph.insert_edge("a", "b"), Ok(false)); // already present
    /// assert!(graph.insert_edge("a", "missing").is_err());
    /// ```
    pub fn insert_edge(&mut self, from: &str, to: &str) -> GraphResult<bool> {
        let from_idx = self.require(from)?;
        let to_idx = self.require(to)?;

        if self.adjacency[from_idx].contains(&to_idx) {
            return Ok(false);
        }

        self.adjacency[from_idx].push(to_idx);
        self.edge_count += 1;
        Ok(true)
    }

    /// Checks if a vertex with the given label exists.
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.indices.contains_key(label)
    }

    /// Checks if a directed edge from `from` to `to` exists.
    ///
    /// Missing endpoints simply report `false`; only lookups that promise a
    /// vertex reference surface [`GraphError::VertexNotFound`].
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        match (self.indices.get(from), self.indices.get(to)) {
            (Some(&f), Some(&t)) => self.adjacency[f].contains(&t),
            _ => false,
        }
    }

    /// Looks up the handle of a vertex by label.
    pub fn get_vertex(&self, label: &str) -> Option<VertexId> {
        self.indices.get(label).map(|&idx| VertexId(idx))
    }

    /// Returns the label of a vertex handle.
    pub fn label(&self, vertex: VertexId) -> Option<&str> {
        self.labels.get(vertex.0).map(String::as_str)
    }

    /// Returns an iterator over the labels adjacent to `label` via one
    /// outgoing edge, in edge insertion order.
    ///
    /// A fresh iterator is produced on every call.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the label is absent.
    pub fn neighboring_vertices(
        &self,
        label: &str,
    ) -> GraphResult<impl Iterator<Item = &str> + '_> {
        let idx = self.require(label)?;
        Ok(self.adjacency[idx].iter().map(|&n| self.labels[n].as_str()))
    }

    /// Returns an iterator over all vertex labels in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// Returns the number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of directed edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Checks if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Checks if the graph contains a directed cycle.
    ///
    /// This is a standalone query; [`topological_sort`] never performs
    /// cycle detection itself and will return a semantically invalid order
    /// for cyclic input, so callers that care should probe first.
    ///
    /// [`topological_sort`]: crate::traversal::topological_sort
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphwalk::graph::DirectedGraph;
    ///
    /// let mut graph = DirectedGraph::new();
    /// graph.insert_vertex("a").unwrap();
    /// graph.insert_vertex("b").unwrap();
    /// graph.insert_edge("a", "b").unwrap();
    /// assert!(!graph.has_cycles());
    ///
    /// graph.insert_edge("b", "a").unwrap();
    /// assert!(graph.has_cycles());
    /// ```
    pub fn has_cycles(&self) -> bool {
        const WHITE: u8 = 0;
        const GRAY: u8 = 1;
        const BLACK: u8 = 2;

        let mut color = vec![WHITE; self.labels.len()];

        for root in 0..self.labels.len() {
            if color[root] != WHITE {
                continue;
            }
            color[root] = GRAY;
            // Frames carry the next adjacency slot to examine, so a
            // vertex turns black only after all its out-edges are done.
            let mut stack = vec![(root, 0usize)];
            while let Some((u, cursor)) = stack.pop() {
                if let Some(&v) = self.adjacency[u].get(cursor) {
                    stack.push((u, cursor + 1));
                    match color[v] {
                        GRAY => return true,
                        WHITE => {
                            color[v] = GRAY;
                            stack.push((v, 0));
                        }
                        _ => {}
                    }
                } else {
                    color[u] = BLACK;
                }
            }
        }

        false
    }

    /// Resolves a label to its arena index or fails with `VertexNotFound`.
    fn require(&self, label: &str) -> GraphResult<usize> {
        self.indices
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::VertexNotFound {
                label: label.to_string(),
            })
    }

    /// Arena index of a label, if present.
    pub(crate) fn index_of(&self, label: &str) -> Option<usize> {
        self.indices.get(label).copied()
    }

    /// Label stored at an arena index. Only called with indices the graph
    /// itself handed out.
    pub(crate) fn label_at(&self, idx: usize) -> &str {
        &self.labels[idx]
    }

    /// Out-neighbor indices of an arena index, in edge insertion order.
    pub(crate) fn neighbors_at(&self, idx: usize) -> &[usize] {
        &self.adjacency[idx]
    }
}
