//! Structural (position-based) graph.
//!
//! Vertices and edges are opaque handles returned at insertion time.
//! Adjacency is queried through `incident_edges`, and `opposite` resolves
//! the far endpoint of an edge. Edges are undirected.

use std::collections::HashMap;

use super::{EdgeId, GraphError, GraphResult, VertexId};

/// An undirected graph addressed through opaque insertion handles.
///
/// Entities are arena-allocated: vertices and edges live in insertion-order
/// vectors and the issued [`VertexId`] / [`EdgeId`] handles are stable
/// integer indices into them. `opposite` is therefore an index comparison,
/// and per-vertex incidence lists keep adjacency enumeration in edge
/// insertion order.
///
/// # Example
///
/// ```rust
/// use graphwalk::graph::ArenaGraph;
///
/// let mut graph = ArenaGraph::new();
/// let a = graph.insert_vertex("a").unwrap();
/// let b = graph.insert_vertex("b").unwrap();
/// let edge = graph.insert_edge(a, b).unwrap();
///
/// assert_eq!(graph.opposite(a, edge), Ok(b));
/// assert_eq!(graph.opposite(b, edge), Ok(a));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArenaGraph {
    /// Vertex labels in insertion order.
    labels: Vec<String>,
    /// Maps labels to their arena indices for O(1) lookup.
    indices: HashMap<String, usize>,
    /// Edge endpoint pairs in insertion order.
    edges: Vec<(usize, usize)>,
    /// Incident edge indices per vertex, in edge insertion order.
    incidence: Vec<Vec<usize>>,
}

impl ArenaGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with pre-allocated capacity.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            labels: Vec::with_capacity(vertices),
            indices: HashMap::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            incidence: Vec::with_capacity(vertices),
        }
    }

    /// Inserts a new vertex and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateVertex`] if the label is already
    /// present.
    pub fn insert_vertex(&mut self, label: impl Into<String>) -> GraphResult<VertexId> {
        let label = label.into();
        if self.indices.contains_key(&label) {
            return Err(GraphError::DuplicateVertex { label });
        }

        let idx = self.labels.len();
        self.indices.insert(label.clone(), idx);
        self.labels.push(label);
        self.incidence.push(Vec::new());
        Ok(VertexId(idx))
    }

    /// Inserts an undirected edge between two vertices and returns its
    /// handle.
    ///
    /// Insertion is idempotent: if an edge between the unordered pair
    /// already exists, its handle is returned and the graph is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either handle was not
    /// issued by this graph.
    pub fn insert_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<EdgeId> {
        self.require(u)?;
        self.require(v)?;

        if let Some(existing) = self.edge_between(u, v) {
            return Ok(existing);
        }

        let edge_idx = self.edges.len();
        self.edges.push((u.0, v.0));
        self.incidence[u.0].push(edge_idx);
        if u.0 != v.0 {
            self.incidence[v.0].push(edge_idx);
        }
        Ok(EdgeId(edge_idx))
    }

    /// Looks up the handle of a vertex by label.
    pub fn get_vertex(&self, label: &str) -> Option<VertexId> {
        self.indices.get(label).map(|&idx| VertexId(idx))
    }

    /// Returns the label of a vertex handle.
    pub fn label(&self, vertex: VertexId) -> Option<&str> {
        self.labels.get(vertex.0).map(String::as_str)
    }

    /// Returns the endpoint handles of an edge.
    pub fn endpoints(&self, edge: EdgeId) -> Option<(VertexId, VertexId)> {
        self.edges
            .get(edge.0)
            .map(|&(u, v)| (VertexId(u), VertexId(v)))
    }

    /// Returns the handle of the edge between the unordered pair, if any.
    pub fn edge_between(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        let incident = self.incidence.get(u.0)?;
        incident
            .iter()
            .find(|&&e| {
                let (a, b) = self.edges[e];
                (a == u.0 && b == v.0) || (a == v.0 && b == u.0)
            })
            .map(|&e| EdgeId(e))
    }

    /// Checks if an edge exists between the unordered pair of vertices.
    pub fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.edge_between(u, v).is_some()
    }

    /// Returns an iterator over the edges incident to a vertex, in edge
    /// insertion order. A fresh iterator is produced on every call.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if the handle was not issued
    /// by this graph.
    pub fn incident_edges(
        &self,
        vertex: VertexId,
    ) -> GraphResult<impl Iterator<Item = EdgeId> + '_> {
        self.require(vertex)?;
        Ok(self.incidence[vertex.0].iter().map(|&e| EdgeId(e)))
    }

    /// Returns the endpoint of `edge` that is not `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidEdgeEndpoint`] if `vertex` is not an
    /// endpoint of `edge` (or the edge handle is unknown).
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphwalk::graph::{ArenaGraph, GraphError};
    ///
    /// let mut graph = ArenaGraph::new();
    /// let a = graph.insert_vertex("a").unwrap();
    /// let b = graph.insert_vertex("b").unwrap();
    /// let c = graph.insert_vertex("c").unwrap();
    /// let edge = graph.insert_edge(a, b).unwrap();
    ///
    /// assert_eq!(graph.opposite(a, edge), Ok(b));
    /// assert_eq!(graph.opposite(c, edge), Err(GraphError::InvalidEdgeEndpoint));
    /// ```
    pub fn opposite(&self, vertex: VertexId, edge: EdgeId) -> GraphResult<VertexId> {
        let &(u, v) = self
            .edges
            .get(edge.0)
            .ok_or(GraphError::InvalidEdgeEndpoint)?;

        if vertex.0 == u {
            Ok(VertexId(v))
        } else if vertex.0 == v {
            Ok(VertexId(u))
        } else {
            Err(GraphError::InvalidEdgeEndpoint)
        }
    }

    /// Returns an iterator over all vertex handles in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.labels.len()).map(VertexId)
    }

    /// Returns the number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Checks if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label stored at an arena index. Only called with indices the graph
    /// itself handed out.
    pub(crate) fn label_at(&self, idx: usize) -> &str {
        &self.labels[idx]
    }

    /// Incident edge indices of an arena index, in edge insertion order.
    pub(crate) fn incident_at(&self, idx: usize) -> &[usize] {
        &self.incidence[idx]
    }

    /// Endpoint arena indices of an edge index.
    pub(crate) fn endpoints_at(&self, edge_idx: usize) -> (usize, usize) {
        self.edges[edge_idx]
    }

    /// Validates that a handle was issued by this graph.
    fn require(&self, vertex: VertexId) -> GraphResult<()> {
        if vertex.0 < self.labels.len() {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound {
                label: format!("#{}", vertex.0),
            })
        }
    }
}
