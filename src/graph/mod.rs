//! Graph module for vertex/edge storage and adjacency queries.
//!
//! Two representations share the same storage discipline (insertion-order
//! vertex arenas addressed by stable integer handles) but differ in
//! interface style:
//!
//! - [`DirectedGraph`] is label-indexed: vertices are addressed by their
//!   unique string label, edges are directed, and adjacency queries return
//!   the labels reachable over one outgoing edge.
//! - [`ArenaGraph`] is structural: insertion returns opaque [`VertexId`] /
//!   [`EdgeId`] handles, adjacency is queried through `incident_edges`, and
//!   `opposite` resolves the far endpoint of an edge.
//!
//! # Example
//!
//! ```rust
//! use graphwalk::graph::DirectedGraph;
//!
//! let mut graph = DirectedGraph::new();
//! graph.insert_vertex("a").unwrap();
//! graph.insert_vertex("b").unwrap();
//! graph.insert_edge("a", "b").unwrap();
//!
//! assert_eq!(graph.vertex_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

mod arena;
mod directed;

pub use arena::ArenaGraph;
pub use directed::DirectedGraph;

/// Opaque handle to a vertex stored in a graph arena.
///
/// Handles are stable for the lifetime of the owning graph and are only
/// meaningful for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexId(pub(crate) usize);

/// Opaque handle to an edge stored in a graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(pub(crate) usize);

/// Errors produced by graph construction and lookup operations.
///
/// All variants are programmer or input errors and are surfaced
/// immediately; none of them are retryable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A label-based lookup referenced a label absent from the graph.
    #[error("vertex not found: {label}")]
    VertexNotFound {
        /// The label that failed to resolve.
        label: String,
    },

    /// A vertex with this label already exists in the graph.
    #[error("duplicate vertex: {label}")]
    DuplicateVertex {
        /// The label that was inserted twice.
        label: String,
    },

    /// `opposite` was called with a vertex that is not an endpoint of the
    /// given edge.
    #[error("vertex is not an endpoint of the edge")]
    InvalidEdgeEndpoint,
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
