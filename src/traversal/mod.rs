//! Traversal algorithms over the graph stores.
//!
//! Sequence-producing algorithms ([`depth_first`], [`breadth_first`],
//! [`topological_sort`]) run against the label-indexed
//! [`DirectedGraph`](crate::graph::DirectedGraph) and yield ordered label
//! sequences. Forest-building algorithms ([`depth_first_forest`],
//! [`breadth_first_forest`]) run against the structural
//! [`ArenaGraph`](crate::graph::ArenaGraph) and map every vertex to the
//! edge that discovered it.
//!
//! Visited state is owned by each run: the algorithms allocate a fresh
//! visited set per call instead of storing marks on the vertices, so
//! consecutive runs over the same graph are independent by construction.
//!
//! # Example
//!
//! ```rust
//! use graphwalk::graph::DirectedGraph;
//! use graphwalk::traversal::breadth_first;
//!
//! let mut graph = DirectedGraph::new();
//! for label in ["a", "b", "c"] {
//!     graph.insert_vertex(label).unwrap();
//! }
//! graph.insert_edge("a", "b").unwrap();
//! graph.insert_edge("b", "c").unwrap();
//!
//! assert_eq!(breadth_first(&graph, "a").unwrap(), vec!["a", "b", "c"]);
//! ```

mod bfs;
mod dfs;
mod topo;

pub use bfs::{breadth_first, breadth_first_forest};
pub use dfs::{depth_first, depth_first_forest};
pub use topo::topological_sort;

use std::collections::HashMap;

/// A single vertex entry in a traversal forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestEntry {
    /// The vertex label.
    pub label: String,
    /// The endpoints of the edge that discovered this vertex, in the
    /// edge's stored endpoint order. `None` marks a tree root.
    pub discovered_by: Option<(String, String)>,
}

/// The result of a forest-building traversal.
///
/// Maps each vertex to the edge that first discovered it; roots of the
/// per-component trees carry no discovering edge. Entries are kept in
/// discovery order, so iterating the forest replays the traversal.
///
/// # Example
///
/// ```rust
/// use graphwalk::graph::ArenaGraph;
/// use graphwalk::traversal::breadth_first_forest;
///
/// let mut graph = ArenaGraph::new();
/// let a = graph.insert_vertex("a").unwrap();
/// let b = graph.insert_vertex("b").unwrap();
/// graph.insert_edge(a, b).unwrap();
///
/// let forest = breadth_first_forest(&graph);
/// assert_eq!(forest.root_count(), 1);
/// assert!(forest.is_root("a"));
/// assert_eq!(
///     forest.discovering_edge("b"),
///     Some(("a".to_string(), "b".to_string()))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalForest {
    /// Entries in discovery order.
    entries: Vec<ForestEntry>,
    /// Maps labels to their entry positions for O(1) lookup.
    indices: HashMap<String, usize>,
}

impl TraversalForest {
    /// Creates an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a newly discovered vertex. Callers guarantee each label is
    /// discovered at most once per traversal.
    pub(crate) fn push(&mut self, label: &str, discovered_by: Option<(String, String)>) {
        self.indices.insert(label.to_string(), self.entries.len());
        self.entries.push(ForestEntry {
            label: label.to_string(),
            discovered_by,
        });
    }

    /// Returns the number of vertices in the forest.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the forest is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks if a vertex was discovered by the traversal.
    pub fn contains(&self, label: &str) -> bool {
        self.indices.contains_key(label)
    }

    /// Checks if a vertex is the root of its tree.
    ///
    /// Undiscovered labels report `false`.
    pub fn is_root(&self, label: &str) -> bool {
        self.get(label).is_some_and(|e| e.discovered_by.is_none())
    }

    /// Returns the entry for a vertex, if it was discovered.
    pub fn get(&self, label: &str) -> Option<&ForestEntry> {
        self.indices.get(label).map(|&idx| &self.entries[idx])
    }

    /// Returns the discovering edge of a vertex as a label pair, or `None`
    /// if the vertex is a root or was never discovered.
    pub fn discovering_edge(&self, label: &str) -> Option<(String, String)> {
        self.get(label).and_then(|e| e.discovered_by.clone())
    }

    /// Returns an iterator over the root labels, one per tree.
    pub fn roots(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(|e| e.discovered_by.is_none())
            .map(|e| e.label.as_str())
    }

    /// Returns the number of trees in the forest.
    ///
    /// Over a full-graph traversal this equals the number of connected
    /// components.
    pub fn root_count(&self) -> usize {
        self.roots().count()
    }

    /// Returns an iterator over all entries in discovery order.
    pub fn entries(&self) -> impl Iterator<Item = &ForestEntry> + '_ {
        self.entries.iter()
    }
}
