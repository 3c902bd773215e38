//! Breadth-first search.
//!
//! Two variants: a mark-based level-order traversal of the label-indexed
//! graph, and a forest builder over the structural graph that expands a
//! frontier per level and covers every connected component.

use std::collections::VecDeque;

use super::TraversalForest;
use crate::graph::{ArenaGraph, DirectedGraph, GraphError, GraphResult};

/// Runs a breadth-first traversal from `start` and returns the visited
/// labels in level order.
///
/// Vertices are marked when enqueued, so each reachable vertex appears
/// exactly once, in non-decreasing hop distance from `start`.
///
/// # Errors
///
/// Returns [`GraphError::VertexNotFound`] if `start` is not in the graph.
///
/// # Example
///
/// ```rust
/// use graphwalk::graph::DirectedGraph;
/// use graphwalk::traversal::breadth_first;
///
/// let mut graph = DirectedGraph::new();
/// for label in ["a", "b", "c", "d"] {
///     graph.insert_vertex(label).unwrap();
/// }
/// graph.insert_edge("a", "b").unwrap();
/// graph.insert_edge("a", "c").unwrap();
/// graph.insert_edge("b", "d").unwrap();
///
/// assert_eq!(breadth_first(&graph, "a").unwrap(), vec!["a", "b", "c", "d"]);
/// ```
pub fn breadth_first(graph: &DirectedGraph, start: &str) -> GraphResult<Vec<String>> {
    let start_idx = graph
        .index_of(start)
        .ok_or_else(|| GraphError::VertexNotFound {
            label: start.to_string(),
        })?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::from([start_idx]);
    visited[start_idx] = true;

    let mut path = Vec::new();
    while let Some(u) = queue.pop_front() {
        path.push(graph.label_at(u).to_string());
        for &v in graph.neighbors_at(u) {
            if !visited[v] {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }

    Ok(path)
}

/// Builds a breadth-first forest covering every vertex of the graph.
///
/// Vertices are taken in enumeration order; each undiscovered one roots a
/// new tree and its component is expanded level by level: every incident
/// edge of the current frontier is examined, undiscovered opposite
/// endpoints are recorded with their discovering edge and form the next
/// frontier. One tree is produced per connected component.
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
/// let c = graph.insert_vertex("c").unwrap();
/// graph.insert_edge(a, b).unwrap();
/// graph.insert_edge(c, a).unwrap();
///
/// let forest = breadth_first_forest(&graph);
/// assert_eq!(forest.root_count(), 1);
/// assert_eq!(forest.len(), 3);
/// ```
pub fn breadth_first_forest(graph: &ArenaGraph) -> TraversalForest {
    let mut forest = TraversalForest::new();
    let mut discovered = vec![false; graph.vertex_count()];

    for root in 0..graph.vertex_count() {
        if discovered[root] {
            continue;
        }
        discovered[root] = true;
        forest.push(graph.label_at(root), None);

        let mut frontier = vec![root];
        while !frontier.is_empty() {
            let mut next_frontier = Vec::new();
            for &u in &frontier {
                for &e in graph.incident_at(u) {
                    let (a, b) = graph.endpoints_at(e);
                    let v = if a == u { b } else { a };
                    if !discovered[v] {
                        discovered[v] = true;
                        forest.push(
                            graph.label_at(v),
                            Some((graph.label_at(a).to_string(), graph.label_at(b).to_string())),
                        );
                        next_frontier.push(v);
                    }
                }
            }
            frontier = next_frontier;
        }
    }

    forest
}
