//! Depth-first search.
//!
//! Two variants: a mark-based traversal of the label-indexed graph that
//! yields labels in pop order, and a forest builder over the structural
//! graph that records the discovering edge of every vertex.

use super::TraversalForest;
use crate::graph::{ArenaGraph, DirectedGraph, GraphError, GraphResult};

/// Runs a depth-first traversal from `start` and returns the visited
/// labels in pop order.
///
/// The traversal keeps an explicit stack and marks vertices when they are
/// pushed, so each reachable vertex is visited exactly once. Neighbors are
/// pushed in adjacency order without reversal, which means the neighbor
/// pushed last is popped first: the output is the last-neighbor-first
/// variant of DFS, not textbook preorder. That pop order is part of this
/// function's contract.
///
/// # Errors
///
/// Returns [`GraphError::VertexNotFound`] if `start` is not in the graph.
///
/// # Example
///
/// ```rust
/// use graphwalk::graph::DirectedGraph;
/// use graphwalk::traversal::depth_first;
///
/// let mut graph = DirectedGraph::new();
/// for label in ["a", "b", "c"] {
///     graph.insert_vertex(label).unwrap();
/// }
/// graph.insert_edge("a", "b").unwrap();
/// graph.insert_edge("a", "c").unwrap();
///
/// // "c" was pushed after "b", so it pops first.
/// assert_eq!(depth_first(&graph, "a").unwrap(), vec!["a", "c", "b"]);
/// ```
pub fn depth_first(graph: &DirectedGraph, start: &str) -> GraphResult<Vec<String>> {
    let start_idx = graph
        .index_of(start)
        .ok_or_else(|| GraphError::VertexNotFound {
            label: start.to_string(),
        })?;

    let mut visited = vec![false; graph.vertex_count()];
    let mut stack = vec![start_idx];
    visited[start_idx] = true;

    let mut path = Vec::new();
    while let Some(u) = stack.pop() {
        path.push(graph.label_at(u).to_string());
        for &v in graph.neighbors_at(u) {
            if !visited[v] {
                visited[v] = true;
                stack.push(v);
            }
        }
    }

    Ok(path)
}

/// Builds a depth-first forest covering every vertex of the graph.
///
/// Vertices are taken in enumeration order; each undiscovered one roots a
/// new tree and its component is walked depth-first through
/// `incident_edges`, recording the edge that first reached each vertex.
/// The walk uses an explicit stack of `(vertex, edge-cursor)` frames, so
/// stack depth is bounded by the component size rather than call-stack
/// limits, while discovery order matches the recursive formulation
/// exactly.
///
/// # Example
///
/// ```rust
/// use graphwalk::graph::ArenaGraph;
/// use graphwalk::traversal::depth_first_forest;
///
/// let mut graph = ArenaGraph::new();
/// let a = graph.insert_vertex("a").unwrap();
/// let b = graph.insert_vertex("b").unwrap();
/// graph.insert_edge(a, b).unwrap();
/// graph.insert_vertex("c").unwrap();
///
/// let forest = depth_first_forest(&graph);
/// assert_eq!(forest.root_count(), 2); // components {a, b} and {c}
/// ```
pub fn depth_first_forest(graph: &ArenaGraph) -> TraversalForest {
    let mut forest = TraversalForest::new();
    let mut discovered = vec![false; graph.vertex_count()];

    for root in 0..graph.vertex_count() {
        if discovered[root] {
            continue;
        }
        discovered[root] = true;
        forest.push(graph.label_at(root), None);

        // Each frame resumes u at its next incident edge, mirroring the
        // recursive walk that descends into every edge and lets the callee
        // skip already-discovered endpoints.
        let mut stack = vec![(root, 0usize)];
        while let Some((u, cursor)) = stack.pop() {
            if let Some(&e) = graph.incident_at(u).get(cursor) {
                stack.push((u, cursor + 1));
                let (a, b) = graph.endpoints_at(e);
                let v = if a == u { b } else { a };
                if !discovered[v] {
                    discovered[v] = true;
                    forest.push(
                        graph.label_at(v),
                        Some((graph.label_at(a).to_string(), graph.label_at(b).to_string())),
                    );
                    stack.push((v, 0));
                }
            }
        }
    }

    forest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_graph() -> DirectedGraph {
        let mut graph = DirectedGraph::new();
        for label in ["a", "b", "c"] {
            graph.insert_vertex(label).unwrap();
        }
        graph.insert_edge("a", "b").unwrap();
        graph.insert_edge("b", "c").unwrap();
        graph
    }

    #[test]
    fn test_depth_first_chain() {
        let graph = chain_graph();
        assert_eq!(depth_first(&graph, "a").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_depth_first_pop_order_last_neighbor_first() {
        let mut graph = DirectedGraph::new();
        for label in ["a", "b", "c"] {
            graph.insert_vertex(label).unwrap();
        }
        graph.insert_edge("a", "b").unwrap();
        graph.insert_edge("a", "c").unwrap();

        // Not preorder: the neighbor pushed last pops first.
        assert_eq!(depth_first(&graph, "a").unwrap(), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_depth_first_visits_reachable_exactly_once() {
        let mut graph = DirectedGraph::new();
        for label in ["a", "b", "c", "d", "e"] {
            graph.insert_vertex(label).unwrap();
        }
        // Diamond plus a back-reference; "e" stays unreachable.
        graph.insert_edge("a", "b").unwrap();
        graph.insert_edge("a", "c").unwrap();
        graph.insert_edge("b", "d").unwrap();
        graph.insert_edge("c", "d").unwrap();
        graph.insert_edge("d", "a").unwrap();

        let path = depth_first(&graph, "a").unwrap();
        assert_eq!(path.len(), 4);

        let mut sorted = path.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 4);
        assert!(!path.contains(&"e".to_string()));
    }

    #[test]
    fn test_depth_first_from_middle() {
        let graph = chain_graph();
        assert_eq!(depth_first(&graph, "b").unwrap(), vec!["b", "c"]);
    }

    #[test]
    fn test_depth_first_missing_start_fails() {
        let graph = chain_graph();
        assert_eq!(
            depth_first(&graph, "ghost"),
            Err(GraphError::VertexNotFound {
                label: "ghost".to_string()
            })
        );
    }

    #[test]
    fn test_depth_first_consecutive_runs_identical() {
        let graph = chain_graph();
        let first = depth_first(&graph, "a").unwrap();
        let second = depth_first(&graph, "a").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_depth_first_course_prerequisites() {
        // Course-catalog shaped fixture: prerequisites point at the
        // courses they unlock.
        let mut graph = DirectedGraph::new();
        for label in ["CS106A", "CS106B", "CS103", "CS107", "CS110", "CS161"] {
            graph.insert_vertex(label).unwrap();
        }
        graph.insert_edge("CS106A", "CS106B").unwrap();
        graph.insert_edge("CS106B", "CS107").unwrap();
        graph.insert_edge("CS106B", "CS103").unwrap();
        graph.insert_edge("CS107", "CS110").unwrap();
        graph.insert_edge("CS103", "CS161").unwrap();

        let path = depth_first(&graph, "CS106A").unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(path[0], "CS106A");
        // Adjacency of CS106B is [CS107, CS103]; CS103 pops first.
        assert_eq!(path, vec!["CS106A", "CS106B", "CS103", "CS161", "CS107", "CS110"]);
    }

    #[test]
    fn test_forest_single_component() {
        let mut graph = ArenaGraph::new();
        let a = graph.insert_vertex("a").unwrap();
        let b = graph.insert_vertex("b").unwrap();
        let c = graph.insert_vertex("c").unwrap();
        graph.insert_edge(a, b).unwrap();
        graph.insert_edge(b, c).unwrap();

        let forest = depth_first_forest(&graph);
        assert_eq!(forest.len(), 3);
        assert_eq!(forest.root_count(), 1);
        assert!(forest.is_root("a"));
        assert_eq!(
            forest.discovering_edge("b"),
            Some(("a".to_string(), "b".to_string()))
        );
        assert_eq!(
            forest.discovering_edge("c"),
            Some(("b".to_string(), "c".to_string()))
        );
    }

    #[test]
    fn test_forest_multiple_components() {
        let mut graph = ArenaGraph::new();
        let a = graph.insert_vertex("a").unwrap();
        let b = graph.insert_vertex("b").unwrap();
        let c = graph.insert_vertex("c").unwrap();
        let d = graph.insert_vertex("d").unwrap();
        graph.insert_edge(a, b).unwrap();
        graph.insert_edge(c, d).unwrap();

        let forest = depth_first_forest(&graph);
        assert_eq!(forest.len(), 4);
        assert_eq!(forest.root_count(), 2);
        let roots: Vec<&str> = forest.roots().collect();
        assert_eq!(roots, vec!["a", "c"]);
        // Non-root entries: vertex count minus component count.
        assert_eq!(forest.len() - forest.root_count(), 2);
    }

    #[test]
    fn test_forest_discovery_order_matches_recursion() {
        // a touches b and c; b touches d. Recursive DFS descends through
        // b (and then d) before it ever considers c.
        let mut graph = ArenaGraph::new();
        let a = graph.insert_vertex("a").unwrap();
        let b = graph.insert_vertex("b").unwrap();
        let c = graph.insert_vertex("c").unwrap();
        let d = graph.insert_vertex("d").unwrap();
        graph.insert_edge(a, b).unwrap();
        graph.insert_edge(a, c).unwrap();
        graph.insert_edge(b, d).unwrap();

        let forest = depth_first_forest(&graph);
        let order: Vec<&str> = forest.entries().map(|e| e.label.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn test_forest_empty_graph() {
        let graph = ArenaGraph::new();
        let forest = depth_first_forest(&graph);
        assert!(forest.is_empty());
    }

    #[test]
    fn test_forest_isolated_vertices() {
        let mut graph = ArenaGraph::new();
        graph.insert_vertex("a").unwrap();
        graph.insert_vertex("b").unwrap();

        let forest = depth_first_forest(&graph);
        assert_eq!(forest.root_count(), 2);
        assert_eq!(forest.len(), 2);
    }
}
