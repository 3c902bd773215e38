//! Topological sort.
//!
//! DFS-based: vertices are pushed onto a finishing stack after all their
//! neighbors are processed, and the stack read top-to-bottom is the
//! resulting order.

use crate::graph::{DirectedGraph, GraphError, GraphResult};

/// Produces a topological ordering of the graph's vertices.
///
/// Runs a depth-first walk pushing each vertex onto a finishing stack
/// after all of its out-neighbors are done; the returned sequence reads
/// that stack top-to-bottom. With `start`, only the subgraph reachable
/// from the start vertex is ordered. With `None`, every vertex is covered
/// by sweeping the enumeration order, yielding a total order across all
/// components.
///
/// The result is a valid topological order only if the graph is a DAG.
/// No cycle detection is performed: on cyclic input the walk still
/// terminates (marks bound the descent) and returns a complete sequence,
/// but its order is not meaningful. Probe with
/// [`DirectedGraph::has_cycles`] first when that matters.
///
/// # Errors
///
/// Returns [`GraphError::VertexNotFound`] if `start` names an absent
/// vertex.
///
/// # Example
///
/// ```rust
/// use graphwalk::graph::DirectedGraph;
/// use graphwalk::traversal::topological_sort;
///
/// let mut graph = DirectedGraph::new();
/// for label in ["a", "b", "c"] {
///     graph.insert_vertex(label).unwrap();
/// }
/// graph.insert_edge("a", "b").unwrap();
/// graph.insert_edge("b", "c").unwrap();
///
/// assert_eq!(
///     topological_sort(&graph, None).unwrap(),
///     vec!["a", "b", "c"]
/// );
/// ```
pub fn topological_sort(
    graph: &DirectedGraph,
    start: Option<&str>,
) -> GraphResult<Vec<String>> {
    let mut marked = vec![false; graph.vertex_count()];
    let mut finished = Vec::new();

    match start {
        Some(label) => {
            let idx = graph
                .index_of(label)
                .ok_or_else(|| GraphError::VertexNotFound {
                    label: label.to_string(),
                })?;
            visit(graph, idx, &mut marked, &mut finished);
        }
        None => {
            for idx in 0..graph.vertex_count() {
                if !marked[idx] {
                    visit(graph, idx, &mut marked, &mut finished);
                }
            }
        }
    }

    Ok(finished
        .iter()
        .rev()
        .map(|&idx| graph.label_at(idx).to_string())
        .collect())
}

/// Depth-first walk from `start`, appending vertices to `finished` in
/// post-order. Realized with an explicit cursor stack so depth is bounded
/// by the reachable vertex count.
fn visit(graph: &DirectedGraph, start: usize, marked: &mut [bool], finished: &mut Vec<usize>) {
    marked[start] = true;
    let mut stack = vec![(start, 0usize)];

    while let Some((u, cursor)) = stack.pop() {
        if let Some(&v) = graph.neighbors_at(u).get(cursor) {
            stack.push((u, cursor + 1));
            if !marked[v] {
                marked[v] = true;
                stack.push((v, 0));
            }
        } else {
            // All neighbors finished before u itself.
            finished.push(u);
        }
    }
}
