//! Parser for adjacency-list text files.
//!
//! The format is line-oriented: the first line is a header and is skipped;
//! every further non-blank line holds a vertex label followed by the
//! labels adjacent to it, whitespace-separated. The literal token `none`
//! marks a vertex with no adjacents.

use std::fs;
use std::path::Path;

use crate::graph::{ArenaGraph, DirectedGraph, GraphError};

/// Token marking an empty adjacency list in the input format.
const NO_ADJACENTS: &str = "none";

/// Errors that can occur while loading an adjacency-list file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The input is empty; even a graph with no records needs its header
    /// line.
    #[error("Input has no header line")]
    EmptyInput,

    /// Graph construction rejected the records.
    #[error("Failed to build graph: {0}")]
    Graph(#[from] GraphError),
}

/// Result type alias for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Loads a label-indexed directed graph from an adjacency-list file.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use graphwalk::loader::load_directed;
///
/// let graph = load_directed(Path::new("data/courses.txt")).unwrap();
/// println!("{} vertices", graph.vertex_count());
/// ```
pub fn load_directed(path: &Path) -> LoadResult<DirectedGraph> {
    let content = fs::read_to_string(path)?;
    load_directed_str(&content)
}

/// Loads a label-indexed directed graph from adjacency-list text.
///
/// Every label is created exactly once no matter how often it appears,
/// and repeated adjacency records collapse onto one edge, so the produced
/// graph always satisfies the store's uniqueness invariants.
///
/// # Example
///
/// ```rust
/// use graphwalk::loader::load_directed_str;
///
/// let input = "\
/// vertex adjacents
/// a b c
/// b c
/// c none
/// ";
/// let graph = load_directed_str(input).unwrap();
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// ```
pub fn load_directed_str(content: &str) -> LoadResult<DirectedGraph> {
    let mut lines = content.lines();
    lines.next().ok_or(LoadError::EmptyInput)?;

    let mut graph = DirectedGraph::new();
    for line in lines {
        let mut tokens = line.split_whitespace();
        let Some(label) = tokens.next() else {
            continue;
        };
        if !graph.contains_vertex(label) {
            graph.insert_vertex(label)?;
        }
        for adjacent in tokens {
            if adjacent == NO_ADJACENTS {
                continue;
            }
            if !graph.contains_vertex(adjacent) {
                graph.insert_vertex(adjacent)?;
            }
            graph.insert_edge(label, adjacent)?;
        }
    }

    Ok(graph)
}

/// Loads a structural graph from an adjacency-list file.
pub fn load_arena(path: &Path) -> LoadResult<ArenaGraph> {
    let content = fs::read_to_string(path)?;
    load_arena_str(&content)
}

/// Loads a structural graph from adjacency-list text.
///
/// Same record format and deduplication rules as
/// [`load_directed_str`]; the produced graph is the undirected
/// handle-based variant consumed by the forest-building traversals.
pub fn load_arena_str(content: &str) -> LoadResult<ArenaGraph> {
    let mut lines = content.lines();
    lines.next().ok_or(LoadError::EmptyInput)?;

    let mut graph = ArenaGraph::new();
    for line in lines {
        let mut tokens = line.split_whitespace();
        let Some(label) = tokens.next() else {
            continue;
        };
        let u = match graph.get_vertex(label) {
            Some(handle) => handle,
            None => graph.insert_vertex(label)?,
        };
        for adjacent in tokens {
            if adjacent == NO_ADJACENTS {
                continue;
            }
            let v = match graph.get_vertex(adjacent) {
                Some(handle) => handle,
                None => graph.insert_vertex(adjacent)?,
            };
            graph.insert_edge(u, v)?;
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_COURSES: &str = "\
course prerequisites-for
CS106A CS106B
CS106B CS107 CS103
CS107 CS110
CS103 CS161
CS110 none
CS161 none
";

    #[test]
    fn test_load_directed_counts() {
        let graph = load_directed_str(SAMPLE_COURSES).unwrap();
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn test_load_directed_edges() {
        let graph = load_directed_str(SAMPLE_COURSES).unwrap();
        assert!(graph.contains_edge("CS106A", "CS106B"));
        assert!(graph.contains_edge("CS106B", "CS107"));
        assert!(graph.contains_edge("CS106B", "CS103"));
        assert!(graph.contains_edge("CS107", "CS110"));
        assert!(graph.contains_edge("CS103", "CS161"));
        // Records are directed.
        assert!(!graph.contains_edge("CS106B", "CS106A"));
    }

    #[test]
    fn test_load_directed_none_sentinel() {
        let graph = load_directed_str("header\na none\n").unwrap();
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.contains_vertex("none"));
    }

    #[test]
    fn test_load_directed_header_is_skipped() {
        let graph = load_directed_str(SAMPLE_COURSES).unwrap();
        assert!(!graph.contains_vertex("course"));
        assert!(!graph.contains_vertex("prerequisites-for"));
    }

    #[test]
    fn test_load_directed_vertex_created_once() {
        // "b" appears as an adjacent before it owns a record line.
        let input = "\
header
a b
b c
a c
";
        let graph = load_directed_str(input).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_load_directed_duplicate_adjacency_collapses() {
        let input = "\
header
a b b
a b
";
        let graph = load_directed_str(input).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_load_directed_skips_blank_lines() {
        let input = "header\na b\n\nb none\n";
        let graph = load_directed_str(input).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_load_directed_empty_input_fails() {
        let result = load_directed_str("");
        assert!(matches!(result, Err(LoadError::EmptyInput)));
    }

    #[test]
    fn test_load_directed_header_only_is_empty_graph() {
        let graph = load_directed_str("just a header\n").unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_load_directed_missing_file_fails() {
        let result = load_directed(Path::new("no/such/file.txt"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn test_load_arena_counts() {
        let graph = load_arena_str(SAMPLE_COURSES).unwrap();
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn test_load_arena_edges_are_undirected() {
        let graph = load_arena_str(SAMPLE_COURSES).unwrap();
        let a = graph.get_vertex("CS106A").unwrap();
        let b = graph.get_vertex("CS106B").unwrap();
        assert!(graph.contains_edge(a, b));
        assert!(graph.contains_edge(b, a));
    }

    #[test]
    fn test_load_arena_duplicate_adjacency_collapses() {
        // The reverse record names an edge that already exists.
        let input = "\
header
a b
b a
";
        let graph = load_arena_str(input).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_load_arena_supports_forest_traversal() {
        use crate::traversal::breadth_first_forest;

        let graph = load_arena_str(SAMPLE_COURSES).unwrap();
        let forest = breadth_first_forest(&graph);
        assert_eq!(forest.len(), 6);
        assert_eq!(forest.root_count(), 1);
    }

    #[test]
    fn test_load_error_display() {
        let err = LoadError::EmptyInput;
        assert!(err.to_string().contains("header"));

        let io_err = LoadError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        assert!(io_err.to_string().contains("Failed to read file"));
    }
}
