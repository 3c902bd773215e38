//! Plain-text export implementation.
//!
//! Exports traversal results as a human-readable report.

use super::{AlgorithmRun, ExportData, Exporter};
use std::io::{self, Write};

/// Plain-text exporter implementation.
pub struct TextExporter;

impl Exporter for TextExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "Graph: {} ({} vertices, {} edges)",
            data.source, data.vertex_count, data.edge_count
        )?;

        for run in &data.runs {
            writeln!(writer)?;
            match run {
                AlgorithmRun::Sequence {
                    algorithm,
                    start,
                    order,
                } => {
                    match start {
                        Some(start) => writeln!(writer, "{} from {}:", algorithm, start)?,
                        None => writeln!(writer, "{}:", algorithm)?,
                    }
                    if order.is_empty() {
                        writeln!(writer, "  (empty)")?;
                    } else {
                        writeln!(writer, "  {}", order.join(" -> "))?;
                    }
                }
                AlgorithmRun::Forest { algorithm, forest } => {
                    writeln!(
                        writer,
                        "{} ({} vertices, {} trees):",
                        algorithm,
                        forest.len(),
                        forest.root_count()
                    )?;
                    for entry in forest.entries() {
                        match &entry.discovered_by {
                            Some((a, b)) => {
                                writeln!(writer, "  {} <- ({}, {})", entry.label, a, b)?
                            }
                            None => writeln!(writer, "  {} (root)", entry.label)?,
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ArenaGraph;
    use crate::traversal::depth_first_forest;

    fn create_test_data() -> ExportData {
        let mut graph = ArenaGraph::new();
        let a = graph.insert_vertex("a").unwrap();
        let b = graph.insert_vertex("b").unwrap();
        graph.insert_edge(a, b).unwrap();
        graph.insert_vertex("c").unwrap();
        let forest = depth_first_forest(&graph);

        ExportData::new(
            "sample.txt",
            3,
            1,
            vec![
                AlgorithmRun::Sequence {
                    algorithm: "bfs".to_string(),
                    start: Some("a".to_string()),
                    order: vec!["a".to_string(), "b".to_string()],
                },
                AlgorithmRun::Forest {
                    algorithm: "dfs-forest".to_string(),
                    forest,
                },
            ],
        )
    }

    #[test]
    fn test_text_export_summary_line() {
        let data = create_test_data();
        let mut output = Vec::new();

        TextExporter.export(&data, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Graph: sample.txt (3 vertices, 1 edges)"));
    }

    #[test]
    fn test_text_export_sequence() {
        let data = create_test_data();
        let mut output = Vec::new();

        TextExporter.export(&data, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("bfs from a:"));
        assert!(text.contains("  a -> b"));
    }

    #[test]
    fn test_text_export_forest() {
        let data = create_test_data();
        let mut output = Vec::new();

        TextExporter.export(&data, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("dfs-forest (3 vertices, 2 trees):"));
        assert!(text.contains("  a (root)"));
        assert!(text.contains("  b <- (a, b)"));
        assert!(text.contains("  c (root)"));
    }

    #[test]
    fn test_text_export_empty_sequence() {
        let data = ExportData::new(
            "empty.txt",
            0,
            0,
            vec![AlgorithmRun::Sequence {
                algorithm: "topo".to_string(),
                start: None,
                order: Vec::new(),
            }],
        );
        let mut output = Vec::new();

        TextExporter.export(&data, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("topo:"));
        assert!(text.contains("(empty)"));
    }
}
