//! Export functionality for traversal results.
//!
//! This module renders the outcome of one or more algorithm runs over a
//! loaded graph in either human-readable text or machine-readable JSON.

pub mod json;
pub mod text;

use crate::traversal::TraversalForest;
use std::io::{self, Write};

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Plain text - human-readable report
    Text,
    /// JSON format - machine-readable, full data
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// The outcome of a single algorithm run.
#[derive(Debug, Clone)]
pub enum AlgorithmRun {
    /// An ordered label sequence (DFS, BFS, topological sort).
    Sequence {
        /// Name of the algorithm that produced the sequence.
        algorithm: String,
        /// Start vertex, if the run was rooted at one.
        start: Option<String>,
        /// Visited labels in output order.
        order: Vec<String>,
    },
    /// A discovery forest (forest-building DFS/BFS).
    Forest {
        /// Name of the algorithm that produced the forest.
        algorithm: String,
        /// The produced forest.
        forest: TraversalForest,
    },
}

impl AlgorithmRun {
    /// Returns the name of the algorithm behind this run.
    pub fn algorithm(&self) -> &str {
        match self {
            AlgorithmRun::Sequence { algorithm, .. } => algorithm,
            AlgorithmRun::Forest { algorithm, .. } => algorithm,
        }
    }
}

/// Data container for export operations.
///
/// Holds the graph summary and every algorithm outcome to be reported.
#[derive(Debug, Clone)]
pub struct ExportData {
    /// Name of the loaded input (file name or "<stdin>").
    pub source: String,
    /// Number of vertices in the loaded graph.
    pub vertex_count: usize,
    /// Number of edges in the loaded graph.
    pub edge_count: usize,
    /// Outcomes of the selected algorithm runs.
    pub runs: Vec<AlgorithmRun>,
}

impl ExportData {
    /// Creates new export data from a graph summary and its runs.
    pub fn new(
        source: impl Into<String>,
        vertex_count: usize,
        edge_count: usize,
        runs: Vec<AlgorithmRun>,
    ) -> Self {
        Self {
            source: source.into(),
            vertex_count,
            edge_count,
            runs,
        }
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(format: ExportFormat, data: &ExportData, writer: &mut W) -> io::Result<()> {
    match format {
        ExportFormat::Text => text::TextExporter.export(data, writer),
        ExportFormat::Json => json::JsonExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ExportFormat, data: &ExportData) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("TEXT".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("yaml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_format_display() {
        assert_eq!(format!("{}", ExportFormat::Text), "text");
        assert_eq!(format!("{}", ExportFormat::Json), "json");
    }

    #[test]
    fn test_algorithm_run_name() {
        let run = AlgorithmRun::Sequence {
            algorithm: "dfs".to_string(),
            start: Some("a".to_string()),
            order: vec!["a".to_string()],
        };
        assert_eq!(run.algorithm(), "dfs");
    }
}
