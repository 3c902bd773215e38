//! JSON export implementation.
//!
//! Exports traversal results in JSON format for machine-readable output.

use super::{AlgorithmRun, ExportData, Exporter};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Serializable forest entry for JSON output.
#[derive(Serialize)]
struct JsonForestEntry {
    vertex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    discovered_by: Option<(String, String)>,
}

/// Serializable algorithm run for JSON output.
#[derive(Serialize)]
struct JsonRun {
    algorithm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    forest: Option<Vec<JsonForestEntry>>,
}

/// Graph summary for JSON output.
#[derive(Serialize)]
struct JsonGraph {
    source: String,
    vertices: usize,
    edges: usize,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport {
    graph: JsonGraph,
    runs: Vec<JsonRun>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let runs: Vec<JsonRun> = data
            .runs
            .iter()
            .map(|run| match run {
                AlgorithmRun::Sequence {
                    algorithm,
                    start,
                    order,
                } => JsonRun {
                    algorithm: algorithm.clone(),
                    start: start.clone(),
                    order: Some(order.clone()),
                    forest: None,
                },
                AlgorithmRun::Forest { algorithm, forest } => JsonRun {
                    algorithm: algorithm.clone(),
                    start: None,
                    order: None,
                    forest: Some(
                        forest
                            .entries()
                            .map(|e| JsonForestEntry {
                                vertex: e.label.clone(),
                                discovered_by: e.discovered_by.clone(),
                            })
                            .collect(),
                    ),
                },
            })
            .collect();

        let export = JsonExport {
            graph: JsonGraph {
                source: data.source.clone(),
                vertices: data.vertex_count,
                edges: data.edge_count,
            },
            runs,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
