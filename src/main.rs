use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use graphwalk::export::{self, AlgorithmRun, ExportData, ExportFormat};
use graphwalk::loader;
use graphwalk::traversal::{
    breadth_first, breadth_first_forest, depth_first, depth_first_forest, topological_sort,
};

#[derive(Parser)]
#[command(name = "graphwalk")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version = "0.1.0")]
#[command(about = "Graph store with classical traversals: DFS, BFS, and topological sort", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run traversal algorithms over an adjacency-list file
    Run {
        /// Path to the adjacency-list file
        #[arg(short, long)]
        input: PathBuf,

        /// Algorithm to run
        #[arg(short, long, value_enum, default_value = "all")]
        algorithm: Algorithm,

        /// Start vertex (defaults to the first vertex; full graph for topo)
        #[arg(short, long)]
        start: Option<String>,

        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Show version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Depth-first search from a start vertex
    Dfs,
    /// Breadth-first search from a start vertex
    Bfs,
    /// Topological sort
    Topo,
    /// Depth-first discovery forest over all components
    DfsForest,
    /// Breadth-first discovery forest over all components
    BfsForest,
    /// Every algorithm above
    All,
}

impl Algorithm {
    fn wants_sequences(self) -> bool {
        matches!(
            self,
            Algorithm::Dfs | Algorithm::Bfs | Algorithm::Topo | Algorithm::All
        )
    }

    fn wants_forests(self) -> bool {
        matches!(
            self,
            Algorithm::DfsForest | Algorithm::BfsForest | Algorithm::All
        )
    }

    fn includes(self, other: Algorithm) -> bool {
        self == other || self == Algorithm::All
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            input,
            algorithm,
            start,
            format,
        }) => {
            let format: ExportFormat = format.parse().map_err(anyhow::Error::msg)?;
            run(&input, algorithm, start.as_deref(), format)
        }
        Some(Commands::Version) => {
            println!("graphwalk v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("GraphWalk - graph store with classical traversals");
            println!("Run 'graphwalk run --input <FILE>' to traverse a graph");
            println!("Run 'graphwalk --help' for more information");
            Ok(())
        }
    }
}

fn run(
    input: &Path,
    algorithm: Algorithm,
    start: Option<&str>,
    format: ExportFormat,
) -> anyhow::Result<()> {
    let mut runs = Vec::new();
    let mut counts = None;

    if algorithm.wants_sequences() {
        let graph = loader::load_directed(input)
            .with_context(|| format!("failed to load {}", input.display()))?;
        counts = Some((graph.vertex_count(), graph.edge_count()));

        // DFS/BFS need a root; default to the first vertex in file order.
        let root = match start {
            Some(label) => Some(label.to_string()),
            None => graph.vertices().next().map(str::to_string),
        };

        if let Some(root) = &root {
            if algorithm.includes(Algorithm::Dfs) {
                let order = depth_first(&graph, root)
                    .with_context(|| format!("depth-first traversal from {root}"))?;
                runs.push(AlgorithmRun::Sequence {
                    algorithm: "dfs".to_string(),
                    start: Some(root.clone()),
                    order,
                });
            }
            if algorithm.includes(Algorithm::Bfs) {
                let order = breadth_first(&graph, root)
                    .with_context(|| format!("breadth-first traversal from {root}"))?;
                runs.push(AlgorithmRun::Sequence {
                    algorithm: "bfs".to_string(),
                    start: Some(root.clone()),
                    order,
                });
            }
        }

        if algorithm.includes(Algorithm::Topo) {
            if graph.has_cycles() {
                eprintln!("warning: graph contains a cycle; the topological order is not valid");
            }
            // An explicit --start restricts the sort to the reachable
            // subgraph; the default covers the whole graph.
            let order = topological_sort(&graph, start).context("topological sort")?;
            runs.push(AlgorithmRun::Sequence {
                algorithm: "topo".to_string(),
                start: start.map(str::to_string),
                order,
            });
        }
    }

    if algorithm.wants_forests() {
        let graph = loader::load_arena(input)
            .with_context(|| format!("failed to load {}", input.display()))?;
        if counts.is_none() {
            counts = Some((graph.vertex_count(), graph.edge_count()));
        }

        if algorithm.includes(Algorithm::DfsForest) {
            runs.push(AlgorithmRun::Forest {
                algorithm: "dfs-forest".to_string(),
                forest: depth_first_forest(&graph),
            });
        }
        if algorithm.includes(Algorithm::BfsForest) {
            runs.push(AlgorithmRun::Forest {
                algorithm: "bfs-forest".to_string(),
                forest: breadth_first_forest(&graph),
            });
        }
    }

    let (vertex_count, edge_count) = counts.unwrap_or((0, 0));
    let source = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());

    let data = ExportData::new(source, vertex_count, edge_count, runs);
    export::export(format, &data, &mut io::stdout()).context("writing report")?;
    Ok(())
}
