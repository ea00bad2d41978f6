//! CLI entry point for the `rgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use relation_graph::cli::commands;
use relation_graph::engine::RelationProperty;
use relation_graph::graph::{TraversalOrder, TraversalStyle};
use relation_graph::types::VertexId;
use relation_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "rgraph",
    about = "Relation analysis and deterministic traversal of directed graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show counts, roots and every relation property
    Info {
        /// Path to the graph file (.json or text edge list)
        file: PathBuf,
    },
    /// List root vertices
    Roots {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Check whether the graph is reflexive
    Reflexive {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Check whether the graph is symmetric
    Symmetric {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Check whether the graph is transitive
    Transitive {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Check whether the graph is antisymmetric
    Antisymmetric {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Check whether the graph is an equivalence relation
    Equivalence {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Compute the equivalence class of a vertex
    Class {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex label
        vertex: VertexId,
    },
    /// List every equivalence class
    Classes {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Root-seeded search: bfs or dfs
    Search {
        /// Path to the graph file
        file: PathBuf,
        /// Search order: bfs or dfs
        order: String,
        /// Use the recursive implementation
        #[arg(long)]
        recursive: bool,
    },
    /// Export the graph as JSON
    Export {
        /// Path to the graph file
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Roots { file } => commands::cmd_roots(&file, json),
        Commands::Reflexive { file } => {
            commands::cmd_check(&file, RelationProperty::Reflexive, json)
        }
        Commands::Symmetric { file } => {
            commands::cmd_check(&file, RelationProperty::Symmetric, json)
        }
        Commands::Transitive { file } => {
            commands::cmd_check(&file, RelationProperty::Transitive, json)
        }
        Commands::Antisymmetric { file } => {
            commands::cmd_check(&file, RelationProperty::Antisymmetric, json)
        }
        Commands::Equivalence { file } => {
            commands::cmd_check(&file, RelationProperty::Equivalence, json)
        }
        Commands::Class { file, vertex } => commands::cmd_class(&file, vertex, json),
        Commands::Classes { file } => commands::cmd_classes(&file, json),
        Commands::Search {
            file,
            order,
            recursive,
        } => {
            let order = match TraversalOrder::from_name(&order) {
                Some(o) => o,
                None => {
                    eprintln!("Invalid search order: {}", order);
                    process::exit(3);
                }
            };
            let style = if recursive {
                TraversalStyle::Recursive
            } else {
                TraversalStyle::Iterative
            };
            commands::cmd_search(&file, order, style, json)
        }
        Commands::Export { file, pretty } => commands::cmd_export(&file, pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } | GraphError::Json(_) => 2,
            GraphError::UnknownVertex(_) => 4,
            GraphError::RecursionLimit { .. } => 5,
        };
        process::exit(code);
    }
}
