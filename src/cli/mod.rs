//! CLI argument parsing for ratgraph
//!
//! Global flags: --input, --config, --format, --quiet, --verbose,
//! --log-level, --log-json, --no-titles

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use parse::{parse_distance, parse_format, parse_vertex_class};
use ratgraph_core::analytics::{DistanceMetric, VertexClass};
pub use ratgraph_core::format::OutputFormat;

/// Ratgraph - analytics over bipartite user/story interaction graphs
#[derive(Parser, Debug)]
#[command(name = "ratgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Interaction record file, or a `.tgf` export to re-import
    #[arg(long, short, global = true, env = "RATGRAPH_INPUT")]
    pub input: Option<PathBuf>,

    /// Analytics config file (defaults to ./ratgraph.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "ratgraph_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Skip network title lookups; titles render empty
    #[arg(long, global = true)]
    pub no_titles: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Vertex, arc and class counts
    Summary,

    /// Print every vertex and its adjacency row
    Show,

    /// Write the graph in Trivial Graph Format
    Export {
        /// Destination file
        output: PathBuf,
    },

    /// Rank users or stories by degree
    Leaderboard {
        /// users or stories
        #[arg(value_parser = parse_vertex_class)]
        class: VertexClass,

        /// Number of distinct scores to show (defaults from config)
        #[arg(long, short = 'k')]
        top: Option<usize>,
    },

    /// Find the user or story with the largest depth-first reach
    Connected {
        /// users or stories
        #[arg(value_parser = parse_vertex_class)]
        class: VertexClass,
    },

    /// Find the user or story with the smallest distance sum
    Central {
        /// users or stories
        #[arg(value_parser = parse_vertex_class)]
        class: VertexClass,

        /// dequeue-count or hops (defaults from config)
        #[arg(long, value_parser = parse_distance)]
        distance: Option<DistanceMetric>,
    },

    /// Successors and predecessors of a vertex
    Neighbors {
        vertex: String,
    },

    /// Visit order of a traversal from a vertex
    Traverse {
        start: String,

        #[arg(long, value_enum, default_value_t = TraversalOrder::Bfs)]
        order: TraversalOrder,
    },

    /// Breadth-first expansion from origin until destination is dequeued
    Find {
        origin: String,
        destination: String,
    },

    /// Look up a single story title
    Title {
        story_id: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraversalOrder {
    Bfs,
    Dfs,
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraversalOrder::Bfs => write!(f, "bfs"),
            TraversalOrder::Dfs => write!(f, "dfs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ratgraph",
            "leaderboard",
            "stories",
            "--top",
            "3",
            "--format",
            "json",
            "--input",
            "records.csv",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.input, Some(PathBuf::from("records.csv")));
        match cli.command {
            Some(Commands::Leaderboard { class, top }) => {
                assert_eq!(class, VertexClass::Story);
                assert_eq!(top, Some(3));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bad_class_rejected() {
        assert!(Cli::try_parse_from(["ratgraph", "connected", "edges"]).is_err());
    }

    #[test]
    fn test_traverse_defaults_to_bfs() {
        let cli = Cli::try_parse_from(["ratgraph", "traverse", "U1"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Traverse {
                order: TraversalOrder::Bfs,
                ..
            })
        ));
    }
}
