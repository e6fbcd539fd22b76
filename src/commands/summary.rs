//! `ratgraph summary` - graph counts

use serde::Serialize;

use super::print_json;
use crate::cli::{Cli, OutputFormat};
use ratgraph_core::analytics::{stories, users};
use ratgraph_core::error::Result;
use ratgraph_core::graph::InteractionGraph;

#[derive(Debug, Serialize)]
struct Summary {
    vertices: usize,
    arcs: usize,
    users: usize,
    stories: usize,
    undirected: bool,
}

pub fn execute(cli: &Cli, graph: &InteractionGraph) -> Result<()> {
    let summary = Summary {
        vertices: graph.vertex_count(),
        arcs: graph.arc_count(),
        users: users(graph).len(),
        stories: stories(graph).len(),
        undirected: graph.is_undirected(),
    };

    match cli.format {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Human => {
            println!("vertices:   {}", summary.vertices);
            println!("arcs:       {}", summary.arcs);
            println!("users:      {}", summary.users);
            println!("stories:    {}", summary.stories);
            println!(
                "undirected: {}",
                if summary.undirected { "yes" } else { "no" }
            );
        }
    }
    Ok(())
}
