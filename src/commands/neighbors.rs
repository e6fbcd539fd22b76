//! `ratgraph neighbors <vertex>` - successors and predecessors

use serde_json::json;

use super::print_json;
use crate::cli::{Cli, OutputFormat};
use ratgraph_core::error::Result;
use ratgraph_core::graph::InteractionGraph;

pub fn execute(cli: &Cli, graph: &InteractionGraph, vertex: &str) -> Result<()> {
    let successors = graph.successors(vertex)?;
    let predecessors = graph.predecessors(vertex);

    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "vertex": vertex,
            "successors": successors,
            "predecessors": predecessors,
        }))?,
        OutputFormat::Human => {
            println!("successors:   {}", successors.join(", "));
            println!("predecessors: {}", predecessors.join(", "));
        }
    }
    Ok(())
}
