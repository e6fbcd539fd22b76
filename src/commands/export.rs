//! `ratgraph export <output>` - write Trivial Graph Format

use std::path::Path;

use serde_json::json;

use super::print_json;
use crate::cli::{Cli, OutputFormat};
use ratgraph_core::error::Result;
use ratgraph_core::graph::InteractionGraph;
use ratgraph_core::tgf;

pub fn execute(cli: &Cli, graph: &InteractionGraph, output: &Path) -> Result<()> {
    tgf::save(graph, output)?;

    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "path": output.display().to_string(),
            "vertices": graph.vertex_count(),
            "arcs": graph.arc_count(),
        }))?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Exported {} vertices and {} arcs to {}",
                    graph.vertex_count(),
                    graph.arc_count(),
                    output.display()
                );
            }
        }
    }
    Ok(())
}
