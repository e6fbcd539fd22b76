//! `ratgraph show` - print the graph

use serde_json::json;

use super::print_json;
use crate::cli::{Cli, OutputFormat};
use ratgraph_core::error::Result;
use ratgraph_core::graph::InteractionGraph;

pub fn execute(cli: &Cli, graph: &InteractionGraph) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let rows: Vec<_> = graph
                .rows()
                .map(|(vertex, row)| json!({ "vertex": vertex, "successors": row }))
                .collect();
            print_json(&json!({
                "vertices": graph.vertices(),
                "rows": rows,
            }))?;
        }
        OutputFormat::Human => println!("{}", graph),
    }
    Ok(())
}
