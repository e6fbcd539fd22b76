//! `ratgraph find <origin> <destination>` - targeted breadth-first expansion

use serde_json::json;

use super::print_json;
use crate::cli::{Cli, OutputFormat};
use ratgraph_core::error::Result;
use ratgraph_core::graph::{bfs_find, shortest_hops, InteractionGraph};

pub fn execute(cli: &Cli, graph: &InteractionGraph, origin: &str, destination: &str) -> Result<()> {
    let dequeued = bfs_find(graph, origin, destination)?;
    let hops = shortest_hops(graph, origin, destination)?;

    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "origin": origin,
            "destination": destination,
            "dequeued": dequeued,
            "hops": hops,
        }))?,
        OutputFormat::Human => {
            println!("{}", dequeued.join(" "));
            if !cli.quiet {
                let hops = hops.map_or_else(|| "unreachable".to_string(), |h| h.to_string());
                println!("dequeued {}, hops {}", dequeued.len(), hops);
            }
        }
    }
    Ok(())
}
