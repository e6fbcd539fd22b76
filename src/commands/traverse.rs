//! `ratgraph traverse <start>` - BFS or DFS visit order

use serde_json::json;

use super::print_json;
use crate::cli::{Cli, OutputFormat, TraversalOrder};
use ratgraph_core::error::Result;
use ratgraph_core::graph::{bfs, dfs, InteractionGraph};

pub fn execute(cli: &Cli, graph: &InteractionGraph, start: &str, order: TraversalOrder) -> Result<()> {
    let visited = match order {
        TraversalOrder::Bfs => bfs(graph, start)?,
        TraversalOrder::Dfs => dfs(graph, start)?,
    };
    if visited.is_empty() {
        tracing::warn!(vertex = start, "start vertex not in graph");
    }

    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "start": start,
            "order": order.to_string(),
            "visited": visited,
        }))?,
        OutputFormat::Human => {
            for vertex in &visited {
                println!("{}", vertex);
            }
        }
    }
    Ok(())
}
