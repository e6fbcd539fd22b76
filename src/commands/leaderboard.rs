//! `ratgraph leaderboard <users|stories>` - degree ranking

use serde::Serialize;

use super::{print_json, VertexView};
use crate::cli::{Cli, OutputFormat};
use ratgraph_core::analytics::{degree_leaderboard, VertexClass};
use ratgraph_core::error::Result;
use ratgraph_core::graph::InteractionGraph;
use ratgraph_core::titles::TitleLookup;

#[derive(Debug, Serialize)]
struct RankView {
    rank: usize,
    score: usize,
    vertices: Vec<VertexView>,
}

pub fn execute(
    cli: &Cli,
    graph: &InteractionGraph,
    class: VertexClass,
    top: usize,
    titles: &dyn TitleLookup,
) -> Result<()> {
    let board = degree_leaderboard(graph, class, top)?;
    let ranks: Vec<RankView> = board
        .iter()
        .map(|entry| RankView {
            rank: entry.rank,
            score: entry.score,
            vertices: entry
                .vertices
                .iter()
                .map(|v| VertexView::new(v, titles))
                .collect(),
        })
        .collect();

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "class": class,
            "ranks": ranks,
        }))?,
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Top {} {} by degree", top, class.plural());
            }
            for rank in &ranks {
                println!("{}. score {}", rank.rank, rank.score);
                for vertex in &rank.vertices {
                    println!("   {}", vertex.label());
                }
            }
        }
    }
    Ok(())
}
