//! `ratgraph central <users|stories>` - smallest distance sum

use super::{print_json, ScanView};
use crate::cli::{Cli, OutputFormat};
use ratgraph_core::analytics::{most_central, DistanceMetric, VertexClass};
use ratgraph_core::error::Result;
use ratgraph_core::graph::InteractionGraph;
use ratgraph_core::titles::TitleLookup;

pub fn execute(
    cli: &Cli,
    graph: &InteractionGraph,
    class: VertexClass,
    metric: DistanceMetric,
    titles: &dyn TitleLookup,
) -> Result<()> {
    let scan = most_central(graph, class, metric)?;
    let view = ScanView::new(class, &scan, titles);

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "distance": metric,
            "scan": view,
        }))?,
        OutputFormat::Human => {
            if !cli.quiet {
                for step in &view.improvements {
                    println!("{} distance sum {}", step.vertex.label(), step.score);
                }
            }
            match &view.best {
                Some(best) => println!(
                    "most central {} ({}): {} (distance sum {})",
                    class,
                    metric,
                    best.vertex.label(),
                    best.score
                ),
                None => println!("no {} in graph", class.plural()),
            }
        }
    }
    Ok(())
}
