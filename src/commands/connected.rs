//! `ratgraph connected <users|stories>` - largest depth-first reach

use super::{print_json, ScanView};
use crate::cli::{Cli, OutputFormat};
use ratgraph_core::analytics::{most_connected, VertexClass};
use ratgraph_core::error::Result;
use ratgraph_core::graph::InteractionGraph;
use ratgraph_core::titles::TitleLookup;

pub fn execute(
    cli: &Cli,
    graph: &InteractionGraph,
    class: VertexClass,
    titles: &dyn TitleLookup,
) -> Result<()> {
    let scan = most_connected(graph, class)?;
    let view = ScanView::new(class, &scan, titles);

    match cli.format {
        OutputFormat::Json => print_json(&view)?,
        OutputFormat::Human => {
            if !cli.quiet {
                for step in &view.improvements {
                    println!("{} reaches {}", step.vertex.label(), step.score);
                }
            }
            match &view.best {
                Some(best) => println!(
                    "most connected {}: {} (reaches {})",
                    class,
                    best.vertex.label(),
                    best.score
                ),
                None => println!("no {} in graph", class.plural()),
            }
        }
    }
    Ok(())
}
