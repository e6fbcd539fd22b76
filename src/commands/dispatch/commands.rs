//! Routing from parsed subcommands to their handlers

use crate::cli::{Commands, TraversalOrder};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{
    central, connected, export, find, leaderboard, neighbors, show, summary, title, traverse,
};
use ratgraph_core::analytics::{DistanceMetric, VertexClass};
use ratgraph_core::bail_usage;
use ratgraph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Summary => summary::execute(ctx.cli, &ctx.graph()?),
            Commands::Show => show::execute(ctx.cli, &ctx.graph()?),
            Commands::Export { output } => export::execute(ctx.cli, &ctx.graph()?, output),
            Commands::Leaderboard { class, top } => execute_leaderboard(ctx, *class, *top),
            Commands::Connected { class } => {
                connected::execute(ctx.cli, &ctx.graph()?, *class, ctx.titles().as_ref())
            }
            Commands::Central { class, distance } => execute_central(ctx, *class, *distance),
            Commands::Neighbors { vertex } => neighbors::execute(ctx.cli, &ctx.graph()?, vertex),
            Commands::Traverse { start, order } => execute_traverse(ctx, start, *order),
            Commands::Find {
                origin,
                destination,
            } => find::execute(ctx.cli, &ctx.graph()?, origin, destination),
            Commands::Title { story_id } => title::execute(ctx.cli, ctx.titles().as_ref(), story_id),
        }
    }
}

fn execute_leaderboard(ctx: &CommandContext, class: VertexClass, top: Option<usize>) -> Result<()> {
    let top = match (top, class) {
        (Some(0), _) => bail_usage!("--top must be at least 1"),
        (Some(k), _) => k,
        (None, VertexClass::User) => ctx.config.leaderboard.user_top,
        (None, VertexClass::Story) => ctx.config.leaderboard.story_top,
    };
    let graph = ctx.graph()?;
    leaderboard::execute(ctx.cli, &graph, class, top, ctx.titles().as_ref())
}

fn execute_central(
    ctx: &CommandContext,
    class: VertexClass,
    distance: Option<DistanceMetric>,
) -> Result<()> {
    let metric = distance.unwrap_or(ctx.config.centrality.distance);
    let graph = ctx.graph()?;
    central::execute(ctx.cli, &graph, class, metric, ctx.titles().as_ref())
}

fn execute_traverse(ctx: &CommandContext, start: &str, order: TraversalOrder) -> Result<()> {
    let graph = ctx.graph()?;
    traverse::execute(ctx.cli, &graph, start, order)
}
