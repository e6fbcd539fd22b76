//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use ratgraph_core::config::AnalyticsConfig;
use ratgraph_core::error::{RatError, Result};
use ratgraph_core::graph::InteractionGraph;
use ratgraph_core::titles::{self, NoTitles, TitleLookup};
use ratgraph_core::{records, tgf};

/// Extension that marks an input file as a graph export
const EXPORT_EXTENSION: &str = "tgf";

/// Load the graph named by `--input`.
///
/// A `.tgf` file is re-imported as an export; anything else is parsed as
/// interaction records.
pub fn load_input(path: &Path) -> Result<InteractionGraph> {
    let is_export = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(EXPORT_EXTENSION));

    if is_export {
        tgf::load(path)
    } else {
        records::load_graph(path)
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: AnalyticsConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: AnalyticsConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Graph for commands that analyze the input file
    pub fn graph(&self) -> Result<InteractionGraph> {
        let path = self
            .cli
            .input
            .as_deref()
            .ok_or_else(|| RatError::UsageError("--input is required for this command".to_string()))?;

        let graph = load_input(path).inspect_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "failed to load input");
        })?;
        debug!(elapsed = ?self.start.elapsed(), "load_input");
        Ok(graph)
    }

    /// Title source honouring `--no-titles` and the `[titles]` config
    pub fn titles(&self) -> Box<dyn TitleLookup> {
        if self.cli.no_titles {
            Box::new(NoTitles)
        } else {
            titles::lookup_for(&self.config.titles)
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("ratgraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Leaderboards, connectivity and centrality for user/story interaction graphs.");
        println!();
        println!("Run `ratgraph --help` for usage information.");
        Ok(())
    }
}
