//! Command dispatch logic for ratgraph

use std::time::Instant;

use crate::cli::Cli;
use ratgraph_core::config::AnalyticsConfig;
use ratgraph_core::error::Result;
use tracing::debug;

mod command;
mod commands;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = AnalyticsConfig::discover(cli.config.as_deref(), &cwd)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
