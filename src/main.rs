//! Ratgraph - analytics over bipartite user/story interaction graphs
//!
//! Builds a graph from interaction records and reports degree leaderboards,
//! connectivity and centrality for users and stories.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use ratgraph_core::error::{ExitCode as RatExitCode, RatError};
use ratgraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();
    let args: Vec<String> = std::env::args().collect();

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version output stay plain text
            if !wants_json(args.get(1..).unwrap_or_default()) || is_informational(err.kind()) {
                err.exit();
            }
            let failure = parse_failure(&err);
            eprintln!("{}", failure.to_json());
            return exit_with(failure.exit_code());
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(RatExitCode::Success),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            exit_with(e.exit_code())
        }
    }
}

fn exit_with(code: RatExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

fn is_informational(kind: ErrorKind) -> bool {
    matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Map a clap rejection onto the error model so it can be reported as JSON.
fn parse_failure(err: &clap::Error) -> RatError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => RatError::UsageError(err.to_string()),
        _ => RatError::Other(err.to_string()),
    }
}

/// Scan raw arguments for a JSON format request. Needed when clap rejects the
/// command line before `Cli::format` is available.
fn wants_json(args: &[String]) -> bool {
    args.iter().enumerate().any(|(i, arg)| {
        arg == "--format=json"
            || (arg == "--format" && args.get(i + 1).is_some_and(|next| next == "json"))
    })
}
