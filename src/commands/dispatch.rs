//! Command dispatch for bibkeep

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use bibkeep_core::error::Result;

use super::{annotate, format, list, summary};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let result = match &cli.command {
        Commands::Format(args) => format::execute(cli, args),
        Commands::Annotate {
            url_pattern,
            annotation,
        } => annotate::execute(cli, url_pattern, annotation),
        Commands::List { unannotated } => list::execute(cli, *unannotated),
        Commands::Summary { output } => summary::execute(cli, output.as_deref()),
    };

    debug!(elapsed = ?start.elapsed(), "execute_command");

    result
}
