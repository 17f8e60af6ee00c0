//! `bibkeep format` command - render fetched-content JSON into entries
//!
//! Reads a batch of fetched-content records (single object or array) from
//! a file or stdin, renders each one as a bibliography block, and writes
//! the assembled document to stdout or a file. CLI metadata overrides apply
//! to every record in the batch.
//!
//! Example usage:
//! - `fetch-pages urls.txt | bibkeep format -o bib.md --topic "Async IO"`
//! - `bibkeep format -i fetched.json -o bib.md --append`

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use chrono::Utc;
use tracing::debug;

use crate::cli::{Cli, FormatArgs, OutputFormat};
use bibkeep_core::config::Config;
use bibkeep_core::document::compose::{compose_document, ComposeOptions};
use bibkeep_core::document::io as doc_io;
use bibkeep_core::entry::{parse_batch, EntryRecord};
use bibkeep_core::error::Result;

/// Execute the format command
pub fn execute(cli: &Cli, args: &FormatArgs) -> Result<()> {
    let raw = read_input(args.input.as_deref())?;
    let mut records = parse_batch(&raw)?;

    debug!(records = records.len(), "parse_batch");

    apply_overrides(&mut records, args);

    let topic = match non_empty(&args.topic) {
        Some(topic) => Some(topic.clone()),
        None => discovered_topic()?,
    };

    let options = ComposeOptions {
        topic,
        generated_at: Some(Utc::now()),
        append: args.append,
    };
    let body = compose_document(&records, &options);

    match &args.output {
        Some(path) => write_output(cli, args, &records, path, &body),
        None => {
            match cli.format {
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "entries": records.len(),
                        "document": body,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Human => print!("{}", body),
            }
            Ok(())
        }
    }
}

fn write_output(
    cli: &Cli,
    args: &FormatArgs,
    records: &[EntryRecord],
    path: &Path,
    body: &str,
) -> Result<()> {
    if args.append {
        doc_io::append_document(path, body)?;
    } else {
        doc_io::write_document(path, body)?;
    }

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "entries": records.len(),
                "path": path,
                "appended": args.append,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                if args.append {
                    eprintln!("Appended to: {}", path.display());
                } else {
                    eprintln!("Wrote: {}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

/// Apply CLI metadata overrides to every record in the batch.
///
/// Overrides beat both staged metadata and extraction; blank values are
/// treated as not given.
fn apply_overrides(records: &mut [EntryRecord], args: &FormatArgs) {
    let authors = args
        .authors
        .as_deref()
        .map(split_authors)
        .filter(|list| !list.is_empty());

    for record in records.iter_mut() {
        if let Some(title) = non_empty(&args.title) {
            record.title = Some(title.clone());
        }
        if let Some(list) = &authors {
            record.authors = Some(list.clone());
        }
        if let Some(date) = non_empty(&args.date) {
            record.date = Some(date.clone());
        }
        if let Some(annotation) = non_empty(&args.annotation) {
            record.annotation = Some(annotation.clone());
        }
    }
}

fn split_authors(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|author| author.trim().to_string())
        .filter(|author| !author.is_empty())
        .collect()
}

fn non_empty(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|s| !s.trim().is_empty())
}

/// Topic fallback from a discovered `bibkeep.toml`
fn discovered_topic() -> Result<Option<String>> {
    let cwd = std::env::current_dir()?;
    Ok(Config::discover(&cwd)?.and_then(|(_, config)| config.default_topic))
}
