//! `bibkeep summary` command - condensed digest of annotated entries
//!
//! Builds a new document holding only the citation, URL, and findings
//! of each annotated entry, dropping the content previews.

use std::env;
use std::path::Path;

use chrono::Utc;

use crate::cli::{Cli, OutputFormat};
use bibkeep_core::config::resolve_bib_file;
use bibkeep_core::document::io as doc_io;
use bibkeep_core::document::summary::summarize;
use bibkeep_core::error::Result;

/// Execute the summary command
pub fn execute(cli: &Cli, output: Option<&Path>) -> Result<()> {
    let cwd = env::current_dir()?;
    let path = resolve_bib_file(cli.file.as_deref(), &cwd)?;
    let text = doc_io::read_document(&path)?;

    let (summary, count) = summarize(&text, Utc::now());
    tracing::debug!(annotated = count, "summary");

    match output {
        Some(out_path) => {
            doc_io::write_document(out_path, &summary)?;
            match cli.format {
                OutputFormat::Json => {
                    let envelope = serde_json::json!({
                        "path": out_path.display().to_string(),
                        "annotated": count,
                    });
                    println!("{}", serde_json::to_string_pretty(&envelope)?);
                }
                OutputFormat::Human => {
                    if !cli.quiet {
                        eprintln!("Summary written to: {}", out_path.display());
                    }
                }
            }
        }
        None => match cli.format {
            OutputFormat::Json => {
                let envelope = serde_json::json!({
                    "annotated": count,
                    "document": summary,
                });
                println!("{}", serde_json::to_string_pretty(&envelope)?);
            }
            OutputFormat::Human => {
                print!("{summary}");
            }
        },
    }

    Ok(())
}
