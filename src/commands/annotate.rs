//! `bibkeep annotate` command - add or replace one entry's key findings
//!
//! The entry is located by URL substring; the first match in document order
//! wins. The file is rewritten in place with only the findings block of the
//! matched entry changed.

use std::env;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use bibkeep_core::config::resolve_bib_file;
use bibkeep_core::document::annotate::upsert_annotation;
use bibkeep_core::document::io as doc_io;
use bibkeep_core::error::Result;

/// Execute the annotate command
pub fn execute(cli: &Cli, url_pattern: &str, annotation: &str) -> Result<()> {
    let cwd = env::current_dir()?;
    let path = resolve_bib_file(cli.file.as_deref(), &cwd)?;

    let text = doc_io::read_document(&path)?;
    let updated = upsert_annotation(&text, url_pattern, annotation)?;
    doc_io::write_document(&path, &updated)?;

    debug!(path = %path.display(), pattern = url_pattern, "annotate");

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path,
                "url_pattern": url_pattern,
                "updated": true,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Updated annotation for: {}", url_pattern);
            }
        }
    }

    Ok(())
}
