//! `bibkeep list` command - entries with their annotation status
//!
//! One numbered line per entry with a status glyph, citation, and URL.
//! Numbering follows document order and is stable under `--unannotated`
//! filtering so the numbers can be used as references across runs.

use std::env;

use crate::cli::{Cli, OutputFormat};
use bibkeep_core::config::resolve_bib_file;
use bibkeep_core::document::io as doc_io;
use bibkeep_core::document::Document;
use bibkeep_core::error::Result;
use bibkeep_core::text::{char_prefix, exceeds_chars};

/// Characters of citation text shown before clipping
const CITATION_COLUMN: usize = 70;
/// Characters of URL shown
const URL_COLUMN: usize = 80;

struct Row<'a> {
    index: usize,
    citation: &'a str,
    url: &'a str,
    annotated: bool,
}

/// Execute the list command
pub fn execute(cli: &Cli, unannotated_only: bool) -> Result<()> {
    let cwd = env::current_dir()?;
    let path = resolve_bib_file(cli.file.as_deref(), &cwd)?;
    let text = doc_io::read_document(&path)?;
    let doc = Document::parse(&text);

    let rows: Vec<Row> = doc
        .entries()
        .iter()
        .enumerate()
        .map(|(i, node)| Row {
            index: i + 1,
            citation: &node.citation,
            url: &node.url,
            annotated: node.annotated(&text),
        })
        .filter(|row| !(unannotated_only && row.annotated))
        .collect();

    match cli.format {
        OutputFormat::Json => output_json(&rows)?,
        OutputFormat::Human => {
            if rows.is_empty() {
                if !cli.quiet {
                    println!("No entries found");
                }
            } else {
                output_human(&rows);
            }
        }
    }

    Ok(())
}

fn output_human(rows: &[Row]) {
    for row in rows {
        let status = if row.annotated { "✓" } else { "○" };
        println!(
            "{}. [{}] {}",
            row.index,
            status,
            clip_citation(row.citation)
        );
        println!("   {}", char_prefix(row.url, URL_COLUMN));
    }
}

fn output_json(rows: &[Row]) -> Result<()> {
    let output: Vec<_> = rows
        .iter()
        .map(|row| {
            serde_json::json!({
                "index": row.index,
                "citation": row.citation,
                "url": row.url,
                "annotated": row.annotated,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn clip_citation(citation: &str) -> String {
    if exceeds_chars(citation, CITATION_COLUMN) {
        format!("{}...", char_prefix(citation, CITATION_COLUMN))
    } else {
        citation.to_string()
    }
}
