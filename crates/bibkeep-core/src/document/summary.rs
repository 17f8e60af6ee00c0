//! Condensed summary of annotated entries

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::document::Document;
use crate::render::FINDINGS_MARKER;

/// Heading line of every summary document
pub const SUMMARY_TITLE: &str = "# Annotated Bibliography Summary";

/// Build the summary of a document's annotated entries.
///
/// Walks entries in document order and keeps citation, URL, and findings
/// text for each one that carries a terminated findings block; previews and
/// unannotated entries are dropped. Returns the summary text and the number
/// of entries in it. A document with no annotated entries still produces a
/// valid summary reporting zero sources.
pub fn summarize(text: &str, generated_at: DateTime<Utc>) -> (String, usize) {
    let doc = Document::parse(text);

    let mut kept: Vec<(&str, &str, &str)> = Vec::new();
    for node in doc.entries() {
        if !node.annotated(text) {
            continue;
        }
        let Some(rest) = node.body(text).strip_prefix(FINDINGS_MARKER) else {
            continue;
        };
        // An unterminated block cannot be bounded; skip it rather than
        // swallowing the preview into the summary
        let Some(terminator) = rest.find("\n\n") else {
            continue;
        };
        kept.push((&node.citation, &node.url, rest[..terminator].trim()));
    }

    let mut out = String::new();
    out.push_str(SUMMARY_TITLE);
    out.push_str("\n\n");
    out.push_str(&format!("*Generated: {}*\n\n", generated_at.format("%Y-%m-%d")));
    out.push_str(&format!("**{} annotated sources**\n\n---\n\n", kept.len()));

    for (citation, url, findings) in &kept {
        out.push_str(&format!("### {}\n{}\n\n{}\n\n---\n\n", citation, url, findings));
    }

    debug!(total = doc.entries().len(), annotated = kept.len(), "summarize");
    (out, kept.len())
}
