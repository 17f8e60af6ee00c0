//! Findings-block upsert on a parsed document

use tracing::debug;

use crate::document::Document;
use crate::error::{BibError, Result};
use crate::render::{findings_block, FINDINGS_MARKER};

/// Insert or replace the findings block of the first entry whose URL
/// contains `pattern`.
///
/// Returns the rewritten document text; every byte outside the matched
/// entry's findings block is carried over unchanged. An existing block is
/// replaced from its marker line through its terminating blank line; a block
/// that never terminates inside the entry is refused rather than guessed at.
pub fn upsert_annotation(text: &str, pattern: &str, annotation: &str) -> Result<String> {
    let doc = Document::parse(text);
    let node = doc
        .find_entry(pattern)
        .ok_or_else(|| BibError::EntryNotFound {
            pattern: pattern.to_string(),
        })?;

    let block = findings_block(annotation);
    let body = node.body(text);

    let replace_end = match body.strip_prefix(FINDINGS_MARKER) {
        Some(rest) => {
            let Some(terminator) = rest.find("\n\n") else {
                return Err(BibError::MalformedDocument {
                    reason: format!(
                        "findings block of entry '{}' has no terminating blank line",
                        node.url
                    ),
                });
            };
            debug!(url = %node.url, "replace_findings");
            node.body_start + FINDINGS_MARKER.len() + terminator + 2
        }
        None => {
            debug!(url = %node.url, "insert_findings");
            node.body_start
        }
    };

    let mut out = String::with_capacity(text.len() + block.len());
    out.push_str(&text[..node.body_start]);
    out.push_str(&block);
    out.push_str(&text[replace_end..]);
    Ok(out)
}
