//! Entry rendering: one record to one markdown block
//!
//! The block grammar is what every other operation parses back:
//!
//! ```text
//! ### <citation line>
//! **URL:** <url>
//!
//! **Key Findings:**        (only when annotated)
//! <annotation>
//!
//! <details><summary>Content preview (click to expand)</summary>
//!
//! (code-fenced preview of the raw content)
//! </details>
//! ```

use crate::entry::{extract, EntryRecord};
use crate::text::{char_prefix, exceeds_chars};

/// Marker line that opens a findings block
pub const FINDINGS_MARKER: &str = "**Key Findings:**";

/// Citation shown when no metadata is provided or extractable
pub const UNAVAILABLE_CITATION: &str = "*(metadata unavailable)*";

/// Appended to a preview that was cut at the character limit
pub const TRUNCATION_MARKER: &str = "\n\n[...truncated...]";

/// Characters of raw content kept in the preview
pub const PREVIEW_MAX_CHARS: usize = 3000;

/// Titles longer than this are clipped
const TITLE_MAX_CHARS: usize = 150;
/// Characters kept when a title is clipped, before the ellipsis
const TITLE_CLIP_CHARS: usize = 147;

/// Authors listed by name before collapsing to "et al."
const MAX_NAMED_AUTHORS: usize = 3;

/// Render one entry as a markdown block.
///
/// Caller-provided metadata wins; heuristics only run when title, authors,
/// and date are all absent. The trailing newline is part of the block.
pub fn render_entry(record: &EntryRecord) -> String {
    let meta = resolve_metadata(record);
    let citation = citation_line(&meta);

    let mut block = format!("### {}\n**URL:** {}\n\n", citation, record.url);

    if let Some(annotation) = &record.annotation {
        block.push_str(&findings_block(annotation));
    }

    let preview = content_preview(&record.content);
    block.push_str("<details><summary>Content preview (click to expand)</summary>\n\n");
    block.push_str("```\n");
    block.push_str(&preview);
    block.push_str("\n```\n</details>\n");

    block
}

/// A complete findings block: marker line, normalized text, blank-line
/// terminator. Empty text collapses to a bare marker line.
pub fn findings_block(annotation: &str) -> String {
    let text = normalize_findings(annotation);
    if text.is_empty() {
        format!("{}\n\n", FINDINGS_MARKER)
    } else {
        format!("{}\n{}\n\n", FINDINGS_MARKER, text)
    }
}

/// Normalize annotation text so the written block stays well formed.
///
/// The findings block ends at the first blank line, so interior blank lines
/// would silently truncate it on the next read. Trims the text and drops
/// blank lines; applying an unchanged annotation twice is a no-op.
pub fn normalize_findings(text: &str) -> String {
    text.trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

struct ResolvedMeta {
    title: Option<String>,
    authors: Vec<String>,
    date: Option<String>,
    source: Option<String>,
}

/// Use provided metadata when any of title/authors/date is present,
/// otherwise fall back to extraction. Source always falls back to the URL
/// host when not provided.
fn resolve_metadata(record: &EntryRecord) -> ResolvedMeta {
    let provided_authors = record.authors.clone().unwrap_or_default();
    let provided_any =
        record.title.is_some() || !provided_authors.is_empty() || record.date.is_some();

    if provided_any {
        ResolvedMeta {
            title: record.title.clone(),
            authors: provided_authors,
            date: record.date.clone(),
            source: record
                .source
                .clone()
                .or_else(|| extract::source_host(&record.url)),
        }
    } else {
        let meta = extract::extract_metadata(&record.content, &record.url);
        ResolvedMeta {
            title: meta.title,
            authors: meta.authors,
            date: meta.date,
            source: record.source.clone().or(meta.source),
        }
    }
}

/// Citation parts in fixed order: authors, (year), **title**, *source*
fn citation_line(meta: &ResolvedMeta) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !meta.authors.is_empty() {
        parts.push(author_list(&meta.authors));
    }
    if let Some(date) = &meta.date {
        parts.push(format!("({})", date_year(date)));
    }
    if let Some(title) = &meta.title {
        parts.push(format!("**{}**", clip_title(title)));
    }
    if let Some(source) = &meta.source {
        parts.push(format!("*{}*", source));
    }

    if parts.is_empty() {
        UNAVAILABLE_CITATION.to_string()
    } else {
        parts.join(". ")
    }
}

fn author_list(authors: &[String]) -> String {
    let mut listed = authors
        .iter()
        .take(MAX_NAMED_AUTHORS)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if authors.len() > MAX_NAMED_AUTHORS {
        listed.push_str(" et al.");
    }
    listed
}

/// Year as the first four characters of whatever date string we have
fn date_year(date: &str) -> &str {
    char_prefix(date, 4)
}

fn clip_title(title: &str) -> String {
    let title = title.trim();
    if exceeds_chars(title, TITLE_MAX_CHARS) {
        format!("{}...", char_prefix(title, TITLE_CLIP_CHARS))
    } else {
        title.to_string()
    }
}

/// Preview of raw content: first `PREVIEW_MAX_CHARS` characters, trimmed,
/// with a visible marker when content was cut
fn content_preview(content: &str) -> String {
    let preview = char_prefix(content, PREVIEW_MAX_CHARS).trim();
    if exceeds_chars(content, PREVIEW_MAX_CHARS) {
        format!("{}{}", preview, TRUNCATION_MARKER)
    } else {
        preview.to_string()
    }
}
