//! Document model for bibliography files
//!
//! A bibliography is flat markdown: entry blocks separated by horizontal
//! rules, mixed with arbitrary surrounding prose. One forward scan turns the
//! raw text into an ordered list of entry nodes carrying byte spans, and
//! every operation (lookup, annotate, list, summarize) works over those
//! nodes so they all agree on where an entry begins and ends.
//!
//! An entry starts at a line-start `### ` heading whose next line starts
//! with `**URL:** `; nothing else opens an entry, and an entry's body runs
//! to the next entry start or the end of the document. Body text that
//! reproduces that two-line sequence outside a rendered entry is not
//! supported.

pub mod annotate;
pub mod compose;
pub mod io;
pub mod summary;

use tracing::debug;

use crate::render::FINDINGS_MARKER;

/// Prefix of an entry's citation heading line
pub const HEADER_PREFIX: &str = "### ";
/// Prefix of the line naming an entry's source URL
pub const URL_PREFIX: &str = "**URL:** ";

/// One located entry inside a document.
///
/// Offsets are byte positions into the parsed text, always on line
/// boundaries, so splicing around a node can never tear a line apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryNode {
    /// Citation text from the heading line (without the `### ` prefix)
    pub citation: String,
    /// Value of the URL line (everything after `**URL:** `)
    pub url: String,
    /// Offset of the heading line
    pub header_start: usize,
    /// Offset where the body begins: past the blank line that closes the
    /// header, or directly past the URL line when that blank line is missing
    pub body_start: usize,
    /// Offset where the body ends (next entry's heading or end of text)
    pub body_end: usize,
    /// Whether a blank line followed the URL line; only well-formed entries
    /// can be annotated
    pub well_formed: bool,
}

impl EntryNode {
    /// Body text slice for this entry
    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.body_start..self.body_end]
    }

    /// Whether this entry opens with a findings block
    pub fn annotated(&self, text: &str) -> bool {
        self.well_formed && self.body(text).starts_with(FINDINGS_MARKER)
    }
}

/// A bibliography document parsed into entry nodes
#[derive(Debug, Clone)]
pub struct Document<'a> {
    text: &'a str,
    nodes: Vec<EntryNode>,
}

impl<'a> Document<'a> {
    /// Parse a document in a single forward pass
    pub fn parse(text: &'a str) -> Self {
        let nodes = scan_entries(text);
        debug!(entries = nodes.len(), bytes = text.len(), "document_parsed");
        Document { text, nodes }
    }

    /// The raw text this document was parsed from
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Entry nodes in positional order
    pub fn entries(&self) -> &[EntryNode] {
        &self.nodes
    }

    /// Find the first entry whose URL line contains `pattern` literally.
    ///
    /// Substring matching lets callers pass partial URLs. When several
    /// entries share a URL, the first occurrence is the canonical one; an
    /// entry missing the blank line after its URL line is never returned
    /// because it cannot be edited safely.
    pub fn find_entry(&self, pattern: &str) -> Option<&EntryNode> {
        self.nodes
            .iter()
            .find(|node| node.well_formed && node.url.contains(pattern))
    }
}

/// Line starts and contents, CR-tolerant, byte offsets preserved
fn line_spans(text: &str) -> Vec<(usize, &str)> {
    let mut spans = Vec::new();
    let mut offset = 0;
    for raw in text.split_inclusive('\n') {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        spans.push((offset, line));
        offset += raw.len();
    }
    spans
}

fn scan_entries(text: &str) -> Vec<EntryNode> {
    let lines = line_spans(text);
    let mut nodes: Vec<EntryNode> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let (header_start, line) = lines[i];
        let Some(citation) = line.strip_prefix(HEADER_PREFIX) else {
            i += 1;
            continue;
        };
        let Some(url) = lines
            .get(i + 1)
            .and_then(|&(_, next)| next.strip_prefix(URL_PREFIX))
        else {
            i += 1;
            continue;
        };

        let well_formed = lines.get(i + 2).is_some_and(|&(_, next)| next.is_empty());
        let body_line = if well_formed { i + 3 } else { i + 2 };
        let body_start = lines
            .get(body_line)
            .map_or(text.len(), |&(offset, _)| offset);

        nodes.push(EntryNode {
            citation: citation.to_string(),
            url: url.to_string(),
            header_start,
            body_start,
            body_end: text.len(),
            well_formed,
        });

        // The URL line cannot also start an entry; resume after the header
        i = body_line;
    }

    // Each body runs to the next entry's heading
    for idx in 0..nodes.len().saturating_sub(1) {
        nodes[idx].body_end = nodes[idx + 1].header_start;
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ENTRY_DOC: &str = "\
# My Bibliography

### Jane Doe. (2024). **First Paper**. *example.com*
**URL:** https://example.com/first

**Key Findings:**
It works.

<details><summary>Content preview (click to expand)</summary>

```
preview one
```
</details>

---

### Bob Roe. (2023). **Second Paper**. *example.org*
**URL:** https://example.org/second

<details><summary>Content preview (click to expand)</summary>

```
preview two
```
</details>

---
";

    #[test]
    fn test_parse_finds_all_entries_in_order() {
        let doc = Document::parse(TWO_ENTRY_DOC);
        let entries = doc.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].url, "https://example.com/first");
        assert_eq!(entries[1].url, "https://example.org/second");
        assert!(entries[0].header_start < entries[1].header_start);
    }

    #[test]
    fn test_parse_captures_citation_text() {
        let doc = Document::parse(TWO_ENTRY_DOC);
        assert_eq!(
            doc.entries()[0].citation,
            "Jane Doe. (2024). **First Paper**. *example.com*"
        );
    }

    #[test]
    fn test_body_spans_cover_text_between_entries() {
        let doc = Document::parse(TWO_ENTRY_DOC);
        let first = &doc.entries()[0];
        let body = first.body(TWO_ENTRY_DOC);
        assert!(body.starts_with("**Key Findings:**\nIt works.\n\n"));
        assert!(body.contains("preview one"));
        assert!(body.ends_with("---\n\n"));
        assert!(!body.contains("Second Paper"));
    }

    #[test]
    fn test_last_body_runs_to_end_of_text() {
        let doc = Document::parse(TWO_ENTRY_DOC);
        let last = &doc.entries()[1];
        assert_eq!(last.body_end, TWO_ENTRY_DOC.len());
        assert!(last.body(TWO_ENTRY_DOC).ends_with("---\n"));
    }

    #[test]
    fn test_annotated_status() {
        let doc = Document::parse(TWO_ENTRY_DOC);
        assert!(doc.entries()[0].annotated(TWO_ENTRY_DOC));
        assert!(!doc.entries()[1].annotated(TWO_ENTRY_DOC));
    }

    #[test]
    fn test_heading_mid_line_is_not_an_entry() {
        let text = "prose mentioning ### Fake Heading\n**URL:** https://example.com/x\n\n";
        assert!(Document::parse(text).entries().is_empty());
    }

    #[test]
    fn test_heading_without_url_line_is_not_an_entry() {
        let text = "### Just A Section\n\nSome prose.\n";
        assert!(Document::parse(text).entries().is_empty());
    }

    #[test]
    fn test_url_line_must_be_adjacent() {
        let text = "### A Citation\n\n**URL:** https://example.com/x\n\n";
        assert!(Document::parse(text).entries().is_empty());
    }

    #[test]
    fn test_missing_blank_after_url_is_not_well_formed() {
        let text = "### A Citation\n**URL:** https://example.com/x\nbody right away\n";
        let doc = Document::parse(text);
        assert_eq!(doc.entries().len(), 1);
        assert!(!doc.entries()[0].well_formed);
        assert_eq!(doc.entries()[0].body(text), "body right away\n");
    }

    #[test]
    fn test_entry_at_end_of_text_without_body() {
        let text = "### A Citation\n**URL:** https://example.com/x\n\n";
        let doc = Document::parse(text);
        assert_eq!(doc.entries().len(), 1);
        let node = &doc.entries()[0];
        assert!(node.well_formed);
        assert_eq!(node.body(text), "");
    }

    #[test]
    fn test_entry_truncated_at_url_line_end() {
        let text = "### A Citation\n**URL:** https://example.com/x";
        let doc = Document::parse(text);
        assert_eq!(doc.entries().len(), 1);
        let node = &doc.entries()[0];
        assert!(!node.well_formed);
        assert_eq!(node.body(text), "");
    }

    #[test]
    fn test_find_entry_by_substring() {
        let doc = Document::parse(TWO_ENTRY_DOC);
        let node = doc.find_entry("example.org").unwrap();
        assert_eq!(node.url, "https://example.org/second");
        assert!(doc.find_entry("nosuchhost.invalid").is_none());
    }

    #[test]
    fn test_find_entry_first_match_wins() {
        let doc = Document::parse(TWO_ENTRY_DOC);
        // Both URLs contain "example"
        let node = doc.find_entry("example").unwrap();
        assert_eq!(node.url, "https://example.com/first");
    }

    #[test]
    fn test_find_entry_skips_malformed() {
        let text = "\
### Broken Entry
**URL:** https://example.com/target
body with no blank line above

### Good Entry
**URL:** https://example.com/target

body
";
        let doc = Document::parse(text);
        assert_eq!(doc.entries().len(), 2);
        let node = doc.find_entry("target").unwrap();
        assert_eq!(node.header_start, doc.entries()[1].header_start);
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::parse("");
        assert!(doc.entries().is_empty());
        assert!(doc.find_entry("anything").is_none());
    }

    #[test]
    fn test_crlf_lines_tolerated() {
        let text = "### A Citation\r\n**URL:** https://example.com/x\r\n\r\nbody\r\n";
        let doc = Document::parse(text);
        assert_eq!(doc.entries().len(), 1);
        let node = &doc.entries()[0];
        assert!(node.well_formed);
        assert_eq!(node.url, "https://example.com/x");
        assert_eq!(node.body(text), "body\r\n");
    }
}
