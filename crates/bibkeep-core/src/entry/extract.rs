//! Heuristic metadata extraction from fetched page text
//!
//! Best effort only: raw page text is noisy, so these helpers grab the
//! first plausible title line, byline-style author names, and the first
//! date-looking string. Callers treat every field as optional and fall back
//! to a bare-URL citation when nothing is found.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::text::char_prefix;

/// Lines scanned when looking for a title
const TITLE_SCAN_LINES: usize = 20;
/// Character window scanned for author bylines
const AUTHOR_SCAN_CHARS: usize = 2000;
/// Character window scanned for a publication date
const DATE_SCAN_CHARS: usize = 3000;
/// Most authors kept from a byline match
const MAX_AUTHORS: usize = 3;

/// Lines containing these fragments are navigation chrome, not titles
const TITLE_SKIP_WORDS: &[&str] = &["cookie", "menu", "search", "login", "sign in"];

/// Metadata pulled out of raw content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedMeta {
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub date: Option<String>,
    pub source: Option<String>,
}

fn author_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // "by Jane Doe" / "By Jane van Doe"
            r"[Bb]y\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)",
            // "Doe, J." citation-style names, optionally "et al."
            r"([A-Z][a-z]+(?:,?\s+[A-Z]\.?\s*)+(?:\s+et\s+al\.?)?)",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("author pattern is valid"))
        .collect()
    })
}

fn date_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // 2024-01-15
            r"(\d{4}-\d{2}-\d{2})",
            // January 15, 2024
            r"([A-Z][a-z]+\s+\d{1,2},?\s+\d{4})",
            // 15 January 2024
            r"(\d{1,2}\s+[A-Z][a-z]+\s+\d{4})",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("date pattern is valid"))
        .collect()
    })
}

/// Extract best-effort metadata from raw content and its source URL
pub fn extract_metadata(content: &str, url: &str) -> ExtractedMeta {
    ExtractedMeta {
        title: extract_title(content),
        authors: extract_authors(content),
        date: extract_date(content),
        source: source_host(url),
    }
}

/// First early line that looks like a title: mid-length, not site chrome
fn extract_title(content: &str) -> Option<String> {
    for line in content.lines().take(TITLE_SCAN_LINES) {
        let line = line.trim();
        let len = line.chars().count();
        if len <= 10 || len >= 200 {
            continue;
        }
        let lower = line.to_lowercase();
        if TITLE_SKIP_WORDS.iter().any(|w| lower.contains(w)) {
            continue;
        }
        return Some(line.to_string());
    }
    None
}

/// Author names from byline patterns near the top of the page
fn extract_authors(content: &str) -> Vec<String> {
    let window = char_prefix(content, AUTHOR_SCAN_CHARS);
    for pattern in author_patterns() {
        let found: Vec<String> = pattern
            .captures_iter(window)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .take(MAX_AUTHORS)
            .collect();
        if !found.is_empty() {
            return found;
        }
    }
    Vec::new()
}

/// First date-looking string near the top of the page
fn extract_date(content: &str) -> Option<String> {
    let window = char_prefix(content, DATE_SCAN_CHARS);
    for pattern in date_patterns() {
        if let Some(caps) = pattern.captures(window) {
            return caps.get(1).map(|m| m.as_str().to_string());
        }
    }
    None
}

/// Host portion of a URL with a leading `www.` removed
pub fn source_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}
