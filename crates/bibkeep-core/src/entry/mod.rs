//! Entry records staged for rendering
//!
//! Fetch pipelines hand over JSON describing one page per record: the URL,
//! the raw page text, and whatever metadata the fetcher already knows. A
//! batch is either a single object or an array of objects. Field values are
//! normalized on the way in so that an empty string and an absent key mean
//! the same thing everywhere downstream.

pub mod extract;

use serde::Deserialize;

use crate::error::{BibError, Result};

/// One record as it arrives on the wire; every field optional
#[derive(Debug, Default, Deserialize)]
struct RawRecord {
    #[serde(alias = "source_url")]
    url: Option<String>,
    #[serde(alias = "text")]
    content: Option<String>,
    title: Option<String>,
    authors: Option<Vec<String>>,
    date: Option<String>,
    source: Option<String>,
    annotation: Option<String>,
}

/// A normalized bibliography entry ready for rendering.
///
/// `url` is always present; everything else is either caller-provided
/// metadata or left for heuristic extraction at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub url: String,
    pub content: String,
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub date: Option<String>,
    pub source: Option<String>,
    pub annotation: Option<String>,
}

impl EntryRecord {
    /// Build a record carrying only a URL and raw content
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        EntryRecord {
            url: url.into(),
            content: content.into(),
            title: None,
            authors: None,
            date: None,
            source: None,
            annotation: None,
        }
    }
}

/// Parse a batch of entry records from JSON.
///
/// Accepts a single object or an array of objects; anything else is a JSON
/// error. A record without a usable `url` (or `source_url`) is rejected with
/// the index it occupies in the batch.
pub fn parse_batch(input: &str) -> Result<Vec<EntryRecord>> {
    let value: serde_json::Value = serde_json::from_str(input)?;

    let raws: Vec<RawRecord> = match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)?,
        _ => vec![serde_json::from_value(value)?],
    };

    raws.into_iter()
        .enumerate()
        .map(|(index, raw)| raw.into_record(index))
        .collect()
}

impl RawRecord {
    fn into_record(self, index: usize) -> Result<EntryRecord> {
        let url = self
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(String::from)
            .ok_or(BibError::MissingUrl { index })?;

        Ok(EntryRecord {
            url,
            content: self.content.unwrap_or_default(),
            title: clean(self.title),
            authors: clean_authors(self.authors),
            date: clean(self.date),
            source: clean(self.source),
            annotation: clean(self.annotation),
        })
    }
}

/// Treat empty and whitespace-only strings as absent
fn clean(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn clean_authors(value: Option<Vec<String>>) -> Option<Vec<String>> {
    let authors: Vec<String> = value?
        .into_iter()
        .filter(|a| !a.trim().is_empty())
        .collect();
    if authors.is_empty() {
        None
    } else {
        Some(authors)
    }
}
