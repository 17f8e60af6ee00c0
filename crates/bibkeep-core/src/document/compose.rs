//! Document assembly from rendered entries

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::entry::EntryRecord;
use crate::render::render_entry;

/// Separator written after every rendered entry, the last one included
pub const ENTRY_SEPARATOR: &str = "\n---\n\n";

/// Options controlling document assembly
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    /// Topic section header written ahead of the entries
    pub topic: Option<String>,
    /// Timestamp for the topic header's processed-at line; callers supply it
    /// so composition itself stays reproducible
    pub generated_at: Option<DateTime<Utc>>,
    /// Appending to an existing document: the topic header is assumed to be
    /// there already and is not repeated
    pub append: bool,
}

/// Render a batch of records into one document body.
///
/// Entries keep their batch order and every entry is followed by a
/// horizontal-rule separator, so the result can be appended to an existing
/// bibliography as-is.
pub fn compose_document(records: &[EntryRecord], options: &ComposeOptions) -> String {
    let mut out = String::new();

    if !options.append {
        if let Some(topic) = &options.topic {
            out.push_str(&format!("## {}\n\n", topic));
            if let Some(at) = options.generated_at {
                out.push_str(&format!("*Processed: {}*\n\n", at.format("%Y-%m-%d %H:%M")));
            }
        }
    }

    for record in records {
        out.push_str(&render_entry(record));
        out.push_str(ENTRY_SEPARATOR);
    }

    debug!(entries = records.len(), bytes = out.len(), "compose_document");
    out
}
