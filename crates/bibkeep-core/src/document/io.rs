//! Bibliography file IO
//!
//! Whole-document reads and writes. Rewrites go through a sibling `.tmp`
//! file and a rename so an interrupted run cannot leave a truncated
//! bibliography behind. Concurrent writers are not coordinated; callers
//! serialize access externally and the last writer wins.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Read a bibliography file in full
pub fn read_document(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Replace a file's contents via a temporary sibling and an atomic rename
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    let tmp = tmp_sibling(path);
    let mut file = File::create(&tmp)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), bytes = contents.len(), "write_document");
    Ok(())
}

/// Append to a file, creating it when missing.
///
/// A newline is written ahead of the body so the appended block cannot glue
/// onto the last line of the existing document.
pub fn append_document(path: &Path, contents: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(b"\n")?;
    file.write_all(contents.as_bytes())?;
    debug!(path = %path.display(), bytes = contents.len(), "append_document");
    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
