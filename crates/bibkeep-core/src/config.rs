//! Configuration for bibkeep
//!
//! An optional `bibkeep.toml` next to a bibliography (or in any parent
//! directory) supplies defaults so scripts can omit repeated arguments:
//!
//! ```toml
//! default_file = "research/bibliography.md"
//! default_topic = "Unsorted"
//! ```
//!
//! `default_file` is resolved relative to the directory holding the config
//! file, not the current working directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BibError, Result};

/// Config file name searched for in the working directory and its parents
pub const CONFIG_FILE: &str = "bibkeep.toml";

/// Environment variable naming the bibliography file
pub const FILE_ENV_VAR: &str = "BIBKEEP_FILE";

/// Workspace defaults loaded from `bibkeep.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Bibliography file used when a command omits `--file`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_file: Option<PathBuf>,

    /// Topic header used by `format` when `--topic` is omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_topic: Option<String>,
}

impl Config {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Walk up from `start` looking for a config file.
    ///
    /// Returns the directory that holds the config along with its contents;
    /// a config that exists but fails to parse is an error, not a miss.
    pub fn discover(start: &Path) -> Result<Option<(PathBuf, Self)>> {
        let mut dir = start;
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                debug!(path = %candidate.display(), "config_found");
                let config = Self::load(&candidate)?;
                return Ok(Some((dir.to_path_buf(), config)));
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => return Ok(None),
            }
        }
    }
}

/// Resolve the bibliography file a command should operate on.
///
/// `explicit` carries the `--file` flag (clap also fills it from
/// `BIBKEEP_FILE`); otherwise the `default_file` of a discovered config is
/// used, resolved relative to the config's own directory.
pub fn resolve_bib_file(explicit: Option<&Path>, start: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some((config_dir, config)) = Config::discover(start)? {
        if let Some(file) = config.default_file {
            let resolved = if file.is_absolute() {
                file
            } else {
                config_dir.join(file)
            };
            debug!(path = %resolved.display(), "config_default_file");
            return Ok(resolved);
        }
    }

    Err(BibError::UsageError(format!(
        "no bibliography file given (use --file, set {}, or set default_file in {})",
        FILE_ENV_VAR, CONFIG_FILE
    )))
}
