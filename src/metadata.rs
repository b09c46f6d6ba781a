//! Init metadata store
//!
//! `.ai/task-manager/.init-metadata.json` records the hash of every managed
//! file as written by the last successful run. It is the baseline the next
//! run compares live files against.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TaskManagerError};
use crate::installer::writer;

/// Metadata file location, relative to the destination root
pub const METADATA_PATH: &str = ".ai/task-manager/.init-metadata.json";

/// Baseline captured at the end of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitMetadata {
    /// Version of the tool that wrote the record
    pub version: String,
    /// ISO-8601 UTC timestamp of the run
    pub timestamp: String,
    /// Relative path → content hash
    pub files: BTreeMap<String, String>,
}

impl InitMetadata {
    /// Build a record for the current tool version, stamped now
    pub fn new(files: BTreeMap<String, String>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            files,
        }
    }

    pub fn hash_for(&self, relative_path: &str) -> Option<&str> {
        self.files.get(relative_path).map(String::as_str)
    }
}

/// Load a baseline. A missing or unreadable file, or one that is not valid
/// metadata JSON, yields `None`: the run proceeds as a first run.
pub fn load(path: &Path) -> Option<InitMetadata> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no init metadata, treating as first run");
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(metadata) => Some(metadata),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ignoring corrupt init metadata");
            None
        }
    }
}

/// Persist a baseline with a temp-file-and-rename write
pub fn save(path: &Path, metadata: &InitMetadata) -> Result<()> {
    let mut json = serde_json::to_string_pretty(metadata)?;
    json.push('\n');

    writer::write_atomic(path, json.as_bytes()).map_err(|e| {
        TaskManagerError::MetadataWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    })
}
