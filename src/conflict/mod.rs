//! Conflict detection against the previous run's baseline
//!
//! Each rendered file is classified from three inputs: the baseline hash
//! recorded by the last run, the live file on disk, and the freshly rendered
//! content. Only files the user changed since the last run need a decision.

use std::path::Path;

use tracing::debug;

use crate::error::{Result, file_read_failed};
use crate::hash;
use crate::installer::RenderedFile;
use crate::metadata::InitMetadata;

pub mod diff;
pub mod resolver;

pub use resolver::{BatchMode, ConflictPrompt, Decision, InquirePrompt};

/// What happened to a managed file since the last run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The live file still matches the baseline (or already matches the new
    /// content); safe to write silently
    Unchanged,
    /// The live file differs from the baseline and from the new content
    UserModified,
    /// No baseline entry, or the file is gone; written without asking
    NewOrUnmanaged,
    /// The live path exists but could not be read; the file is skipped and
    /// reported as failed
    Unreadable,
}

/// A rendered file together with its classification
#[derive(Debug, Clone)]
pub struct DetectedFile {
    pub relative_path: String,
    pub classification: Classification,
    pub new_content: Vec<u8>,
    /// Live content, when the file exists
    pub old_content: Option<Vec<u8>>,
    /// Why the live file could not be read, for [`Classification::Unreadable`]
    pub read_error: Option<String>,
}

impl DetectedFile {
    pub fn needs_decision(&self) -> bool {
        self.classification == Classification::UserModified
    }
}

/// Classify one file. Pure: the same inputs always give the same answer.
pub fn classify(baseline_hash: Option<&str>, live: Option<&[u8]>, candidate: &[u8]) -> Classification {
    let (Some(baseline_hash), Some(live)) = (baseline_hash, live) else {
        return Classification::NewOrUnmanaged;
    };

    if hash::verify_hash(baseline_hash, &hash::hash_bytes(live)) || live == candidate {
        Classification::Unchanged
    } else {
        Classification::UserModified
    }
}

/// Classify every candidate against the baseline and the files under
/// `destination_root`. A read error only affects its own file.
pub fn detect(
    destination_root: &Path,
    candidates: Vec<RenderedFile>,
    baseline: Option<&InitMetadata>,
) -> Vec<DetectedFile> {
    candidates
        .into_iter()
        .map(|candidate| {
            let (live, read_error) =
                match read_live(&destination_root.join(&candidate.relative_path)) {
                    Ok(live) => (live, None),
                    Err(e) => (None, Some(e.to_string())),
                };

            let classification = if read_error.is_some() {
                Classification::Unreadable
            } else {
                let baseline_hash = baseline.and_then(|b| b.hash_for(&candidate.relative_path));
                classify(baseline_hash, live.as_deref(), &candidate.content)
            };
            debug!(path = %candidate.relative_path, ?classification, "classified");

            DetectedFile {
                relative_path: candidate.relative_path,
                classification,
                new_content: candidate.content,
                old_content: live,
                read_error,
            }
        })
        .collect()
}

/// Read a live file, mapping "not found" to `None`
pub fn read_live(path: &Path) -> Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(file_read_failed(path, &e)),
    }
}
