//! Template copier
//!
//! This module handles:
//! - Rendering templates per assistant (via [`render`])
//! - Atomic writes of rendered files (via [`writer`])
//! - First-run copying of the protected scripts directory

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::template;

pub mod render;
pub mod writer;

pub use render::{RenderedFile, render_managed_files};

/// Copy bundled scripts that are not yet on disk.
///
/// Existing scripts are never touched, whatever their content and whether or
/// not `--force` was given. Returns the destination paths that were created.
pub fn install_missing_scripts(destination_root: &Path) -> Result<Vec<String>> {
    let mut created = Vec::new();

    for file in template::task_manager_files()?
        .into_iter()
        .filter(template::BundledFile::is_script)
    {
        let relative = file.destination_path();
        let target = destination_root.join(&relative);
        if target.exists() {
            debug!(path = %relative, "script already present, leaving untouched");
            continue;
        }

        writer::write_atomic(&target, &file.content)?;
        writer::make_executable(&target)?;
        created.push(relative);
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scripts_copied_once_and_never_overwritten() {
        let temp = TempDir::new().unwrap();

        let created = install_missing_scripts(temp.path()).unwrap();
        assert!(!created.is_empty());

        let script = temp.path().join(&created[0]);
        std::fs::write(&script, "#!/bin/sh\necho custom\n").unwrap();

        let second = install_missing_scripts(temp.path()).unwrap();
        assert!(second.is_empty());
        assert_eq!(
            std::fs::read_to_string(&script).unwrap(),
            "#!/bin/sh\necho custom\n"
        );
    }

    #[test]
    fn test_deleted_script_is_restored() {
        let temp = TempDir::new().unwrap();
        let created = install_missing_scripts(temp.path()).unwrap();

        std::fs::remove_file(temp.path().join(&created[0])).unwrap();
        let restored = install_missing_scripts(temp.path()).unwrap();
        assert_eq!(restored, vec![created[0].clone()]);
    }
}
