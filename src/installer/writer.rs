//! All-or-nothing file writes
//!
//! Content goes to a temporary file next to the target and is renamed into
//! place, so an interrupted run never leaves a half-written file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, file_write_failed};

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| file_write_failed(parent, &e))?;
    }
    Ok(())
}

/// Write `content` to `target` atomically, creating parent directories.
pub fn write_atomic(target: &Path, content: &[u8]) -> Result<()> {
    ensure_parent_dir(target)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| file_write_failed(target, &e))?;
    tmp.write_all(content)
        .and_then(|()| tmp.flush())
        .map_err(|e| file_write_failed(target, &e))?;
    tmp.persist(target)
        .map_err(|e| file_write_failed(target, &e.error))?;

    Ok(())
}

/// Mark a file executable on unix; a no-op elsewhere.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)
        .map_err(|e| file_write_failed(path, &e))?
        .permissions();
    perms.set_mode(perms.mode() | 0o755);
    std::fs::set_permissions(path, perms).map_err(|e| file_write_failed(path, &e))
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
