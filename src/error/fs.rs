//! File system error constructors

use std::path::Path;

use super::TaskManagerError;

/// Error for a failed read of `path`
pub fn read_failed(path: &Path, err: &std::io::Error) -> TaskManagerError {
    TaskManagerError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Error for a failed write (or directory creation) at `path`
pub fn write_failed(path: &Path, err: &std::io::Error) -> TaskManagerError {
    TaskManagerError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
