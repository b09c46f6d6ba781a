//! Error types and handling for ai-task-manager
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors fall into three groups:
//! - validation errors, raised before anything touches the filesystem
//! - filesystem errors, carrying the offending path
//! - interaction errors from the conflict prompt

pub mod fs;

pub use fs::{read_failed as file_read_failed, write_failed as file_write_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ai-task-manager operations
#[derive(Error, Diagnostic, Debug)]
pub enum TaskManagerError {
    // Validation errors
    #[error("Unsupported assistant '{assistant}'. Supported assistants: {supported}")]
    #[diagnostic(
        code(ai_task_manager::assistant::not_supported),
        help("Pass a comma-separated list of lowercase identifiers, e.g. --assistants claude,gemini")
    )]
    AssistantNotSupported { assistant: String, supported: String },

    #[error("No assistants selected")]
    #[diagnostic(
        code(ai_task_manager::assistant::none_selected),
        help("Pass at least one assistant, e.g. --assistants claude")
    )]
    NoAssistantsSelected,

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(ai_task_manager::completions::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Template errors
    #[error("Bundled template not found: {path}")]
    #[diagnostic(code(ai_task_manager::template::not_found))]
    TemplateNotFound { path: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(ai_task_manager::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(ai_task_manager::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Destination directory is not writable: {path}: {reason}")]
    #[diagnostic(
        code(ai_task_manager::fs::destination_not_writable),
        help("Check the permissions of the destination directory or pick another one")
    )]
    DestinationNotWritable { path: String, reason: String },

    #[error("Failed to write init metadata: {path}: {reason}")]
    #[diagnostic(code(ai_task_manager::metadata::write_failed))]
    MetadataWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(ai_task_manager::fs::io_error))]
    IoError { message: String },

    // Interaction errors
    #[error("Failed to read conflict choice: {reason}")]
    #[diagnostic(code(ai_task_manager::prompt::failed))]
    PromptFailed { reason: String },

    #[error("{count} modified file(s) need a decision but no terminal is attached")]
    #[diagnostic(
        code(ai_task_manager::prompt::non_interactive),
        help("Re-run in an interactive terminal, or pass --force to overwrite modified files")
    )]
    NonInteractiveConflict { count: usize },
}

impl From<std::io::Error> for TaskManagerError {
    fn from(err: std::io::Error) -> Self {
        TaskManagerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TaskManagerError {
    fn from(err: serde_json::Error) -> Self {
        TaskManagerError::IoError {
            message: format!("JSON serialization failed: {err}"),
        }
    }
}

impl From<inquire::InquireError> for TaskManagerError {
    fn from(err: inquire::InquireError) -> Self {
        TaskManagerError::PromptFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TaskManagerError>;
