//! Command implementations for the ai-task-manager CLI

pub mod completions;
pub mod init;
pub mod version;
