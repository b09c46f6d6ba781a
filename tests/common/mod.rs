//! Common test utilities for ai-task-manager integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Metadata record path, relative to the destination root
#[allow(dead_code)]
pub const METADATA: &str = ".ai/task-manager/.init-metadata.json";

/// A destination directory for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to destination root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Parsed metadata record
    #[allow(dead_code)]
    pub fn metadata(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_file(METADATA)).expect("Failed to parse metadata")
    }

    /// Stored baseline hash for a managed file
    #[allow(dead_code)]
    pub fn stored_hash(&self, path: &str) -> Option<String> {
        self.metadata()["files"][path].as_str().map(str::to_string)
    }

    /// `ai-task-manager init` targeting this workspace
    #[allow(dead_code)]
    pub fn init(&self, assistants: &str) -> Command {
        let mut cmd = cmd();
        cmd.arg("init")
            .arg("--assistants")
            .arg(assistants)
            .arg("--destination-directory")
            .arg(&self.path);
        cmd
    }
}

/// The ai-task-manager binary with a clean environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("ai-task-manager").expect("binary should be built");
    cmd.env_remove("AI_TASK_MANAGER_ASSISTANTS")
        .env_remove("RUST_LOG");
    cmd
}
