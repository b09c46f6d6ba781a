//! Bundled templates and their conversion
//!
//! This module handles:
//! - The template tree embedded in the binary (command templates, config
//!   documents, protected scripts)
//! - Frontmatter parsing (via [`frontmatter`])
//! - Placeholder substitution (via [`substitution`])
//! - Markdown → TOML conversion (via [`convert`])

use std::borrow::Cow;

use rust_embed::RustEmbed;

use crate::error::{Result, TaskManagerError};

pub mod convert;
pub mod frontmatter;
pub mod substitution;

pub use frontmatter::{ParsedTemplate, parse_template};

/// Root of everything the tool manages, relative to the destination directory
pub const TASK_MANAGER_DIR: &str = ".ai/task-manager";

/// Empty directories created under [`TASK_MANAGER_DIR`]
pub const WORK_DIRS: [&str; 2] = ["plans", "archive"];

/// Scripts directory, relative to [`TASK_MANAGER_DIR`]. Never hashed or
/// conflict-checked; copied only when a script is absent.
pub const SCRIPTS_DIR: &str = "config/scripts";

const COMMANDS_PREFIX: &str = "commands/tasks/";
const TASK_MANAGER_PREFIX: &str = "task-manager/";

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Assets;

/// A Markdown command template, shared by every assistant before rendering
#[derive(Debug, Clone)]
pub struct CommandTemplate {
    /// Command name, e.g. `create-plan`
    pub name: String,
    /// Raw Markdown source including frontmatter
    pub source: String,
}

impl CommandTemplate {
    pub fn parse(&self) -> ParsedTemplate {
        parse_template(&self.source)
    }
}

/// A bundled file copied verbatim under [`TASK_MANAGER_DIR`]
#[derive(Debug, Clone)]
pub struct BundledFile {
    /// Path relative to [`TASK_MANAGER_DIR`], `/`-separated
    pub path: String,
    pub content: Cow<'static, [u8]>,
}

impl BundledFile {
    /// Path relative to the destination root, `/`-separated
    pub fn destination_path(&self) -> String {
        format!("{TASK_MANAGER_DIR}/{}", self.path)
    }

    pub fn is_script(&self) -> bool {
        self.path.starts_with(&format!("{SCRIPTS_DIR}/"))
    }
}

fn load(path: &str) -> Result<Cow<'static, [u8]>> {
    Assets::get(path)
        .map(|file| file.data)
        .ok_or_else(|| TaskManagerError::TemplateNotFound {
            path: path.to_string(),
        })
}

fn sorted_paths(prefix: &str) -> Vec<String> {
    let mut paths: Vec<String> = Assets::iter()
        .filter(|p| p.starts_with(prefix))
        .map(Cow::into_owned)
        .collect();
    paths.sort();
    paths
}

/// All command templates, sorted by name
pub fn command_templates() -> Result<Vec<CommandTemplate>> {
    sorted_paths(COMMANDS_PREFIX)
        .into_iter()
        .filter_map(|path| {
            let name = path
                .strip_prefix(COMMANDS_PREFIX)?
                .strip_suffix(".md")?
                .to_string();
            Some((name, path))
        })
        .map(|(name, path)| {
            let data = load(&path)?;
            Ok(CommandTemplate {
                name,
                source: String::from_utf8_lossy(&data).into_owned(),
            })
        })
        .collect()
}

/// All files bundled for the task-manager directory, scripts included
pub fn task_manager_files() -> Result<Vec<BundledFile>> {
    sorted_paths(TASK_MANAGER_PREFIX)
        .into_iter()
        .map(|path| {
            let content = load(&path)?;
            let relative = path
                .strip_prefix(TASK_MANAGER_PREFIX)
                .unwrap_or(&path)
                .to_string();
            Ok(BundledFile {
                path: relative,
                content,
            })
        })
        .collect()
}
