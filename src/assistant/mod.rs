//! Assistant registry
//!
//! Every supported AI assistant is a variant of [`Assistant`]. Each variant
//! answers the same three questions through pattern matching:
//! - where its command files live ([`Assistant::layout`])
//! - how a command name becomes a file name ([`Assistant::file_name`])
//! - which format it reads ([`Assistant::output_format`])
//!
//! Adding an assistant means adding a variant and its arms here; the
//! converter and the conflict detector never look at assistant ids.

use std::fmt;
use std::path::PathBuf;

pub mod validation;

pub use validation::{parse_assistants, validate_assistants};

/// Subdirectory that groups task-manager commands for nested layouts
pub const TASKS_SUBDIR: &str = "tasks";

/// Prefix applied to command file names for flat layouts
pub const FLAT_PREFIX: &str = "tasks-";

/// A supported AI coding assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Assistant {
    Claude,
    Codex,
    Cursor,
    Gemini,
    Github,
    Opencode,
}

/// Format an assistant reads its commands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Toml,
}

impl OutputFormat {
    /// File extension for this format, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Toml => "toml",
        }
    }
}

/// Where an assistant keeps its command files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryLayout {
    /// `<base>/tasks/<name>.<ext>`
    Nested { base: &'static str },
    /// `<base>/tasks-<name>.<ext>`
    Flat { base: &'static str },
}

impl DirectoryLayout {
    /// Base directory relative to the destination root
    pub fn base(self) -> &'static str {
        match self {
            DirectoryLayout::Nested { base } | DirectoryLayout::Flat { base } => base,
        }
    }
}

impl Assistant {
    /// All supported assistants, in the order they are listed to users
    pub const ALL: [Assistant; 6] = [
        Assistant::Claude,
        Assistant::Codex,
        Assistant::Cursor,
        Assistant::Gemini,
        Assistant::Github,
        Assistant::Opencode,
    ];

    /// Lowercase identifier accepted by `--assistants`
    pub fn id(self) -> &'static str {
        match self {
            Assistant::Claude => "claude",
            Assistant::Codex => "codex",
            Assistant::Cursor => "cursor",
            Assistant::Gemini => "gemini",
            Assistant::Github => "github",
            Assistant::Opencode => "opencode",
        }
    }

    /// Display name for summaries
    pub fn display_name(self) -> &'static str {
        match self {
            Assistant::Claude => "Claude Code",
            Assistant::Codex => "Codex CLI",
            Assistant::Cursor => "Cursor",
            Assistant::Gemini => "Gemini CLI",
            Assistant::Github => "GitHub Copilot",
            Assistant::Opencode => "OpenCode",
        }
    }

    /// Look up an assistant by its exact identifier
    ///
    /// Matching is case-sensitive: `Claude` is not `claude`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }

    /// Comma-separated list of every supported identifier
    pub fn supported_ids() -> String {
        Self::ALL
            .iter()
            .map(|a| a.id())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn output_format(self) -> OutputFormat {
        match self {
            Assistant::Gemini => OutputFormat::Toml,
            Assistant::Claude
            | Assistant::Codex
            | Assistant::Cursor
            | Assistant::Github
            | Assistant::Opencode => OutputFormat::Markdown,
        }
    }

    pub fn layout(self) -> DirectoryLayout {
        match self {
            Assistant::Claude => DirectoryLayout::Nested {
                base: ".claude/commands",
            },
            Assistant::Gemini => DirectoryLayout::Nested {
                base: ".gemini/commands",
            },
            Assistant::Opencode => DirectoryLayout::Nested {
                base: ".opencode/command",
            },
            Assistant::Cursor => DirectoryLayout::Flat {
                base: ".cursor/commands",
            },
            Assistant::Codex => DirectoryLayout::Flat {
                base: ".codex/prompts",
            },
            Assistant::Github => DirectoryLayout::Flat {
                base: ".github/prompts",
            },
        }
    }

    /// Output file name for a command, e.g. `create-plan.toml` or `tasks-create-plan.md`
    pub fn file_name(self, command: &str) -> String {
        let stem = match self.layout() {
            DirectoryLayout::Nested { .. } => command.to_string(),
            DirectoryLayout::Flat { .. } => format!("{FLAT_PREFIX}{command}"),
        };

        match self {
            // Copilot only picks up `*.prompt.md` files
            Assistant::Github => format!("{stem}.prompt.md"),
            _ => format!("{stem}.{}", self.output_format().extension()),
        }
    }

    /// Output path for a command, relative to the destination root
    pub fn relative_output_path(self, command: &str) -> PathBuf {
        let layout = self.layout();
        let mut path = PathBuf::from(layout.base());
        if let DirectoryLayout::Nested { .. } = layout {
            path.push(TASKS_SUBDIR);
        }
        path.push(self.file_name(command));
        path
    }

    /// How a user invokes a command from inside the assistant
    pub fn slash_command(self, command: &str) -> String {
        match self.layout() {
            DirectoryLayout::Nested { .. } => format!("/{TASKS_SUBDIR}:{command}"),
            DirectoryLayout::Flat { .. } => format!("/{FLAT_PREFIX}{command}"),
        }
    }
}

impl fmt::Display for Assistant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
