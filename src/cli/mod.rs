//! CLI definitions using clap derive API
//!
//! One submodule per command's argument types:
//! - init: Init command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod init;

pub use completions::CompletionsArgs;
pub use init::InitArgs;

/// AI Task Manager - prompt scaffolding for AI coding assistants
#[derive(Parser, Debug)]
#[command(
    name = "ai-task-manager",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Scaffold task-manager commands and hooks for AI coding assistants",
    long_about = "Writes the task-manager configuration, lifecycle hooks and slash commands \
                  (create-plan, generate-tasks, execute-blueprint, ...) for the selected \
                  assistants. Re-running detects files you edited and asks before replacing them.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  ai-task-manager init --assistants claude                \x1b[90m# Claude Code only\x1b[0m\n   \
                  ai-task-manager init --assistants claude,gemini         \x1b[90m# Markdown and TOML commands\x1b[0m\n   \
                  ai-task-manager init --assistants cursor -d ../project  \x1b[90m# Another directory\x1b[0m\n   \
                  ai-task-manager init --assistants claude --force        \x1b[90m# Overwrite without asking\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or refresh the task manager for one or more assistants
    Init(InitArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
