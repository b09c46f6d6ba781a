use clap::Parser;
use std::path::PathBuf;

/// Arguments for init command
#[derive(Parser, Debug)]
#[command(after_help = "SUPPORTED ASSISTANTS:\n  \
                  claude, codex, cursor, gemini, github, opencode\n\n\
                  EXAMPLES:\n  \
                  Initialize for Claude Code and Gemini CLI:\n    ai-task-manager init --assistants claude,gemini\n\n\
                  Refresh after upgrading, overwriting local edits:\n    ai-task-manager init --assistants claude --force")]
pub struct InitArgs {
    /// Comma-separated assistant identifiers
    #[arg(long, value_name = "LIST", env = "AI_TASK_MANAGER_ASSISTANTS")]
    pub assistants: String,

    /// Directory to initialize (defaults to current directory)
    #[arg(long = "destination-directory", short = 'd', value_name = "PATH")]
    pub destination_directory: Option<PathBuf>,

    /// Overwrite every managed file without checking for local edits
    #[arg(long)]
    pub force: bool,
}
