//! AI Task Manager
//!
//! Scaffolds task-manager prompt templates, lifecycle hooks and slash
//! commands for AI coding assistants (Claude, Gemini, Cursor, ...), and keeps
//! them up to date without clobbering local edits.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

mod assistant;
mod cli;
mod commands;
mod conflict;
mod error;
mod hash;
mod installer;
mod metadata;
mod template;
mod ui;

use cli::{Cli, Commands};

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Init(args) => commands::init::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("Help: {help}");
        }
        std::process::exit(1);
    }
}
