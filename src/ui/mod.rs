//! Console presentation for init runs
//!
//! Per-file status lines, the conflict diff, and the closing summary. All
//! styling goes through `console::Style`, which drops colors when stdout is
//! not a terminal.

use console::Style;

use crate::assistant::Assistant;

/// What a run did to one managed file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Created,
    Updated,
    Unchanged,
    Kept,
    Failed,
}

impl FileOutcome {
    fn label(self) -> String {
        let (text, style) = match self {
            FileOutcome::Created => ("created", Style::new().green()),
            FileOutcome::Updated => ("updated", Style::new().cyan()),
            FileOutcome::Unchanged => ("unchanged", Style::new().dim()),
            FileOutcome::Kept => ("kept", Style::new().yellow()),
            FileOutcome::Failed => ("failed", Style::new().red().bold()),
        };
        style.apply_to(format!("{text:>9}")).to_string()
    }
}

/// Counts of file outcomes over a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitSummary {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub kept: usize,
    pub failed: usize,
    pub scripts: usize,
}

impl InitSummary {
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Created => self.created += 1,
            FileOutcome::Updated => self.updated += 1,
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Kept => self.kept += 1,
            FileOutcome::Failed => self.failed += 1,
        }
    }
}

/// Print one status line; unchanged files are only logged.
pub fn print_file_outcome(path: &str, outcome: FileOutcome) {
    if outcome == FileOutcome::Unchanged {
        tracing::debug!(path, "unchanged");
        return;
    }
    println!("  {} {}", outcome.label(), path);
}

pub fn print_conflict_header(path: &str) {
    println!();
    println!(
        "{} {}",
        Style::new().bold().yellow().apply_to("Modified:"),
        Style::new().bold().apply_to(path)
    );
}

/// Print a unified diff with colored additions and removals
pub fn print_diff(diff: &str) {
    for line in diff.lines() {
        println!("{}", colorize_diff_line(line));
    }
}

fn colorize_diff_line(line: &str) -> String {
    let style = if line.starts_with("+++") || line.starts_with("---") {
        Style::new().bold()
    } else if line.starts_with("@@") {
        Style::new().cyan()
    } else if line.starts_with('+') {
        Style::new().green()
    } else if line.starts_with('-') {
        Style::new().red()
    } else {
        Style::new()
    };
    style.apply_to(line).to_string()
}

/// Print the closing summary and how to start using the commands
pub fn print_summary(summary: &InitSummary, assistants: &[Assistant]) {
    println!();
    println!(
        "{} {} created, {} updated, {} unchanged, {} kept",
        Style::new().bold().green().apply_to("Done:"),
        summary.created,
        summary.updated,
        summary.unchanged,
        summary.kept
    );
    if summary.scripts > 0 {
        println!("  {} helper script(s) installed", summary.scripts);
    }
    if summary.failed > 0 {
        println!(
            "  {}",
            Style::new()
                .red()
                .apply_to(format!("{} file(s) could not be written", summary.failed))
        );
    }

    println!();
    println!("{}", Style::new().bold().apply_to("Next steps:"));
    for assistant in assistants {
        println!(
            "  {:<15} {}",
            assistant.display_name(),
            Style::new()
                .cyan()
                .apply_to(assistant.slash_command("create-plan"))
        );
    }
}
