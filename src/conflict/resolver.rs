//! Interactive resolution of user-modified files
//!
//! The resolver walks the modified files in order and asks a
//! [`ConflictPrompt`] for each one. The "apply to all remaining" state is a
//! [`BatchMode`] value threaded through the loop: once it is set, no further
//! prompts are issued.

use std::fmt;
use std::io::IsTerminal;

use inquire::{InquireError, Select};

use crate::error::{Result, TaskManagerError};
use crate::ui;

use super::DetectedFile;
use super::diff::unified_diff;

/// Answer to a single conflict prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    KeepMine,
    Overwrite,
    KeepAll,
    OverwriteAll,
}

impl Choice {
    pub const ALL: [Choice; 4] = [
        Choice::KeepMine,
        Choice::Overwrite,
        Choice::KeepAll,
        Choice::OverwriteAll,
    ];
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Choice::KeepMine => "Keep my version",
            Choice::Overwrite => "Overwrite with the new template",
            Choice::KeepAll => "Keep my version for all remaining files",
            Choice::OverwriteAll => "Overwrite all remaining files",
        })
    }
}

/// Standing answer for the rest of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchMode {
    #[default]
    None,
    KeepAll,
    OverwriteAll,
}

/// What to do with one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Keep,
    Overwrite,
}

/// Source of conflict answers
pub trait ConflictPrompt {
    /// Called once before the first question with the number of conflicts
    fn begin(&mut self, _total: usize) {}

    /// Ask what to do with `file`, given its rendered diff
    fn choose(&mut self, file: &DetectedFile, diff: &str) -> Result<Choice>;
}

/// Resolve one conflict. Returns the decision and the batch mode to carry
/// into the next conflict.
pub fn resolve_one(
    mode: BatchMode,
    file: &DetectedFile,
    prompt: &mut dyn ConflictPrompt,
) -> Result<(Decision, BatchMode)> {
    match mode {
        BatchMode::KeepAll => Ok((Decision::Keep, mode)),
        BatchMode::OverwriteAll => Ok((Decision::Overwrite, mode)),
        BatchMode::None => {
            let diff = render_diff(file);
            Ok(match prompt.choose(file, &diff)? {
                Choice::KeepMine => (Decision::Keep, BatchMode::None),
                Choice::Overwrite => (Decision::Overwrite, BatchMode::None),
                Choice::KeepAll => (Decision::Keep, BatchMode::KeepAll),
                Choice::OverwriteAll => (Decision::Overwrite, BatchMode::OverwriteAll),
            })
        }
    }
}

/// Resolve every conflict in order. The returned decisions line up with
/// `conflicts`.
pub fn resolve_conflicts(
    conflicts: &[&DetectedFile],
    initial: BatchMode,
    prompt: &mut dyn ConflictPrompt,
) -> Result<Vec<Decision>> {
    let mut mode = initial;
    let mut decisions = Vec::with_capacity(conflicts.len());

    for file in conflicts {
        let (decision, next) = resolve_one(mode, file, prompt)?;
        decisions.push(decision);
        mode = next;
    }

    Ok(decisions)
}

/// Diff of the user's file against the new content
pub fn render_diff(file: &DetectedFile) -> String {
    let old = file
        .old_content
        .as_deref()
        .map(String::from_utf8_lossy)
        .unwrap_or_default();
    let new = String::from_utf8_lossy(&file.new_content);

    unified_diff(
        &old,
        &new,
        &format!("{} (yours)", file.relative_path),
        &format!("{} (template)", file.relative_path),
    )
}

/// Terminal prompt backed by `inquire`
pub struct InquirePrompt {
    pending: usize,
}

impl InquirePrompt {
    pub fn new(pending: usize) -> Self {
        Self { pending }
    }
}

impl ConflictPrompt for InquirePrompt {
    fn begin(&mut self, total: usize) {
        self.pending = total;
    }

    fn choose(&mut self, file: &DetectedFile, diff: &str) -> Result<Choice> {
        if !std::io::stdin().is_terminal() {
            return Err(TaskManagerError::NonInteractiveConflict {
                count: self.pending,
            });
        }

        ui::print_conflict_header(&file.relative_path);
        ui::print_diff(diff);

        let answer = Select::new(
            &format!("{} was modified. What should happen?", file.relative_path),
            Choice::ALL.to_vec(),
        )
        .with_starting_cursor(0)
        .without_filtering()
        .with_help_message("↑↓ to move, ENTER to select")
        .prompt();

        match answer {
            Ok(choice) => {
                self.pending = self.pending.saturating_sub(1);
                Ok(choice)
            }
            Err(InquireError::NotTTY) => Err(TaskManagerError::NonInteractiveConflict {
                count: self.pending,
            }),
            Err(e) => Err(e.into()),
        }
    }
}
