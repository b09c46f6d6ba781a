//! Init command implementation
//!
//! Sequence of a run:
//! 1. validate `--assistants` (nothing touches the disk before this passes)
//! 2. create the `.ai/task-manager` skeleton
//! 3. render every managed file for the selected assistants
//! 4. classify them against the previous baseline (skipped with `--force`)
//! 5. ask about user-modified files
//! 6. write, copy missing scripts, persist the new baseline

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::assistant::{Assistant, parse_assistants, validate_assistants};
use crate::cli::InitArgs;
use crate::conflict::{self, BatchMode, ConflictPrompt, Decision, DetectedFile, InquirePrompt};
use crate::error::{Result, TaskManagerError, file_write_failed};
use crate::hash;
use crate::installer::{self, render_managed_files, writer};
use crate::metadata::{self, InitMetadata, METADATA_PATH};
use crate::template::{TASK_MANAGER_DIR, WORK_DIRS};
use crate::ui::{self, FileOutcome, InitSummary};

/// Run init command
pub fn run(args: InitArgs) -> Result<()> {
    let ids = parse_assistants(&args.assistants);
    let assistants = validate_assistants(&ids)?;

    let destination = match args.destination_directory {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    println!(
        "Initializing task manager in {} for {}",
        destination.display(),
        ids.join(", ")
    );

    let mut prompt = InquirePrompt::new(0);
    let summary = init(&destination, &assistants, args.force, &mut prompt)?;
    ui::print_summary(&summary, &assistants);

    Ok(())
}

/// Initialize (or refresh) the task manager under `destination`.
///
/// With `force`, no baseline comparison happens and every managed file is
/// written from the templates.
pub fn init(
    destination: &Path,
    assistants: &[Assistant],
    force: bool,
    prompt: &mut dyn ConflictPrompt,
) -> Result<InitSummary> {
    prepare_destination(destination)?;

    let metadata_path = destination.join(METADATA_PATH);
    let baseline = metadata::load(&metadata_path);
    if baseline.is_none() {
        info!("no previous baseline, running as first init");
    }

    let candidates = render_managed_files(assistants)?;
    let detection_baseline = if force { None } else { baseline.as_ref() };
    let detected = conflict::detect(destination, candidates, detection_baseline);

    let decisions = resolve(&detected, force, prompt)?;

    let mut summary = InitSummary::default();
    let mut hashes = carried_over_hashes(destination, baseline.as_ref(), &detected);
    let mut first_failure = None;

    for file in &detected {
        let decision = decisions
            .get(file.relative_path.as_str())
            .copied()
            .unwrap_or(Decision::Overwrite);
        let previous_hash = baseline
            .as_ref()
            .and_then(|b| b.hash_for(&file.relative_path))
            .map(str::to_string);

        let outcome = match apply(destination, file, decision) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(path = %file.relative_path, error = %e, "file skipped");
                first_failure.get_or_insert(e);
                FileOutcome::Failed
            }
        };

        match outcome {
            FileOutcome::Kept | FileOutcome::Failed => {
                if let Some(previous) = previous_hash {
                    hashes.insert(file.relative_path.clone(), previous);
                }
            }
            FileOutcome::Created | FileOutcome::Updated | FileOutcome::Unchanged => {
                hashes.insert(
                    file.relative_path.clone(),
                    hash::hash_bytes(&file.new_content),
                );
            }
        }

        ui::print_file_outcome(&file.relative_path, outcome);
        summary.record(outcome);
    }

    for script in installer::install_missing_scripts(destination)? {
        ui::print_file_outcome(&script, FileOutcome::Created);
        summary.scripts += 1;
    }

    metadata::save(&metadata_path, &InitMetadata::new(hashes))?;
    debug!(path = %metadata_path.display(), "baseline saved");

    match first_failure {
        Some(e) => Err(e),
        None => Ok(summary),
    }
}

/// Create the task-manager skeleton. A permission error here aborts the run:
/// nothing else under the destination could be written either.
fn prepare_destination(destination: &Path) -> Result<()> {
    for dir in WORK_DIRS {
        let path: PathBuf = destination.join(TASK_MANAGER_DIR).join(dir);
        std::fs::create_dir_all(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                TaskManagerError::DestinationNotWritable {
                    path: destination.display().to_string(),
                    reason: e.to_string(),
                }
            } else {
                file_write_failed(&path, &e)
            }
        })?;
    }
    Ok(())
}

/// Ask about every user-modified file, in order
fn resolve<'a>(
    detected: &'a [DetectedFile],
    force: bool,
    prompt: &mut dyn ConflictPrompt,
) -> Result<HashMap<&'a str, Decision>> {
    let conflicts: Vec<&DetectedFile> = detected.iter().filter(|f| f.needs_decision()).collect();
    if conflicts.is_empty() {
        return Ok(HashMap::new());
    }

    let initial = if force {
        BatchMode::OverwriteAll
    } else {
        BatchMode::None
    };
    prompt.begin(conflicts.len());
    let decisions = conflict::resolver::resolve_conflicts(&conflicts, initial, prompt)?;

    Ok(conflicts
        .into_iter()
        .map(|f| f.relative_path.as_str())
        .zip(decisions)
        .collect())
}

/// Write a file according to its decision
fn apply(destination: &Path, file: &DetectedFile, decision: Decision) -> Result<FileOutcome> {
    if let Some(reason) = &file.read_error {
        return Err(TaskManagerError::FileReadFailed {
            path: destination.join(&file.relative_path).display().to_string(),
            reason: reason.clone(),
        });
    }

    if decision == Decision::Keep {
        return Ok(FileOutcome::Kept);
    }

    let outcome = match file.old_content.as_deref() {
        Some(old) if old == file.new_content.as_slice() => return Ok(FileOutcome::Unchanged),
        Some(_) => FileOutcome::Updated,
        None => FileOutcome::Created,
    };

    writer::write_atomic(&destination.join(&file.relative_path), &file.new_content)?;
    Ok(outcome)
}

/// Baseline entries for files this run does not render (e.g. an assistant
/// selected on an earlier run) survive as long as the file still exists.
fn carried_over_hashes(
    destination: &Path,
    baseline: Option<&InitMetadata>,
    detected: &[DetectedFile],
) -> BTreeMap<String, String> {
    let Some(baseline) = baseline else {
        return BTreeMap::new();
    };

    baseline
        .files
        .iter()
        .filter(|(path, _)| !detected.iter().any(|d| &d.relative_path == *path))
        .filter(|(path, _)| destination.join(path).exists())
        .map(|(path, hash)| (path.clone(), hash.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::resolver::Choice;
    use tempfile::TempDir;

    const CLAUDE_PLAN: &str = ".claude/commands/tasks/create-plan.md";
    const GEMINI_PLAN: &str = ".gemini/commands/tasks/create-plan.toml";

    struct ScriptedPrompt {
        answers: Vec<Choice>,
        asked: Vec<String>,
    }

    impl ScriptedPrompt {
        fn new(answers: &[Choice]) -> Self {
            Self {
                answers: answers.iter().rev().copied().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl ConflictPrompt for ScriptedPrompt {
        fn choose(&mut self, file: &DetectedFile, _diff: &str) -> Result<Choice> {
            self.asked.push(file.relative_path.clone());
            self.answers
                .pop()
                .ok_or_else(|| TaskManagerError::PromptFailed {
                    reason: "unexpected prompt".to_string(),
                })
        }
    }

    fn stored_hash(root: &Path, path: &str) -> Option<String> {
        metadata::load(&root.join(METADATA_PATH))?
            .files
            .get(path)
            .cloned()
    }

    #[test]
    fn first_run_creates_tree_and_baseline() {
        let temp = TempDir::new().unwrap();
        let mut prompt = ScriptedPrompt::new(&[]);

        let summary = init(
            temp.path(),
            &[Assistant::Claude, Assistant::Gemini],
            false,
            &mut prompt,
        )
        .unwrap();

        assert!(temp.path().join(".ai/task-manager/plans").is_dir());
        assert!(temp.path().join(".ai/task-manager/archive").is_dir());
        assert!(temp.path().join(CLAUDE_PLAN).is_file());
        assert!(temp.path().join(GEMINI_PLAN).is_file());
        assert_eq!(summary.updated + summary.kept + summary.unchanged, 0);
        assert!(summary.scripts > 0);

        let claude = std::fs::read(temp.path().join(CLAUDE_PLAN)).unwrap();
        assert_eq!(stored_hash(temp.path(), CLAUDE_PLAN), Some(hash::hash_bytes(&claude)));
        assert!(stored_hash(temp.path(), GEMINI_PLAN).is_some());

        let metadata = metadata::load(&temp.path().join(METADATA_PATH)).unwrap();
        assert!(metadata.files.keys().all(|k| !k.contains("config/scripts/")));
        assert!(prompt.asked.is_empty());
    }

    #[test]
    fn second_run_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let assistants = [Assistant::Claude, Assistant::Gemini];
        init(temp.path(), &assistants, false, &mut ScriptedPrompt::new(&[])).unwrap();
        let before = std::fs::read(temp.path().join(GEMINI_PLAN)).unwrap();

        let mut prompt = ScriptedPrompt::new(&[]);
        let summary = init(temp.path(), &assistants, false, &mut prompt).unwrap();

        assert!(prompt.asked.is_empty());
        assert_eq!(summary.created + summary.updated + summary.kept, 0);
        assert!(summary.unchanged > 0);
        assert_eq!(summary.scripts, 0);
        assert_eq!(std::fs::read(temp.path().join(GEMINI_PLAN)).unwrap(), before);
    }

    #[test]
    fn keep_mine_preserves_bytes_and_baseline() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), &[Assistant::Claude], false, &mut ScriptedPrompt::new(&[])).unwrap();
        let baseline_hash = stored_hash(temp.path(), CLAUDE_PLAN).unwrap();

        std::fs::write(temp.path().join(CLAUDE_PLAN), "my own plan command\n").unwrap();

        let mut prompt = ScriptedPrompt::new(&[Choice::KeepMine]);
        let summary = init(temp.path(), &[Assistant::Claude], false, &mut prompt).unwrap();

        assert_eq!(prompt.asked, vec![CLAUDE_PLAN]);
        assert_eq!(summary.kept, 1);
        assert_eq!(
            std::fs::read_to_string(temp.path().join(CLAUDE_PLAN)).unwrap(),
            "my own plan command\n"
        );
        assert_eq!(stored_hash(temp.path(), CLAUDE_PLAN), Some(baseline_hash));
    }

    #[test]
    fn overwrite_restores_template_and_updates_baseline() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), &[Assistant::Claude], false, &mut ScriptedPrompt::new(&[])).unwrap();
        let original = std::fs::read(temp.path().join(CLAUDE_PLAN)).unwrap();

        std::fs::write(temp.path().join(CLAUDE_PLAN), "edited\n").unwrap();

        let mut prompt = ScriptedPrompt::new(&[Choice::Overwrite]);
        let summary = init(temp.path(), &[Assistant::Claude], false, &mut prompt).unwrap();

        assert_eq!(summary.updated, 1);
        assert_eq!(std::fs::read(temp.path().join(CLAUDE_PLAN)).unwrap(), original);
        assert_eq!(
            stored_hash(temp.path(), CLAUDE_PLAN),
            Some(hash::hash_bytes(&original))
        );
    }

    #[test]
    fn keep_all_applies_to_remaining_conflicts() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), &[Assistant::Claude], false, &mut ScriptedPrompt::new(&[])).unwrap();

        let edited = [
            ".ai/task-manager/config/TASK_MANAGER.md",
            ".claude/commands/tasks/create-plan.md",
            ".claude/commands/tasks/generate-tasks.md",
        ];
        for path in edited {
            std::fs::write(temp.path().join(path), "local\n").unwrap();
        }

        let mut prompt = ScriptedPrompt::new(&[Choice::KeepAll]);
        let summary = init(temp.path(), &[Assistant::Claude], false, &mut prompt).unwrap();

        assert_eq!(prompt.asked.len(), 1);
        assert_eq!(summary.kept, 3);
        for path in edited {
            assert_eq!(
                std::fs::read_to_string(temp.path().join(path)).unwrap(),
                "local\n"
            );
        }
    }

    #[test]
    fn force_overwrites_without_prompting() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), &[Assistant::Claude], false, &mut ScriptedPrompt::new(&[])).unwrap();
        let original = std::fs::read(temp.path().join(CLAUDE_PLAN)).unwrap();
        std::fs::write(temp.path().join(CLAUDE_PLAN), "edited\n").unwrap();

        let mut prompt = ScriptedPrompt::new(&[]);
        init(temp.path(), &[Assistant::Claude], true, &mut prompt).unwrap();

        assert!(prompt.asked.is_empty());
        assert_eq!(std::fs::read(temp.path().join(CLAUDE_PLAN)).unwrap(), original);
    }

    #[test]
    fn force_never_touches_existing_scripts() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), &[Assistant::Claude], false, &mut ScriptedPrompt::new(&[])).unwrap();

        let script = temp
            .path()
            .join(".ai/task-manager/config/scripts/get-next-plan-id.sh");
        std::fs::write(&script, "#!/bin/sh\necho 42\n").unwrap();

        init(temp.path(), &[Assistant::Claude], true, &mut ScriptedPrompt::new(&[])).unwrap();
        assert_eq!(
            std::fs::read_to_string(&script).unwrap(),
            "#!/bin/sh\necho 42\n"
        );
    }

    #[test]
    fn deleted_file_is_recreated_without_prompt() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), &[Assistant::Claude], false, &mut ScriptedPrompt::new(&[])).unwrap();
        std::fs::remove_file(temp.path().join(CLAUDE_PLAN)).unwrap();

        let mut prompt = ScriptedPrompt::new(&[]);
        let summary = init(temp.path(), &[Assistant::Claude], false, &mut prompt).unwrap();

        assert!(prompt.asked.is_empty());
        assert_eq!(summary.created, 1);
        assert!(temp.path().join(CLAUDE_PLAN).exists());
    }

    #[test]
    fn corrupt_metadata_is_first_run() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), &[Assistant::Claude], false, &mut ScriptedPrompt::new(&[])).unwrap();

        std::fs::write(temp.path().join(CLAUDE_PLAN), "edited\n").unwrap();
        std::fs::write(temp.path().join(METADATA_PATH), "{ broken").unwrap();

        let mut prompt = ScriptedPrompt::new(&[]);
        init(temp.path(), &[Assistant::Claude], false, &mut prompt).unwrap();

        assert!(prompt.asked.is_empty());
        assert!(metadata::load(&temp.path().join(METADATA_PATH)).is_some());
    }

    #[test]
    fn baseline_of_unselected_assistant_is_carried_over() {
        let temp = TempDir::new().unwrap();
        init(
            temp.path(),
            &[Assistant::Claude, Assistant::Gemini],
            false,
            &mut ScriptedPrompt::new(&[]),
        )
        .unwrap();
        let gemini_hash = stored_hash(temp.path(), GEMINI_PLAN).unwrap();

        init(temp.path(), &[Assistant::Claude], false, &mut ScriptedPrompt::new(&[])).unwrap();
        assert_eq!(stored_hash(temp.path(), GEMINI_PLAN), Some(gemini_hash));
    }

    #[test]
    fn blocked_file_fails_alone_and_keeps_its_baseline() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), &[Assistant::Claude], false, &mut ScriptedPrompt::new(&[])).unwrap();
        let plan_hash = stored_hash(temp.path(), CLAUDE_PLAN).unwrap();

        let commands = temp.path().join(".claude/commands/tasks");
        std::fs::remove_dir_all(&commands).unwrap();
        std::fs::write(&commands, "not a directory").unwrap();
        let hook = ".ai/task-manager/config/hooks/POST_PLAN.md";
        std::fs::remove_file(temp.path().join(hook)).unwrap();

        let result = init(temp.path(), &[Assistant::Claude], false, &mut ScriptedPrompt::new(&[]));

        assert!(matches!(result, Err(TaskManagerError::FileReadFailed { .. })));
        assert!(temp.path().join(hook).is_file());
        assert_eq!(stored_hash(temp.path(), CLAUDE_PLAN), Some(plan_hash));
        assert!(stored_hash(temp.path(), hook).is_some());
    }

    #[test]
    fn prompt_failure_leaves_files_and_baseline_alone() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), &[Assistant::Claude], false, &mut ScriptedPrompt::new(&[])).unwrap();
        let metadata_before = std::fs::read(temp.path().join(METADATA_PATH)).unwrap();

        std::fs::write(temp.path().join(CLAUDE_PLAN), "edited\n").unwrap();
        std::fs::remove_file(temp.path().join(".claude/commands/tasks/refine-plan.md")).unwrap();

        let result = init(temp.path(), &[Assistant::Claude], false, &mut ScriptedPrompt::new(&[]));
        assert!(result.is_err());

        assert!(!temp.path().join(".claude/commands/tasks/refine-plan.md").exists());
        assert_eq!(
            std::fs::read(temp.path().join(METADATA_PATH)).unwrap(),
            metadata_before
        );
    }
}
