//! Parsing and validation of the `--assistants` argument

use crate::error::{Result, TaskManagerError};

use super::Assistant;

/// Split a comma-separated assistant list.
///
/// Empty entries are dropped and duplicates removed, keeping the first
/// occurrence's position. Surrounding whitespace is trimmed; case is kept.
pub fn parse_assistants(input: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for entry in input.split(',').map(str::trim) {
        if entry.is_empty() || seen.iter().any(|s| s == entry) {
            continue;
        }
        seen.push(entry.to_string());
    }
    seen
}

/// Resolve parsed identifiers into assistants, rejecting any unknown one.
pub fn validate_assistants(ids: &[String]) -> Result<Vec<Assistant>> {
    if ids.is_empty() {
        return Err(TaskManagerError::NoAssistantsSelected);
    }

    ids.iter()
        .map(|id| {
            Assistant::from_id(id).ok_or_else(|| TaskManagerError::AssistantNotSupported {
                assistant: id.clone(),
                supported: Assistant::supported_ids(),
            })
        })
        .collect()
}
