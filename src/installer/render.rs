//! Rendering of bundled templates into per-assistant output files

use std::path::Path;

use crate::assistant::{Assistant, OutputFormat};
use crate::error::Result;
use crate::template::substitution::{SubstitutionMode, substitute};
use crate::template::{self, CommandTemplate, convert};

/// A file the run wants on disk, produced fresh on every run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the destination root, `/`-separated
    pub relative_path: String,
    pub content: Vec<u8>,
}

/// Render one command template for one assistant
pub fn render_command(template: &CommandTemplate, assistant: Assistant) -> RenderedFile {
    let content = match assistant.output_format() {
        OutputFormat::Markdown => {
            substitute(&template.source, SubstitutionMode::MarkdownPassthrough).into_bytes()
        }
        OutputFormat::Toml => convert::convert_md_to_toml(&template.name, &template.parse())
            .into_bytes(),
    };

    RenderedFile {
        relative_path: to_key(&assistant.relative_output_path(&template.name)),
        content,
    }
}

/// Render every managed file for the selected assistants: the shared config
/// documents first, then each assistant's commands. Scripts are excluded.
pub fn render_managed_files(assistants: &[Assistant]) -> Result<Vec<RenderedFile>> {
    let mut rendered: Vec<RenderedFile> = template::task_manager_files()?
        .into_iter()
        .filter(|file| !file.is_script())
        .map(|file| RenderedFile {
            relative_path: file.destination_path(),
            content: file.content.into_owned(),
        })
        .collect();

    let commands = template::command_templates()?;
    for assistant in assistants {
        for command in &commands {
            rendered.push(render_command(command, *assistant));
        }
    }

    Ok(rendered)
}

/// Normalise a relative path into a `/`-separated metadata key
pub fn to_key(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
