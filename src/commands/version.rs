//! Version command implementation

use std::env::consts::{ARCH, OS};

use crate::assistant::Assistant;
use crate::error::Result;
use crate::metadata::METADATA_PATH;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", version_report());
    Ok(())
}

/// Version, build and layout details, as printed by `version`
fn version_report() -> String {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };

    format!(
        "{name} {version}\n\n\
         Build info:\n  \
         Minimum Rust: {rust}\n  \
         Profile: {profile}\n  \
         Target: {OS}-{ARCH}\n\n\
         Assistants: {assistants}\n\
         Baseline: {METADATA_PATH}\n",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        rust = env!("CARGO_PKG_RUST_VERSION"),
        assistants = Assistant::supported_ids(),
    )
}
