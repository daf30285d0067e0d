//! Idempotent README regeneration around a sentinel marker.
//!
//! Hand-authored content before the marker is preserved verbatim; the
//! marker and everything after it are rebuilt on every run. Only the
//! timestamp line changes between runs with unchanged inputs.

use std::path::Path;

use crate::error::Result;

/// Everything after this marker is regenerated on every run.
pub const MARKER: &str = "<!-- BEGIN AUTO-GENERATED -->";

/// Title used when no README exists yet.
pub const DEFAULT_TITLE: &str = "# Infrastructure\n\n";

/// Hand-authored content of an existing README, or the default title when
/// the file is missing or unreadable.
pub fn load_prefix(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => prefix_of(&content).to_string(),
        Err(_) => DEFAULT_TITLE.to_string(),
    }
}

/// Content before the sentinel marker, marker and generated tail excluded.
pub fn prefix_of(content: &str) -> &str {
    content.split(MARKER).next().unwrap_or(content)
}

/// New README content: preserved prefix, sentinel header block, then the
/// rendered sections.
pub fn merge(prefix: &str, timestamp: &str, sections: &[String]) -> String {
    let mut content = format!("{}\n\n", prefix.trim_end());
    content.push_str(MARKER);
    content.push('\n');
    content.push_str("> ⚠️ This section is automatically generated. Do not modify manually.\n");
    content.push_str(&format!("> Last updated: {timestamp}\n\n"));
    for section in sections {
        content.push_str(section);
    }
    content
}

/// Overwrite the README in place. The write is not atomic; a crash
/// mid-write can truncate the file.
pub fn write(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)?;
    Ok(())
}
