use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::MetricTable;
use super::parser;

/// Reasons a file is refused before any line is parsed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0} (expected .log)")]
    UnsupportedExtension(String),
    #[error("file is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

/// A decoded and parsed log file.
#[derive(Debug, Clone)]
pub struct LoadedLog {
    /// File name shown in the UI.
    pub source: String,
    /// Number of text lines in the file, matching or not.
    pub total_lines: usize,
    pub table: MetricTable,
}

impl LoadedLog {
    /// Lines that did not carry a full metrics record.
    pub fn skipped_lines(&self) -> usize {
        self.total_lines - self.table.len()
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read and parse a training log from disk. Only `.log` files are accepted.
pub fn load_file(path: &Path) -> Result<LoadedLog> {
    check_extension(path)?;

    let bytes = std::fs::read(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    load_bytes(&name, &bytes)
}

/// Parse an in-memory log, e.g. a file dropped onto the window.
pub fn load_bytes(name: &str, bytes: &[u8]) -> Result<LoadedLog> {
    check_extension(Path::new(name))?;

    let text = std::str::from_utf8(bytes)
        .map_err(|e| LoadError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })
        .with_context(|| format!("decoding {name}"))?;

    let total_lines = text.lines().count();
    let table = parser::parse(text.lines());

    log::debug!(
        "{name}: {} of {total_lines} lines matched",
        table.len()
    );

    Ok(LoadedLog {
        source: name.to_string(),
        total_lines,
        table,
    })
}

fn check_extension(path: &Path) -> Result<(), LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "log" => Ok(()),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}
