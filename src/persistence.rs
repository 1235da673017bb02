//! Atomic file writes for run artifacts

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::BenchError;

/// Writes `contents` to `path` through a temp file in the same directory,
/// so a crash never leaves a half-written artifact behind.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), BenchError> {
    let to_error = |source: std::io::Error| BenchError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(to_error)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir).map_err(to_error)?;
    temp_file.write_all(contents).map_err(to_error)?;
    temp_file.persist(path).map_err(|e| to_error(e.error))?;
    Ok(())
}

/// Writes a value as pretty-printed JSON
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), BenchError> {
    let json = serde_json::to_string_pretty(value)?;
    write_atomic(path, json.as_bytes())
}
