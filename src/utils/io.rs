//! File I/O primitives with consistent error handling.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read file contents with standardized error handling.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(operation, e.to_string()))
}

/// Write content to file with standardized error handling.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io(operation, e.to_string()))
}

/// Write content to file atomically (write to .tmp, then rename).
///
/// The rename is atomic on POSIX filesystems, so readers see either the old
/// content or the new content, never a partial write.
pub fn write_file_atomic(path: &Path, content: &str, operation: &str) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| Error::io(operation, format!("Invalid path: {}", path.display())))?;

    let filename = path
        .file_name()
        .ok_or_else(|| Error::io(operation, format!("Invalid path: {}", path.display())))?;

    let tmp_path = parent.join(format!("{}.tmp", filename.to_string_lossy()));

    fs::write(&tmp_path, content)
        .map_err(|e| Error::io(format!("{} (write temp)", operation), e.to_string()))?;

    fs::rename(&tmp_path, path)
        .map_err(|e| Error::io(format!("{} (rename)", operation), e.to_string()))?;

    Ok(())
}
