//! Atomic file write operations using temp-and-rename strategy.
//!
//! This module provides safe, atomic file writing that prevents corruption
//! from interrupted writes. A failed write never leaves a partial target file
//! or a stray temporary file behind.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// This function ensures atomic writes by:
/// 1. Writing content to a temporary file in the target's directory
/// 2. Syncing the temporary file to disk
/// 3. Atomically renaming the temporary file to the target path
///
/// The parent directory must already exist. If any step fails the temporary
/// file is removed and an existing target is left untouched.
///
/// # Examples
///
/// ```rust,no_run
/// use ackgen::utils::fs::atomic_write;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// atomic_write(Path::new("Acknowledgements.plist"), b"<plist/>")?;
/// # Ok(())
/// # }
/// ```
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).with_context(|| {
        format!(
            "Failed to create temp file in {}\n\nCheck file permissions and that directory exists",
            parent.display()
        )
    })?;

    temp.write_all(content)
        .with_context(|| format!("Failed to write to temp file: {}", temp.path().display()))?;

    temp.as_file().sync_all().with_context(|| "Failed to sync file to disk")?;

    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
