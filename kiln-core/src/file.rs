//! File emission under a no-overwrite policy.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Write a newly generated file.
///
/// Refuses to touch an existing file: generation is additive-only and must
/// never clobber a file the user may have edited. Parent directories are
/// created as needed, and content goes through a sibling temp file followed
/// by a rename so a reader never observes a truncated file.
pub fn emit(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        return Err(Error::FileExists {
            path: path.to_path_buf(),
        });
    }
    write_file(path, content)
}

/// Write a file only if it does not exist yet.
///
/// The relaxed variant used when seeding a project: an existing file is
/// reported as skipped rather than a conflict.
pub fn write_if_missing(path: &Path, content: &str) -> Result<WriteResult> {
    if path.exists() {
        return Ok(WriteResult::Skipped);
    }
    write_file(path, content)?;
    Ok(WriteResult::Written)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io("create directory", parent, e))?;
    }
    let tmp = path.with_extension("kiln-tmp");
    fs::write(&tmp, content).map_err(|e| Error::io("write", &tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| Error::io("rename into place", path, e))?;
    Ok(())
}
