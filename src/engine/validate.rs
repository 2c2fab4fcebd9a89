//! Single-entry acceptance check. Every other component goes through [`check_path`].

use std::path::Path;

use crate::error::{Result, ScanError};

/// True if `path` is a directory, a regular file, or a symlink whose target exists.
///
/// `is_dir`/`is_file` follow links, so a link to a live file or dir already passes there;
/// the last arm catches links to other live targets (fifo, socket, device). Link targets
/// are never walked.
pub fn is_acceptable(path: &Path) -> bool {
    path.is_dir() || path.is_file() || (path.is_symlink() && path.exists())
}

/// Fail with [`ScanError::BrokenPath`] unless [`is_acceptable`] holds for `path`.
pub fn check_path(path: &Path) -> Result<()> {
    if is_acceptable(path) {
        Ok(())
    } else {
        Err(ScanError::broken(path))
    }
}
