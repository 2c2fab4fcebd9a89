//! Error types for the pre-flight scan.
//!
//! The core reports a single domain failure, [`ScanError::BrokenPath`]. The other
//! variants cover I/O conditions the walk can hit that are not a dangling link.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure surfaced by discovery or by any scan worker. The first one wins.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Entry is neither a directory, a regular file, nor a resolvable symlink.
    /// Also raised for a configured source that does not exist.
    #[error("{} is either not a file or is a broken symlink", path.display())]
    BrokenPath { path: PathBuf },

    /// Directory exists but could not be listed (e.g. permission denied).
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A scan worker thread panicked before reporting.
    #[error("scan worker panicked")]
    WorkerPanicked,
}

impl ScanError {
    pub fn broken(path: impl Into<PathBuf>) -> Self {
        ScanError::BrokenPath { path: path.into() }
    }

    /// Offending path, when the failure is tied to one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ScanError::BrokenPath { path } | ScanError::Unreadable { path, .. } => Some(path),
            ScanError::WorkerPanicked => None,
        }
    }

    pub fn is_broken_path(&self) -> bool {
        matches!(self, ScanError::BrokenPath { .. })
    }
}

/// Result alias used by the scan core.
pub type Result<T> = std::result::Result<T, ScanError>;
