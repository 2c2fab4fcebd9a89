//! Recursive walk of one location: validate every non-directory entry beneath it.

use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::engine::validate::check_path;
use crate::error::{Result, ScanError};
use crate::utils::config::WALK_PROGRESS_INTERVAL;

use super::context::ScanContext;

/// Convert a walkdir error into [`ScanError`].
///
/// A missing entry (including a missing top-level location) is a broken path; anything else
/// the OS refused is unreadable.
pub fn to_scan_error(err: walkdir::Error, location: &Path) -> ScanError {
    let path = err
        .path()
        .map_or_else(|| location.to_path_buf(), PathBuf::from);
    match err.into_io_error() {
        Some(io) if io.kind() == std::io::ErrorKind::NotFound => ScanError::BrokenPath { path },
        Some(io) => ScanError::Unreadable { path, source: io },
        None => ScanError::BrokenPath { path },
    }
}

/// Walk `location` depth-first without following links and check each file and link found.
/// Returns the number of entries checked. Returns early (Ok) once `ctx` says to stop.
pub fn scan_location(location: &Path, ctx: &ScanContext) -> Result<usize> {
    let mut checked = 0_usize;
    for entry in WalkDir::new(location).follow_links(false) {
        if ctx.should_stop() {
            break;
        }
        let entry = entry.map_err(|e| to_scan_error(e, location))?;
        if entry.file_type().is_dir() {
            continue;
        }
        check_path(entry.path())?;
        checked += 1;
        if checked % WALK_PROGRESS_INTERVAL == 0 {
            debug!("{}: {} entries checked", location.display(), checked);
        }
    }
    Ok(checked)
}

/// Scan every location of one partition in order. Stops at the first failure.
pub fn scan_partition(locations: &[PathBuf], ctx: &ScanContext) -> Result<usize> {
    debug!("Scanning list: {:?}", locations);
    let total = locations.len();
    let mut checked = 0_usize;
    for (i, location) in locations.iter().enumerate() {
        if ctx.should_stop() {
            break;
        }
        debug!("Checking {}. On {} of {}", location.display(), i + 1, total);
        checked += scan_location(location, ctx)?;
    }
    Ok(checked)
}
