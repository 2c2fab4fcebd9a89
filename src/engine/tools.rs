//! Directory listing and partition utilities

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::Result;
use crate::pipeline::walk::to_scan_error;

/// Dotfiles are skipped by discovery listings, like a shell `*` would. Compared on raw bytes so
/// names that are not valid UTF-8 are handled like any other.
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// Immediate, non-hidden children of `dir`, sorted by name. Broken links are returned too.
pub fn list_children(dir: &Path) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();
    let mut children = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| to_scan_error(e, dir))?;
        if !is_hidden(entry.file_name()) {
            children.push(entry.into_path());
        }
    }
    Ok(children)
}

/// Next directory level below `parents`: the children of every parent that is a directory
/// (symlinked directories included), in parent order. Non-directory parents contribute nothing.
pub fn expand_level(parents: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut next = Vec::new();
    for parent in parents.iter().filter(|p| p.is_dir()) {
        next.extend(list_children(parent)?);
    }
    Ok(next)
}

/// Positional, order-preserving split of `locations` into at most `partitions` contiguous groups.
///
/// Groups have `ceil(len / partitions)` entries (last one shorter), so fewer groups than requested
/// can come back. `partitions` is clamped to `1..=len`.
pub fn partition_locations(locations: &[PathBuf], partitions: usize) -> Vec<&[PathBuf]> {
    if locations.is_empty() {
        return Vec::new();
    }
    let partitions = partitions.clamp(1, locations.len());
    let size = locations.len().div_ceil(partitions);
    locations.chunks(size).collect()
}
