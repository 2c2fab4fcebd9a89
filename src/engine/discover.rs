//! Discovery: turn an upload job configuration into the list of locations to scan.
//!
//! Shallow problems are caught here, before any partition is dispatched: metadata files and
//! every fixed SmartSPIM level are validated eagerly. Generic sources are passed through
//! untouched; the parallel scan owns their existence check.

use log::debug;
use std::ffi::OsStr;
use std::path::Path;

use crate::engine::tools::{expand_level, list_children};
use crate::engine::validate::check_path;
use crate::error::Result;
use crate::utils::config::METADATA_EXTENSION;
use crate::{LocationList, ScanSettings, UploadJobConfig};

/// Validate the immediate `*.json` children of `metadata_dir`. Subdirectories are not entered.
/// A metadata directory that does not exist has nothing to check.
pub fn check_metadata_files(metadata_dir: &Path) -> Result<usize> {
    if !metadata_dir.is_dir() {
        debug!("No metadata directory at {}", metadata_dir.display());
        return Ok(0);
    }
    let files: Vec<_> = list_children(metadata_dir)?
        .into_iter()
        .filter(|p| p.extension() == Some(OsStr::new(METADATA_EXTENSION)))
        .collect();
    for file in &files {
        check_path(file)?;
    }
    debug!(
        "Checked {} metadata files in {}",
        files.len(),
        metadata_dir.display()
    );
    Ok(files.len())
}

/// Fixed-depth pre-expansion of one source.
///
/// Validates `source` and each of its first `levels` directory levels, then collects the next
/// level: directories go to `out` as scan units, anything else is validated on the spot.
/// Hidden entries are not listed at any level.
pub fn expand_fixed_levels(source: &Path, levels: usize, out: &mut LocationList) -> Result<()> {
    check_path(source)?;
    let mut entries = vec![source.to_path_buf()];
    for level in 1..=levels {
        entries = expand_level(&entries)?;
        for entry in &entries {
            check_path(entry)?;
        }
        debug!(
            "{}: level {} has {} entries",
            source.display(),
            level,
            entries.len()
        );
    }
    let before = out.len();
    for entry in expand_level(&entries)? {
        if entry.is_dir() {
            out.push(entry);
        } else {
            check_path(&entry)?;
        }
    }
    debug!(
        "{}: {} scan units below level {}",
        source.display(),
        out.len() - before,
        levels
    );
    Ok(())
}

/// Build the [`LocationList`] for `config`, in discovery order.
pub fn discover(config: &UploadJobConfig, settings: &ScanSettings) -> Result<LocationList> {
    if let Some(metadata_dir) = &config.metadata_dir {
        check_metadata_files(metadata_dir)?;
    }
    let mut locations = LocationList::new();
    for modality_config in &config.modalities {
        if config.needs_deep_expansion(&modality_config.modality) {
            debug!(
                "Expanding {} {} source {} ({} fixed levels)",
                config.platform,
                modality_config.modality,
                modality_config.source.display(),
                settings.deep_expansion_levels
            );
            expand_fixed_levels(
                &modality_config.source,
                settings.deep_expansion_levels,
                &mut locations,
            )?;
        } else {
            locations.push(modality_config.source.clone());
        }
    }
    Ok(locations)
}
