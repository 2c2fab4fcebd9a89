//! Load an optional TOML config file (CLI only). Lib callers build [`ScanSettings`] directly.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::ScanSettings;

#[derive(Debug, Default, Deserialize)]
pub struct PreflightToml {
    #[serde(default)]
    pub settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsSection {
    pub partitions: Option<usize>,
    pub levels: Option<usize>,
    pub workers: Option<usize>,
    pub verbose: Option<bool>,
}

/// Read and parse the TOML file at `path`.
pub fn load_preflight_toml(path: &Path) -> Result<PreflightToml> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse config file {}", path.display()))
}

/// Overwrite settings field from file when present.
macro_rules! apply_file_opt {
    ($file:expr, $settings:expr, $file_field:ident => $settings_field:ident) => {
        if let Some(v) = $file.$file_field {
            $settings.$settings_field = v;
        }
    };
}

/// Apply file config to settings (only fields present in the file). Call before applying CLI flags.
pub fn apply_file_to_settings(file: &PreflightToml, settings: &mut ScanSettings) {
    let section = &file.settings;
    apply_file_opt!(section, settings, partitions => partition_count);
    apply_file_opt!(section, settings, levels => deep_expansion_levels);
    if section.workers.is_some() {
        settings.num_workers = section.workers;
    }
}
