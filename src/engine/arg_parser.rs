use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Check upload job sources for broken symlinks before the upload starts.
#[derive(Clone, Parser)]
#[command(name = "upload-preflight")]
#[command(about = "Scan the sources of an upload job for broken symlinks. Exits non-zero on the first one found.")]
#[command(group(ArgGroup::new("settings_source").required(true).args(["job_settings", "job_settings_file"])))]
pub struct Cli {
    /// Job settings as a JSON string: {"upload_configs": {...}, "n_partitions": 20, "num_of_smart_spim_levels": 3}.
    #[arg(long, short = 'j', value_name = "JSON")]
    pub job_settings: Option<String>,

    /// Read the job settings JSON from a file instead.
    #[arg(long, value_name = "FILE")]
    pub job_settings_file: Option<PathBuf>,

    /// TOML config file with a [settings] table (partitions, levels, workers, verbose).
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of partitions the discovered locations are split into.
    #[arg(long, short = 'p')]
    pub partitions: Option<usize>,

    /// Fixed SmartSPIM directory levels validated during discovery.
    #[arg(long, short = 'l')]
    pub levels: Option<usize>,

    /// Worker threads for the scan. Default: min(partitions, available threads).
    #[arg(long, short = 'w')]
    pub workers: Option<usize>,

    /// Verbose output (debug logging for this crate; overrides LOG_LEVEL).
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}
