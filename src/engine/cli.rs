//! CLI command handler: load job settings, layer config file and flags, run the scan job.

use anyhow::{Context, Result};
use log::debug;

use crate::ScanSettings;
use crate::engine::arg_parser::Cli;
use crate::job::ScanJob;
use crate::utils::{
    apply_file_to_settings, load_preflight_toml, parse_job_settings, setup_logging,
};

/// Job settings JSON from `--job-settings` or `--job-settings-file`.
fn read_job_settings_json(cli: &Cli) -> Result<String> {
    match (&cli.job_settings, &cli.job_settings_file) {
        (Some(json), _) => Ok(json.clone()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("read job settings file {}", path.display())),
        (None, None) => anyhow::bail!("one of --job-settings or --job-settings-file is required"),
    }
}

/// Flags win over the config file, which wins over the job settings JSON.
pub fn apply_cli_to_settings(cli: &Cli, settings: &mut ScanSettings) {
    if let Some(p) = cli.partitions {
        settings.partition_count = p;
    }
    if let Some(l) = cli.levels {
        settings.deep_expansion_levels = l;
    }
    if cli.workers.is_some() {
        settings.num_workers = cli.workers;
    }
}

/// Run the pre-flight check described by `cli`.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let _ = dotenvy::dotenv();
    let file = cli.config.as_deref().map(load_preflight_toml).transpose()?;
    let verbose = cli
        .verbose
        .or_else(|| file.as_ref().and_then(|f| f.settings.verbose))
        .unwrap_or(false);
    setup_logging(verbose);

    let mut job = parse_job_settings(&read_job_settings_json(cli)?)?;
    if let Some(file) = &file {
        apply_file_to_settings(file, &mut job.settings);
    }
    apply_cli_to_settings(cli, &mut job.settings);
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        job.settings
    );

    ScanJob::from(job).run()?;
    Ok(())
}
