//! Scan job: discovery, then the parallel scan, with elapsed time logged.

use log::debug;
use std::time::Instant;

use crate::engine::discover::discover;
use crate::error::Result;
use crate::pipeline::scan_locations;
use crate::utils::JobSettings;
use crate::{ScanSettings, UploadJobConfig};

/// Pre-flight check for one upload job. Holds its configuration read-only for the whole run.
#[derive(Clone, Debug)]
pub struct ScanJob {
    config: UploadJobConfig,
    settings: ScanSettings,
}

impl ScanJob {
    pub fn new(config: UploadJobConfig, settings: ScanSettings) -> Self {
        Self { config, settings }
    }

    pub fn config(&self) -> &UploadJobConfig {
        &self.config
    }

    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    /// Discover locations, then scan them. Discovery errors are returned before any partition
    /// is dispatched; scan errors are the first one any worker hit.
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        let locations = discover(&self.config, &self.settings)?;
        debug!("Total directories to scan: {}", locations.len());
        scan_locations(&locations, &self.settings)?;
        debug!("Task took {:?}", start_time.elapsed());
        Ok(())
    }
}

impl From<JobSettings> for ScanJob {
    fn from(job: JobSettings) -> Self {
        ScanJob::new(job.upload_configs, job.settings)
    }
}
