//! Upload pre-flight: find broken symlinks under an upload job's sources before the upload starts

pub mod engine;
pub mod error;
pub mod job;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

pub use error::{Result, ScanError};
pub use job::ScanJob;
pub use utils::{JobSettings, parse_job_settings};

/// Single entry point: discover the locations of `config` and scan them with `settings`.
///
/// Returns the first [`ScanError`] found, during discovery or in any scan partition.
/// Logging goes through the `log` facade; install a logger first if you want the debug lines.
///
/// ```ignore
/// let job = upload_preflight::parse_job_settings(json)?;
/// upload_preflight::preflight(&job.upload_configs, &job.settings)?;
/// ```
pub fn preflight(config: &UploadJobConfig, settings: &ScanSettings) -> Result<()> {
    ScanJob::new(config.clone(), *settings).run()
}
