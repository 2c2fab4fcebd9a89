//! Application configuration constants.
//! Defaults and environment names in one place.

// ---- Scan defaults ----

/// Defaults for [`ScanSettings`](crate::ScanSettings) when the job settings leave them out.
pub struct ScanDefaults;

impl ScanDefaults {
    /// Partitions the location list is split into.
    pub const PARTITION_COUNT: usize = 20;
    /// Fixed SmartSPIM levels validated during discovery.
    pub const DEEP_EXPANSION_LEVELS: usize = 3;
}

// ---- Worker threads ----

/// Thread limits for the scan pool.
/// Use [`WorkerThreadLimits::current()`] to fill `all_threads` from rayon.
#[derive(Clone, Copy, Debug)]
pub struct WorkerThreadLimits {
    /// Available threads (from rayon); set by [`WorkerThreadLimits::current()`].
    pub all_threads: usize,
}

impl WorkerThreadLimits {
    /// Build limits with `all_threads` set from `rayon::current_num_threads()`.
    pub fn current() -> Self {
        Self {
            all_threads: rayon::current_num_threads(),
        }
    }
}

// ---- Logging ----

/// Environment variable holding the log level (Python-style names accepted).
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Level used when `LOG_LEVEL` is unset or unrecognized.
pub const DEFAULT_LOG_LEVEL: &str = "WARNING";

// ---- Job settings ----

/// Derived fields stripped from `upload_configs` before strict validation.
pub struct DerivedFields;

impl DerivedFields {
    /// Computed at the top level of the upload configuration.
    pub const UPLOAD_CONFIG: &'static [&'static str] = &["s3_prefix"];
    /// Computed on each modality entry.
    pub const MODALITY: &'static [&'static str] = &["output_folder_name"];
}

/// Extension of the metadata files checked during discovery.
pub const METADATA_EXTENSION: &str = "json";

/// A location walk logs a progress line (debug) every this many checked entries.
pub const WALK_PROGRESS_INTERVAL: usize = 100_000;
