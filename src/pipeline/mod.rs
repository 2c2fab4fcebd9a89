//! Pipeline components: context, per-location walk, worker pool, error handling.

pub mod context;
pub mod error_handler;
pub mod orchestrator;
pub mod walk;

pub use context::{Partition, ScanChannels, ScanContext, ScanTuning, create_scan_channels};
pub use error_handler::check_for_first_failure;
pub use orchestrator::{scan_locations, shutdown_scan_workers, spawn_scan_workers};
pub use walk::{scan_location, scan_partition, to_scan_error};
