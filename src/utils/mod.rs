pub mod config;
pub mod job_settings;
pub mod logger;
pub mod preflight_toml;

pub use config::*;
pub use job_settings::{JobSettings, parse_job_settings, parse_upload_configs, strip_derived_fields};
pub use logger::{parse_log_level, setup_logging};
pub use preflight_toml::{PreflightToml, apply_file_to_settings, load_preflight_toml};
