//! Engine module for discovery, path checks, and the CLI surface

pub mod arg_parser;
pub mod cli;
pub mod discover;
pub mod tools;
pub mod validate;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use cli::{apply_cli_to_settings, handle_run};
pub use discover::{check_metadata_files, discover, expand_fixed_levels};
pub use tools::{expand_level, is_hidden, list_children, partition_locations};
pub use validate::{check_path, is_acceptable};
