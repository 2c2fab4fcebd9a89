//! upload-preflight CLI: scan upload job sources for broken symlinks.

use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use upload_preflight::engine::arg_parser::Cli;
use upload_preflight::engine::handle_run;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
