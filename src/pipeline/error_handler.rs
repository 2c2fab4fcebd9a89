use crate::error::Result;

use super::context::ScanContext;

/// Scan result: the first failure recorded by any worker, or Ok. Call after joining the workers.
pub fn check_for_first_failure(ctx: &ScanContext) -> Result<()> {
    match ctx.take_failure() {
        Some(err) => {
            log::debug!("Scan failed: {}", err);
            Err(err)
        }
        None => Ok(()),
    }
}
