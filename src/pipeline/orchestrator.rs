use crossbeam_channel::Receiver;
use log::debug;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use crate::ScanSettings;
use crate::engine::tools::partition_locations;
use crate::error::{Result, ScanError};
use crate::pipeline;

use super::context::{Partition, ScanContext};
use super::walk::scan_partition;

/// Single scan worker: pull partitions until the queue closes or another worker has failed.
fn scan_worker_loop(partition_rx: Receiver<Partition>, ctx: ScanContext) {
    while let Ok(partition) = partition_rx.recv() {
        if ctx.should_stop() {
            break;
        }
        match scan_partition(&partition.locations, &ctx) {
            Ok(checked) => debug!(
                "Partition {} done: {} entries checked",
                partition.index, checked
            ),
            Err(err) => {
                debug!("Partition {} failed: {}", partition.index, err);
                ctx.record_failure(err);
                break;
            }
        }
    }
}

/// Spawn `num_threads` scan workers reading from `partition_rx`. Caller must drop its sender so workers exit.
pub fn spawn_scan_workers(
    partition_rx: &Receiver<Partition>,
    ctx: &ScanContext,
    num_threads: usize,
) -> Vec<JoinHandle<()>> {
    (0..num_threads)
        .map(|_| {
            let partition_rx = partition_rx.clone();
            let ctx = ctx.clone();
            thread::spawn(move || scan_worker_loop(partition_rx, ctx))
        })
        .collect()
}

/// Join scan workers. A panicked worker counts as a failure.
pub fn shutdown_scan_workers(worker_handles: Vec<JoinHandle<()>>, ctx: &ScanContext) {
    for h in worker_handles {
        if h.join().is_err() {
            ctx.record_failure(ScanError::WorkerPanicked);
        }
    }
}

/// Main orchestrator: split `locations` into partitions and scan them on a bounded worker pool.
/// Returns the first failure any worker hit.
/// Partitions → channel → workers (recursive walk + check) → first-error slot.
pub fn scan_locations(locations: &[PathBuf], settings: &ScanSettings) -> Result<()> {
    if locations.is_empty() {
        debug!("No locations to scan");
        return Ok(());
    }
    let tuning = pipeline::ScanTuning::new(settings, locations.len());
    let groups = partition_locations(locations, tuning.partitions);
    debug!(
        "Scanning {} locations in {} partitions on {} workers",
        locations.len(),
        groups.len(),
        tuning.num_threads
    );

    let channels = pipeline::create_scan_channels(groups.len());
    let worker_handles =
        spawn_scan_workers(&channels.partition_rx, &channels.ctx, tuning.num_threads);
    drop(channels.partition_rx);

    for (index, group) in groups.into_iter().enumerate() {
        let partition = Partition {
            index,
            locations: group.to_vec(),
        };
        if channels.partition_tx.send(partition).is_err() {
            break;
        }
    }
    // Dropping the last sender closes the channel so workers exit.
    drop(channels.partition_tx);

    shutdown_scan_workers(worker_handles, &channels.ctx);
    pipeline::check_for_first_failure(&channels.ctx)
}
