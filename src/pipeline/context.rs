//! Scan context and tuning: shared failure state passed into every worker, and pool sizing.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::ScanSettings;
use crate::error::ScanError;

/// Partition and worker counts derived from [`ScanSettings`] for one location list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanTuning {
    pub partitions: usize,
    pub num_threads: usize,
}

impl ScanTuning {
    pub fn new(settings: &ScanSettings, n_locations: usize) -> Self {
        let partitions = settings.effective_partitions(n_locations);
        Self {
            partitions,
            num_threads: settings.effective_workers(partitions),
        }
    }
}

/// One unit of work: a contiguous slice of the location list, tagged with its index for logs.
pub struct Partition {
    pub index: usize,
    pub locations: Vec<PathBuf>,
}

/// Shared state for the worker pool. Only the first recorded failure is kept.
#[derive(Clone, Default)]
pub struct ScanContext {
    first_error: Arc<Mutex<Option<ScanError>>>,
    stop: Arc<AtomicBool>,
}

impl ScanContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `err` if nothing was recorded yet, and tell the other workers to stop.
    pub fn record_failure(&self, err: ScanError) {
        let mut slot = self
            .first_error
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        slot.get_or_insert(err);
        self.stop.store(true, Ordering::Relaxed);
    }

    /// True once any worker has failed. Best effort: checked between entries, not preemptive.
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Take the recorded failure, if any.
    pub fn take_failure(&self) -> Option<ScanError> {
        self.first_error
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

/// Queue of partitions feeding the workers.
pub struct ScanChannels {
    pub partition_tx: Sender<Partition>,
    pub partition_rx: Receiver<Partition>,
    pub ctx: ScanContext,
}

/// Capacity holds every partition so the producer never blocks and can drop its sender right away.
pub fn create_scan_channels(partitions: usize) -> ScanChannels {
    let (partition_tx, partition_rx) = bounded::<Partition>(partitions.max(1));
    ScanChannels {
        partition_tx,
        partition_rx,
        ctx: ScanContext::new(),
    }
}
