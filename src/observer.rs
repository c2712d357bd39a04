//! Progress and error reporting hooks for the pool.
//!
//! This module defines the two collaborator traits a [`MapPool`](crate::MapPool)
//! reports to while a run is in flight: a progress observer that receives one
//! signal per completed work item, and an error sink that receives the error
//! that aborted a run. Both are injected so the pool stays free of
//! presentation concerns.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::PoolError;

/// A trait for observing run progress.
///
/// The pool calls [`on_progress`](ProgressObserver::on_progress) exactly once
/// per completed work item, from the thread that invoked the run. `completed`
/// grows monotonically from 1 to `total` on a successful run; on an aborted
/// run the signals stop at the failure point.
pub trait ProgressObserver: Send + Sync {
    /// Called after each work item completes.
    ///
    /// # Arguments
    /// - `completed`: number of items finished so far.
    /// - `total`: number of items submitted to the run.
    fn on_progress(&self, completed: usize, total: usize);
}

/// A trait for receiving the error that aborted a run.
///
/// The pool calls [`on_error`](ErrorSink::on_error) once, after the workers
/// have been torn down and before the error is returned to the caller.
pub trait ErrorSink: Send + Sync {
    /// Called with the first failure observed during a run.
    fn on_error(&self, error: &PoolError);
}

/// Stores run progress in atomic counters.
///
/// - `completed`: items finished in the most recent run.
/// - `total`: items submitted to the most recent run.
pub struct ProgressCounters {
    /// Number of work items finished so far.
    pub completed: AtomicUsize,
    /// Number of work items submitted.
    pub total: AtomicUsize,
}

impl ProgressCounters {
    /// Creates counters initialized to zero.
    pub fn new() -> Self {
        Self {
            completed: AtomicUsize::new(0),
            total: AtomicUsize::new(0),
        }
    }
}

impl Default for ProgressCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// A default [`ProgressObserver`] that publishes progress into shared
/// [`ProgressCounters`], so any thread can poll the state of a run.
pub struct AtomicProgressObserver {
    /// Shared counter storage.
    pub counters: Arc<ProgressCounters>,
}

impl AtomicProgressObserver {
    /// Creates an observer writing into the provided counters.
    pub fn new(counters: Arc<ProgressCounters>) -> Self {
        Self { counters }
    }
}

impl ProgressObserver for AtomicProgressObserver {
    fn on_progress(&self, completed: usize, total: usize) {
        self.counters.completed.store(completed, Ordering::SeqCst);
        self.counters.total.store(total, Ordering::SeqCst);
    }
}

/// A default [`ErrorSink`] that forwards the aborting error to the `log`
/// facade at error level.
pub struct LogErrorSink;

impl ErrorSink for LogErrorSink {
    fn on_error(&self, error: &PoolError) {
        log::error!("{}", error);
    }
}
