mod task;
mod worker;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::thread;

use crate::config::PoolConfig;
use crate::errors::PoolError;
use crate::observer::{ErrorSink, LogErrorSink, ProgressObserver};
use crate::queue::TaskQueue;

use task::panic_message;
use worker::{worker_loop, WorkerHandle};

/// A bounded pool that maps a function over a sequence of inputs.
///
/// Worker threads are acquired when a run starts and joined before it
/// returns, so a `MapPool` holds no threads between runs and a run is
/// guaranteed to tear its pool down on every exit path. Runs take `&self`;
/// reconfiguring the worker count takes `&mut self` and therefore cannot
/// overlap a run in flight.
pub struct MapPool {
    config: PoolConfig,
    progress: Option<Arc<dyn ProgressObserver>>,
    error_sink: Arc<dyn ErrorSink>,
}

/// Builder for [`MapPool`].
pub struct MapPoolBuilder {
    worker_count: Option<usize>,
    progress: Option<Arc<dyn ProgressObserver>>,
    error_sink: Option<Arc<dyn ErrorSink>>,
}

impl MapPoolBuilder {
    pub fn new() -> Self {
        Self {
            worker_count: None,
            progress: None,
            error_sink: None,
        }
    }

    /// Requests a specific worker count instead of one worker per CPU.
    /// Validated when [`build`](MapPoolBuilder::build) is called.
    pub fn worker_count(mut self, count: usize) -> Self {
        self.worker_count = Some(count);
        self
    }

    /// Injects an observer that receives one signal per completed item.
    pub fn with_progress_observer(mut self, observer: Arc<dyn ProgressObserver>) -> Self {
        self.progress = Some(observer);
        self
    }

    /// Injects the sink that receives the error aborting a run. Defaults to
    /// [`LogErrorSink`].
    pub fn with_error_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.error_sink = Some(sink);
        self
    }

    /// # Errors
    /// Returns [`PoolError::InvalidArgument`] if a requested worker count is
    /// zero or exceeds the host parallelism.
    pub fn build(self) -> Result<MapPool, PoolError> {
        let mut config = PoolConfig::new();
        if let Some(count) = self.worker_count {
            config.set_worker_count(count)?;
        }
        Ok(MapPool {
            config,
            progress: self.progress,
            error_sink: self.error_sink.unwrap_or_else(|| Arc::new(LogErrorSink)),
        })
    }
}

impl Default for MapPoolBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MapPool {
    /// Creates a pool with one worker per logical CPU and the default
    /// logging error sink.
    pub fn new() -> Self {
        Self {
            config: PoolConfig::new(),
            progress: None,
            error_sink: Arc::new(LogErrorSink),
        }
    }

    /// Commits a new worker count for subsequent runs.
    ///
    /// # Errors
    /// Returns [`PoolError::InvalidArgument`] if `count` is zero or exceeds
    /// the host parallelism; the previously committed count is kept.
    pub fn set_worker_count(&mut self, count: usize) -> Result<(), PoolError> {
        self.config.set_worker_count(count)
    }

    /// The committed worker count.
    pub fn worker_count(&self) -> usize {
        self.config.worker_count()
    }

    /// The number of logical CPUs seen when this pool was created.
    pub fn host_parallelism(&self) -> usize {
        self.config.host_parallelism()
    }

    /// Applies `work` to every input, discarding per-item return values.
    ///
    /// Blocks until every item has completed or the first failure is
    /// observed.
    ///
    /// # Errors
    /// Returns [`PoolError::WorkerFailure`] wrapping the first panic raised
    /// by a work item; queued items that have not started are skipped.
    pub fn run<F, T, R>(&self, work: F, inputs: impl IntoIterator<Item = T>) -> Result<(), PoolError>
    where
        F: Fn(T) -> R + Send + Sync + 'static,
        T: Send + 'static,
        R: Send + 'static,
    {
        let items: Vec<T> = inputs.into_iter().collect();
        self.execute(work, items, false).map(|_| ())
    }

    /// Applies `work` to every input and returns the results in input order.
    ///
    /// `results[i]` is exactly `work(inputs[i])` regardless of which worker
    /// processed it or when it finished. The list is only materialized once
    /// every item has completed; a failed run returns no partial results.
    ///
    /// # Errors
    /// Returns [`PoolError::WorkerFailure`] wrapping the first panic raised
    /// by a work item.
    pub fn run_collect<F, T, R>(
        &self,
        work: F,
        inputs: impl IntoIterator<Item = T>,
    ) -> Result<Vec<R>, PoolError>
    where
        F: Fn(T) -> R + Send + Sync + 'static,
        T: Send + 'static,
        R: Send + 'static,
    {
        let items: Vec<T> = inputs.into_iter().collect();
        self.execute(work, items, true)
    }

    fn execute<F, T, R>(&self, work: F, inputs: Vec<T>, collect: bool) -> Result<Vec<R>, PoolError>
    where
        F: Fn(T) -> R + Send + Sync + 'static,
        T: Send + 'static,
        R: Send + 'static,
    {
        let total = inputs.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        let queue = TaskQueue::new();
        for entry in inputs.into_iter().enumerate() {
            queue.push(entry);
        }

        let worker_count = self.config.worker_count();
        log::debug!("dispatching {} items across {} workers", total, worker_count);

        let work = Arc::new(work);
        let abort = Arc::new(AtomicBool::new(false));
        let (outcome_tx, outcome_rx) = channel();

        let mut workers = Vec::with_capacity(worker_count);
        for id in 0..worker_count {
            let queue = queue.clone_inner();
            let work = Arc::clone(&work);
            let tx = outcome_tx.clone();
            let abort = Arc::clone(&abort);
            let handle = thread::spawn(move || worker_loop(id, queue, work, tx, abort));
            workers.push(WorkerHandle::new(id, handle));
        }
        drop(outcome_tx);

        let mut slots: Vec<Option<R>> = if collect {
            (0..total).map(|_| None).collect()
        } else {
            Vec::new()
        };
        let mut completed = 0usize;
        let mut failure = None;

        for (index, outcome) in outcome_rx.iter() {
            match outcome {
                Ok(value) => {
                    completed += 1;
                    if let Some(observer) = &self.progress {
                        observer.on_progress(completed, total);
                    }
                    if collect {
                        slots[index] = Some(value);
                    }
                    if completed == total {
                        break;
                    }
                }
                Err(payload) => {
                    failure = Some(PoolError::WorkerFailure(panic_message(payload)));
                    break;
                }
            }
        }

        // Teardown runs on every exit path: stop idle workers, wait for
        // in-flight items to finish.
        abort.store(true, Ordering::Release);
        for worker in &mut workers {
            worker.join();
        }

        if let Some(error) = failure {
            self.error_sink.on_error(&error);
            return Err(error);
        }

        if collect {
            let results = slots
                .into_iter()
                .map(|slot| slot.expect("finished run left an unfilled result slot"))
                .collect();
            Ok(results)
        } else {
            Ok(Vec::new())
        }
    }
}

impl Default for MapPool {
    fn default() -> Self {
        Self::new()
    }
}
