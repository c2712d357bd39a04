//! Worker logic for the pool.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use crossbeam::queue::SegQueue;

use super::task::{run_item, ItemOutcome};

pub(crate) struct WorkerHandle {
    id: usize,
    thread: Option<thread::JoinHandle<()>>,
}

impl WorkerHandle {
    pub(crate) fn new(id: usize, thread: thread::JoinHandle<()>) -> Self {
        Self {
            id,
            thread: Some(thread),
        }
    }

    pub(crate) fn join(&mut self) {
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                log::warn!("worker {} terminated abnormally", self.id);
            }
        }
    }
}

/// Worker thread main loop.
///
/// Pops indexed items off the shared queue until the queue drains or the
/// abort flag is raised, reporting each outcome back to the collector. A
/// worker that observes its own item fail stops immediately; the collector
/// raises the abort flag for the rest.
pub(crate) fn worker_loop<F, T, R>(
    id: usize,
    queue: Arc<SegQueue<(usize, T)>>,
    work: Arc<F>,
    outcomes: Sender<ItemOutcome<R>>,
    abort: Arc<AtomicBool>,
) where
    F: Fn(T) -> R + Send + Sync + 'static,
    T: Send + 'static,
    R: Send + 'static,
{
    log::trace!("worker {} started", id);
    while !abort.load(Ordering::Acquire) {
        match queue.pop() {
            Some((index, item)) => {
                let outcome = run_item(work.as_ref(), item);
                let failed = outcome.is_err();
                // A closed channel means the collector already returned.
                if outcomes.send((index, outcome)).is_err() || failed {
                    break;
                }
            }
            None => break,
        }
    }
    log::trace!("worker {} exiting", id);
}
