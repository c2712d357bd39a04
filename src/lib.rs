//! # parmap
//!
//! `parmap` is a Rust library that maps a function over a sequence of
//! independent inputs using a bounded pool of worker threads, returning
//! results in input order.
//!
//! ## Features
//! - Fixed-size worker pool, bounded by the host's logical CPU count.
//! - Results collected in input order, independent of completion order.
//! - First failure aborts the run; unstarted items are never executed.
//! - Per-run pool acquisition with guaranteed teardown on every exit path.
//! - Injectable progress observer and error sink.
//!
//! ## Usage
//!
//! ### Basic Usage
//! ```rust
//! use parmap::MapPool;
//!
//! // One worker per logical CPU by default.
//! let pool = MapPool::new();
//!
//! // Apply a function to each input, discarding per-item return values.
//! pool.run(|name: &str| println!("hello, {}", name), vec!["a", "b", "c"])
//!     .unwrap();
//! ```
//!
//! ### Collecting Results
//! ```rust
//! use parmap::MapPool;
//!
//! let pool = MapPool::new();
//!
//! // results[i] is exactly work(inputs[i]), whatever the completion order.
//! let doubled = pool.run_collect(|n: u64| n * 2, vec![1, 2, 3, 4]).unwrap();
//! assert_eq!(doubled, vec![2, 4, 6, 8]);
//! ```
//!
//! ### Choosing the Number of Workers
//! ```rust
//! use parmap::MapPoolBuilder;
//!
//! // Requested counts are validated against the host's CPU count; zero and
//! // oversubscribed counts are rejected.
//! let mut pool = MapPoolBuilder::new().worker_count(1).build().unwrap();
//! assert_eq!(pool.worker_count(), 1);
//!
//! assert!(pool.set_worker_count(0).is_err());
//! assert_eq!(pool.worker_count(), 1);
//! ```
//!
//! ### Observing Progress
//! ```rust
//! use parmap::observer::{AtomicProgressObserver, ProgressCounters};
//! use parmap::MapPoolBuilder;
//! use std::sync::atomic::Ordering;
//! use std::sync::Arc;
//!
//! let counters = Arc::new(ProgressCounters::new());
//! let observer = Arc::new(AtomicProgressObserver::new(counters.clone()));
//!
//! let pool = MapPoolBuilder::new()
//!     .with_progress_observer(observer)
//!     .build()
//!     .unwrap();
//!
//! pool.run(|n: u32| n + 1, 0..8).unwrap();
//!
//! assert_eq!(counters.completed.load(Ordering::SeqCst), 8);
//! assert_eq!(counters.total.load(Ordering::SeqCst), 8);
//! ```
//!
//! ### Handling Failures
//! ```rust
//! use parmap::{MapPool, PoolError};
//!
//! let pool = MapPool::new();
//!
//! // The first panicking work item aborts the run. No partial results are
//! // returned, and the error carries the panic message.
//! let outcome = pool.run_collect(
//!     |n: u32| {
//!         if n == 3 {
//!             panic!("item {} is unprocessable", n);
//!         }
//!         n
//!     },
//!     0..10,
//! );
//!
//! assert!(matches!(outcome, Err(PoolError::WorkerFailure(_))));
//! ```

mod config;
mod errors;
mod macros;
pub mod observer;
pub mod pool;
mod queue;

pub use config::PoolConfig;
pub use errors::PoolError;
pub use pool::{MapPool, MapPoolBuilder};

/// Maps `work` over `inputs` using one freshly spawned thread per item,
/// without the bounded pool.
///
/// Only useful as a baseline to compare the pool against; a panicking item
/// resumes its panic on the calling thread.
///
/// # Example
/// ```rust
/// let squares = parmap::run_unpooled(|n: u64| n * n, vec![1, 2, 3]);
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
#[cfg(any(debug_assertions, test, feature = "bench"))]
pub fn run_unpooled<F, T, R>(work: F, inputs: impl IntoIterator<Item = T>) -> Vec<R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
    T: Send + 'static,
    R: Send + 'static,
{
    let work = std::sync::Arc::new(work);
    let handles: Vec<_> = inputs
        .into_iter()
        .map(|item| {
            let work = std::sync::Arc::clone(&work);
            std::thread::spawn(move || work(item))
        })
        .collect();

    handles
        .into_iter()
        .map(|h| h.join().unwrap_or_else(|payload| std::panic::resume_unwind(payload)))
        .collect()
}
