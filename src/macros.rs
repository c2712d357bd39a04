//! # Macros for `parmap`
//!
//! This module contains macros to simplify usage of the `parmap` library:
//! building pools, launching mapping runs, and printing progress counters.

/// Creates a [`MapPool`](crate::MapPool) with an optional worker count.
///
/// Expands to the builder call, so the expression evaluates to a
/// `Result<MapPool, PoolError>`.
///
/// # Examples
/// ```rust
/// use parmap::map_pool;
///
/// let pool = map_pool!().unwrap();
/// let single = map_pool!(workers: 1).unwrap();
/// assert_eq!(single.worker_count(), 1);
/// ```
#[macro_export]
macro_rules! map_pool {
    () => {
        $crate::MapPoolBuilder::new().build()
    };
    (workers: $count:expr) => {
        $crate::MapPoolBuilder::new().worker_count($count).build()
    };
}

/// Launches a mapping run on a pool.
///
/// Without the trailing `collect`, per-item return values are discarded and
/// the expression evaluates to `Result<(), PoolError>`; with it, results are
/// returned in input order as `Result<Vec<_>, PoolError>`.
///
/// # Examples
/// ```rust
/// use parmap::{run_map, MapPool};
///
/// let pool = MapPool::new();
///
/// run_map!(pool, |n: u64| n + 1, vec![1, 2, 3]).unwrap();
///
/// let doubled = run_map!(pool, |n: u64| n * 2, vec![1, 2, 3], collect).unwrap();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
#[macro_export]
macro_rules! run_map {
    ($pool:expr, $work:expr, $inputs:expr) => {
        $pool.run($work, $inputs)
    };
    ($pool:expr, $work:expr, $inputs:expr, collect) => {
        $pool.run_collect($work, $inputs)
    };
}

/// Prints the current progress counters of a run.
///
/// # Example
/// ```rust
/// use parmap::observer::{AtomicProgressObserver, ProgressCounters};
/// use parmap::{log_progress, MapPoolBuilder};
/// use std::sync::Arc;
///
/// let counters = Arc::new(ProgressCounters::new());
/// let observer = Arc::new(AtomicProgressObserver::new(counters.clone()));
/// let pool = MapPoolBuilder::new()
///     .with_progress_observer(observer)
///     .build()
///     .unwrap();
///
/// pool.run(|n: u32| n * n, 0..10).unwrap();
/// log_progress!(counters);
/// ```
#[macro_export]
macro_rules! log_progress {
    ($counters:expr) => {
        println!(
            "Completed: {} / {}",
            $counters
                .completed
                .load(std::sync::atomic::Ordering::SeqCst),
            $counters.total.load(std::sync::atomic::Ordering::SeqCst)
        );
    };
}
