//! Worker-count configuration bounded by host parallelism.

use crate::errors::PoolError;

/// Validated worker-count setting for a [`MapPool`](crate::MapPool).
///
/// The upper bound is the number of logical CPUs reported by the host,
/// captured once when the config is created. The committed count always
/// satisfies `1 <= worker_count <= host_parallelism`.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    worker_count: usize,
    host_parallelism: usize,
}

impl PoolConfig {
    /// Creates a config defaulted to one worker per logical CPU.
    pub fn new() -> Self {
        let host_parallelism = num_cpus::get();
        Self {
            worker_count: host_parallelism,
            host_parallelism,
        }
    }

    /// Commits a new worker count.
    ///
    /// # Errors
    /// Returns [`PoolError::InvalidArgument`] if `count` is zero or exceeds
    /// the host parallelism. The previously committed count is kept.
    pub fn set_worker_count(&mut self, count: usize) -> Result<(), PoolError> {
        if count < 1 {
            return Err(PoolError::InvalidArgument(String::from(
                "worker count must be at least 1",
            )));
        }
        if count > self.host_parallelism {
            return Err(PoolError::InvalidArgument(format!(
                "worker count {} exceeds the {} logical CPUs available",
                count, self.host_parallelism
            )));
        }
        self.worker_count = count;
        Ok(())
    }

    /// The committed worker count.
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// The number of logical CPUs seen when this config was created.
    pub fn host_parallelism(&self) -> usize {
        self.host_parallelism
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}
