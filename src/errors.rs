//! Error types for the pool.
//!
//! This module defines the errors a mapping run can produce: rejected
//! configuration or input before any worker is spawned, and the first failure
//! raised by a work item once the run is in flight.

/// Represents errors that can occur while configuring or running the pool.
#[derive(Debug)]
pub enum PoolError {
    /// A configuration value or run argument was rejected before any work
    /// was scheduled.
    InvalidArgument(String),
    /// A work item failed; carries the message of the first failure seen.
    /// The run aborts and later failures from in-flight items are dropped.
    WorkerFailure(String),
}

impl std::fmt::Display for PoolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            PoolError::WorkerFailure(msg) => write!(f, "worker failed: {}", msg),
        }
    }
}

impl std::error::Error for PoolError {}
