//! Dispatch of independent units of work onto executors.
//!
//! This module provides:
//! - [`UnitOfWork`] and [`FnTask`]: what gets dispatched
//! - [`TaskBatch`], [`TaskHandle`] and [`BatchResults`]: submit, then wait
//!   for all and read results back by handle
//! - [`TaskExecutor`]: the seam between evaluation logic and threading,
//!   with [`SequentialExecutor`] and [`RayonExecutor`] implementations
//! - [`CancellationToken`]: cooperative stop between units
//!
//! Executors own no pricing logic; anything satisfying [`TaskExecutor`] can
//! drive a grid evaluation.

mod batch;
mod cancel;
mod executor;
mod rayon_pool;

pub use batch::{BatchResults, FnTask, TaskBatch, TaskHandle, UnitOfWork};
pub use cancel::CancellationToken;
pub use executor::{SequentialExecutor, TaskExecutor};
pub use rayon_pool::RayonExecutor;

use thiserror::Error;

/// Errors raised while setting up an executor.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A dedicated pool was requested with zero threads.
    #[error("Invalid thread count: {0} (must be at least 1)")]
    InvalidThreadCount(usize),

    /// Rayon failed to build the pool.
    #[error("Failed to build worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),
}
