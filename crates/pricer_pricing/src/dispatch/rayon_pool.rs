//! Rayon-backed executor.
//!
//! Units are spread over a work-stealing pool with an indexed parallel
//! iterator, so the collected results come back in submission order however
//! the units were scheduled.

use super::batch::UnitOfWork;
use super::cancel::CancellationToken;
use super::executor::TaskExecutor;
use super::DispatchError;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Executor backed by Rayon.
///
/// Either borrows the process-wide global pool ([`global`](Self::global)) or
/// owns a dedicated pool with a fixed thread count
/// ([`with_threads`](Self::with_threads)).
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::dispatch::{CancellationToken, FnTask, RayonExecutor, TaskExecutor};
///
/// let executor = RayonExecutor::with_threads(2).unwrap();
/// let units: Vec<_> = (0..8).map(|i| FnTask(move || i + 1)).collect();
/// let out = executor.execute(units, &CancellationToken::new());
///
/// assert_eq!(out[7], Some(8));
/// assert_eq!(executor.worker_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RayonExecutor {
    pool: Option<ThreadPool>,
}

impl RayonExecutor {
    /// Uses Rayon's global pool.
    pub fn global() -> Self {
        Self { pool: None }
    }

    /// Builds a dedicated pool with `threads` workers.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidThreadCount`] for zero threads and
    /// [`DispatchError::PoolBuild`] if the OS refuses to spawn the workers.
    pub fn with_threads(threads: usize) -> Result<Self, DispatchError> {
        if threads == 0 {
            return Err(DispatchError::InvalidThreadCount(threads));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("mcgrid-worker-{i}"))
            .build()?;
        Ok(Self { pool: Some(pool) })
    }

    /// Dedicated pool when `threads` is `Some`, global pool otherwise.
    pub fn from_thread_count(threads: Option<usize>) -> Result<Self, DispatchError> {
        match threads {
            Some(n) => Self::with_threads(n),
            None => Ok(Self::global()),
        }
    }

    /// Returns `true` if this executor owns its pool.
    pub fn is_dedicated(&self) -> bool {
        self.pool.is_some()
    }
}

impl TaskExecutor for RayonExecutor {
    fn execute<U: UnitOfWork>(
        &self,
        units: Vec<U>,
        cancel: &CancellationToken,
    ) -> Vec<Option<U::Output>> {
        let run = || {
            units
                .into_par_iter()
                .map(|unit| {
                    if cancel.is_cancelled() {
                        None
                    } else {
                        Some(unit.run())
                    }
                })
                .collect::<Vec<_>>()
        };

        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    fn worker_count(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    fn name(&self) -> &'static str {
        if self.is_dedicated() {
            "rayon-dedicated"
        } else {
            "rayon-global"
        }
    }
}
