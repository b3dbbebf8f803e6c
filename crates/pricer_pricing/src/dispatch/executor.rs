//! Executor abstraction and the single-threaded reference executor.

use super::batch::UnitOfWork;
use super::cancel::CancellationToken;

/// Runs a batch of independent units.
///
/// Implementations may run units in any order and on any thread, but the
/// returned vector must be in submission order: slot `k` holds the output of
/// `units[k]`, or `None` if the unit was skipped because `cancel` was set
/// before it started.
pub trait TaskExecutor: Send + Sync {
    /// Runs every unit, honouring `cancel` between units.
    fn execute<U: UnitOfWork>(
        &self,
        units: Vec<U>,
        cancel: &CancellationToken,
    ) -> Vec<Option<U::Output>>;

    /// Number of workers units are spread over.
    fn worker_count(&self) -> usize;

    /// Short label used in logs.
    fn name(&self) -> &'static str;
}

/// Runs units one after another on the calling thread.
///
/// Serves as the reference against which parallel executors are checked.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialExecutor;

impl TaskExecutor for SequentialExecutor {
    fn execute<U: UnitOfWork>(
        &self,
        units: Vec<U>,
        cancel: &CancellationToken,
    ) -> Vec<Option<U::Output>> {
        units
            .into_iter()
            .map(|unit| {
                if cancel.is_cancelled() {
                    None
                } else {
                    Some(unit.run())
                }
            })
            .collect()
    }

    fn worker_count(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}
