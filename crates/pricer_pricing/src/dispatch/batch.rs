//! Submission and collection of independent units of work.
//!
//! The grid evaluator only needs two primitives from a worker pool: submit a
//! unit and get a handle, then wait for everything and read results back by
//! handle. [`TaskBatch`] and [`BatchResults`] provide exactly that on top of
//! any [`TaskExecutor`].

use super::cancel::CancellationToken;
use super::executor::TaskExecutor;

/// An independent piece of work that runs once to completion.
pub trait UnitOfWork: Send {
    /// Value produced by the unit.
    type Output: Send;

    /// Runs the unit.
    fn run(self) -> Self::Output;
}

/// Adapter that turns a closure into a [`UnitOfWork`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::dispatch::{FnTask, UnitOfWork};
///
/// let unit = FnTask(|| 6 * 7);
/// assert_eq!(unit.run(), 42);
/// ```
pub struct FnTask<F>(
    /// Closure run by the unit.
    pub F,
);

impl<F, R> UnitOfWork for FnTask<F>
where
    F: FnOnce() -> R + Send,
    R: Send,
{
    type Output = R;

    #[inline]
    fn run(self) -> R {
        (self.0)()
    }
}

/// Identifies a submitted unit; equal to its submission index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(usize);

impl TaskHandle {
    /// Submission index of the unit.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Units waiting to be dispatched, in submission order.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::dispatch::{CancellationToken, FnTask, SequentialExecutor, TaskBatch};
///
/// let mut batch: TaskBatch<FnTask<fn() -> &'static str>> = TaskBatch::new();
/// let a = batch.submit(FnTask(|| "a"));
/// let b = batch.submit(FnTask(|| "b"));
///
/// let results = batch.wait_all(&SequentialExecutor, &CancellationToken::new());
/// assert_eq!(results.get(b), Some(&"b"));
/// assert_eq!(results.get(a), Some(&"a"));
/// ```
pub struct TaskBatch<U> {
    units: Vec<U>,
}

impl<U: UnitOfWork> TaskBatch<U> {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Creates an empty batch with room for `capacity` units.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            units: Vec::with_capacity(capacity),
        }
    }

    /// Queues a unit and returns its handle.
    pub fn submit(&mut self, unit: U) -> TaskHandle {
        self.units.push(unit);
        TaskHandle(self.units.len() - 1)
    }

    /// Number of queued units.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if nothing was submitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Dispatches every unit and blocks until all have finished or been
    /// skipped by cancellation.
    pub fn wait_all<E: TaskExecutor>(
        self,
        executor: &E,
        cancel: &CancellationToken,
    ) -> BatchResults<U::Output> {
        let expected = self.units.len();
        let slots = executor.execute(self.units, cancel);
        debug_assert_eq!(slots.len(), expected);
        BatchResults { slots }
    }
}

impl<U: UnitOfWork> Default for TaskBatch<U> {
    fn default() -> Self {
        Self::new()
    }
}

/// Results of a batch, addressable by [`TaskHandle`].
///
/// A slot is `None` only when its unit was skipped because the batch was
/// cancelled before the unit started.
#[derive(Debug)]
pub struct BatchResults<R> {
    slots: Vec<Option<R>>,
}

impl<R> BatchResults<R> {
    /// Result of one unit.
    #[inline]
    pub fn get(&self, handle: TaskHandle) -> Option<&R> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    /// Moves one result out, leaving the slot empty.
    #[inline]
    pub fn take(&mut self, handle: TaskHandle) -> Option<R> {
        self.slots.get_mut(handle.0).and_then(Option::take)
    }

    /// Total number of slots (submitted units).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` for an empty batch.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of units that ran.
    pub fn completed(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Slots in submission order.
    pub fn into_slots(self) -> Vec<Option<R>> {
        self.slots
    }
}
