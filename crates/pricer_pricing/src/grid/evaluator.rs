//! Parallel evaluation of a parameter grid.
//!
//! Every cell becomes one [`UnitOfWork`] submitted in row-major order. Each
//! unit owns a [`PricerRng`] seeded by [`derive_task_seed`] from the
//! evaluator's base seed and the cell's submission index, so a cell's result
//! depends only on `(base_seed, index, parameters)` and never on which worker
//! ran it or when.
//!
//! # Architecture
//!
//! ```text
//! GridEvaluator::evaluate(&grid)
//! ├── submit N×M GridTasks to a TaskBatch (row-major)
//! ├── TaskBatch::wait_all(&executor, &token)   (fan-out / fan-in)
//! └── assemble by handle
//!     ├── lowest-index failure  -> GridError::TaskFailed
//!     ├── skipped cells          -> GridError::Cancelled
//!     └── otherwise              -> ResultGrid
//! ```
//!
//! # Fail-fast
//!
//! Units share the lowest submission index that has failed so far. A unit
//! whose index lies above it is skipped without running; units below it
//! always run. The reported failure is therefore the lowest failing index
//! of the grid whatever order the executor picks.

use super::error::GridError;
use super::params::ParameterGrid;
use super::result::ResultGrid;
use crate::dispatch::{CancellationToken, TaskBatch, TaskExecutor, UnitOfWork};
use crate::mc::{KernelEstimate, PricingKernel};
use crate::rng::{derive_task_seed, PricerRng};
use pricer_core::types::{KernelError, SimulationParams};
use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Default base seed for grid evaluations.
pub const DEFAULT_BASE_SEED: u64 = 42;

thread_local! {
    /// One kernel workspace per worker thread, reused across cells. Its
    /// buffers shrink when a later run needs far fewer paths.
    static KERNEL: RefCell<PricingKernel> = RefCell::new(PricingKernel::new());
}

/// Evaluator settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridEvaluatorConfig {
    /// Seed every per-cell stream is derived from.
    pub base_seed: u64,
    /// Skip queued cells once any cell has failed.
    pub fail_fast: bool,
}

impl Default for GridEvaluatorConfig {
    fn default() -> Self {
        Self {
            base_seed: DEFAULT_BASE_SEED,
            fail_fast: true,
        }
    }
}

impl GridEvaluatorConfig {
    /// Sets the base seed.
    pub fn with_base_seed(mut self, base_seed: u64) -> Self {
        self.base_seed = base_seed;
        self
    }

    /// Enables or disables fail-fast.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}

/// Result of one cell, as seen by a streaming observer.
#[derive(Clone, Debug, PartialEq)]
pub struct GridCellOutcome {
    /// Strike index.
    pub row: usize,
    /// Volatility index.
    pub col: usize,
    /// Strike of the cell.
    pub strike: f64,
    /// Volatility of the cell.
    pub sigma: f64,
    /// Kernel output or failure.
    pub result: Result<KernelEstimate, KernelError>,
}

type Observer<'a> = &'a (dyn Fn(&GridCellOutcome) + Sync);

/// Lowest submission index that has failed so far in one evaluation.
#[derive(Debug)]
struct FailureFloor(AtomicUsize);

impl FailureFloor {
    fn new() -> Self {
        Self(AtomicUsize::new(usize::MAX))
    }

    #[inline]
    fn record(&self, index: usize) {
        self.0.fetch_min(index, Ordering::AcqRel);
    }

    #[inline]
    fn is_below(&self, index: usize) -> bool {
        self.0.load(Ordering::Acquire) < index
    }
}

/// One grid cell as a unit of work.
struct GridTask<'a> {
    index: usize,
    row: usize,
    col: usize,
    params: SimulationParams,
    seed: u64,
    observer: Option<Observer<'a>>,
    /// Shared when fail-fast is on.
    floor: Option<&'a FailureFloor>,
}

impl UnitOfWork for GridTask<'_> {
    /// `None` when a lower-index cell had already failed.
    type Output = Option<GridCellOutcome>;

    fn run(self) -> Option<GridCellOutcome> {
        if self.floor.is_some_and(|floor| floor.is_below(self.index)) {
            return None;
        }

        let mut rng = PricerRng::from_seed(self.seed);
        let result = KERNEL.with(|kernel| kernel.borrow_mut().run(&self.params, &mut rng));

        match &result {
            Ok(_) => debug!(row = self.row, col = self.col, "Grid cell completed"),
            Err(e) => {
                debug!(row = self.row, col = self.col, error = %e, "Grid cell failed");
                if let Some(floor) = self.floor {
                    floor.record(self.index);
                }
            }
        }

        let outcome = GridCellOutcome {
            row: self.row,
            col: self.col,
            strike: self.params.strike,
            sigma: self.params.volatility,
            result,
        };
        if let Some(observer) = self.observer {
            observer(&outcome);
        }
        Some(outcome)
    }
}

/// Dispatches a [`ParameterGrid`] onto a [`TaskExecutor`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::dispatch::RayonExecutor;
/// use pricer_pricing::grid::{linspace, GridEvaluator, ParameterGrid};
///
/// let grid = ParameterGrid::new(linspace(90.0, 110.0, 3), linspace(0.1, 0.3, 2))
///     .unwrap()
///     .with_days(26)
///     .with_paths(1_000);
///
/// let evaluator = GridEvaluator::new(RayonExecutor::global());
/// let result = evaluator.evaluate(&grid).unwrap();
///
/// assert_eq!(result.shape(), (3, 2));
/// ```
#[derive(Debug)]
pub struct GridEvaluator<E> {
    executor: E,
    config: GridEvaluatorConfig,
}

impl<E: TaskExecutor> GridEvaluator<E> {
    /// Creates an evaluator with the default configuration.
    pub fn new(executor: E) -> Self {
        Self::with_config(executor, GridEvaluatorConfig::default())
    }

    /// Creates an evaluator with an explicit configuration.
    pub fn with_config(executor: E, config: GridEvaluatorConfig) -> Self {
        Self { executor, config }
    }

    /// Evaluator configuration.
    #[inline]
    pub fn config(&self) -> &GridEvaluatorConfig {
        &self.config
    }

    /// Underlying executor.
    #[inline]
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Evaluates every cell and blocks until all have completed.
    ///
    /// # Errors
    ///
    /// [`GridError::TaskFailed`] for the failing cell with the lowest
    /// submission index; no partial grid is returned.
    pub fn evaluate(&self, grid: &ParameterGrid) -> Result<ResultGrid, GridError> {
        self.run(grid, None, &CancellationToken::new())
    }

    /// Like [`evaluate`](Self::evaluate), but calls `observer` from the
    /// worker thread as each cell finishes, in completion order.
    pub fn evaluate_streaming<F>(
        &self,
        grid: &ParameterGrid,
        observer: F,
    ) -> Result<ResultGrid, GridError>
    where
        F: Fn(&GridCellOutcome) + Sync,
    {
        let observer: Observer<'_> = &observer;
        self.run(grid, Some(observer), &CancellationToken::new())
    }

    /// Like [`evaluate`](Self::evaluate), but stops starting new cells once
    /// `token` is cancelled. A cell failure never cancels `token`.
    ///
    /// # Errors
    ///
    /// [`GridError::Cancelled`] if any cell was skipped. A cell failure takes
    /// precedence and is reported as [`GridError::TaskFailed`].
    pub fn evaluate_with_cancellation(
        &self,
        grid: &ParameterGrid,
        token: &CancellationToken,
    ) -> Result<ResultGrid, GridError> {
        self.run(grid, None, token)
    }

    fn run(
        &self,
        grid: &ParameterGrid,
        observer: Option<Observer<'_>>,
        cancel: &CancellationToken,
    ) -> Result<ResultGrid, GridError> {
        let (rows, cols) = grid.shape();
        let total = grid.len();
        let start = Instant::now();

        info!(
            rows,
            cols,
            days = grid.days(),
            paths = grid.paths(),
            executor = self.executor.name(),
            workers = self.executor.worker_count(),
            "Starting grid evaluation"
        );

        let failure_floor = FailureFloor::new();
        let floor = self.config.fail_fast.then_some(&failure_floor);

        let mut batch = TaskBatch::with_capacity(total);
        let handles: Vec<_> = (0..total)
            .map(|index| {
                let (row, col) = grid.coordinates(index);
                batch.submit(GridTask {
                    index,
                    row,
                    col,
                    params: grid.cell_params(row, col),
                    seed: derive_task_seed(self.config.base_seed, index),
                    observer,
                    floor,
                })
            })
            .collect();

        let mut results = batch.wait_all(&self.executor, cancel);
        let outcomes: Vec<_> = handles
            .into_iter()
            .map(|handle| results.take(handle).flatten())
            .collect();
        let completed = outcomes.iter().filter(|o| o.is_some()).count();

        let mut cells = Vec::with_capacity(total);
        let mut skipped = false;
        for outcome in outcomes {
            match outcome {
                Some(GridCellOutcome {
                    result: Ok(estimate),
                    ..
                }) => cells.push(estimate),
                Some(GridCellOutcome {
                    row,
                    col,
                    strike,
                    sigma,
                    result: Err(source),
                }) => {
                    warn!(row, col, strike, sigma, error = %source, "Grid evaluation failed");
                    return Err(GridError::TaskFailed {
                        row,
                        col,
                        strike,
                        sigma,
                        source,
                    });
                }
                None => skipped = true,
            }
        }

        if skipped {
            warn!(completed, total, "Grid evaluation cancelled");
            return Err(GridError::Cancelled { completed, total });
        }

        info!(
            cells = total,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Grid evaluation completed"
        );
        Ok(ResultGrid::from_cells(
            grid.strikes().to_vec(),
            grid.sigmas().to_vec(),
            cells,
        ))
    }
}

/// Evaluates one cell on the calling thread with the seed the evaluator
/// would give it.
///
/// For a given `base_seed`, the result equals cell `(row, col)` of
/// [`GridEvaluator::evaluate`] under any executor.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::dispatch::SequentialExecutor;
/// use pricer_pricing::grid::{
///     direct_evaluate_cell, GridEvaluator, ParameterGrid, DEFAULT_BASE_SEED,
/// };
///
/// let grid = ParameterGrid::new(vec![100.0, 110.0], vec![0.2])
///     .unwrap()
///     .with_days(12)
///     .with_paths(200);
/// let full = GridEvaluator::new(SequentialExecutor).evaluate(&grid).unwrap();
/// let cell = direct_evaluate_cell(&grid, 1, 0, DEFAULT_BASE_SEED).unwrap();
///
/// assert_eq!(full.get(1, 0), Some(&cell));
/// ```
pub fn direct_evaluate_cell(
    grid: &ParameterGrid,
    row: usize,
    col: usize,
    base_seed: u64,
) -> Result<KernelEstimate, GridError> {
    grid.check_cell(row, col)?;
    let params = grid.cell_params(row, col);
    let mut rng = PricerRng::from_seed(derive_task_seed(base_seed, grid.index_of(row, col)));

    PricingKernel::with_capacity(params.paths)
        .run(&params, &mut rng)
        .map_err(|source| GridError::TaskFailed {
            row,
            col,
            strike: params.strike,
            sigma: params.volatility,
            source,
        })
}
