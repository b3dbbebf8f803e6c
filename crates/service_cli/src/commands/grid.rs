//! Grid command implementation
//!
//! Evaluates the kernel over linspace(strike) × linspace(sigma) on the
//! Rayon executor and prints the four price surfaces.

use pricer_pricing::dispatch::RayonExecutor;
use pricer_pricing::grid::{linspace, GridEvaluator, GridEvaluatorConfig, ParameterGrid, ResultGrid};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

use crate::config::GridConfig;
use crate::output::{write_grid, GridReport};
use crate::Result;

/// Builds the parameter grid described by `config`.
pub fn build_grid(config: &GridConfig) -> Result<ParameterGrid> {
    let grid = ParameterGrid::new(
        linspace(config.strike_min, config.strike_max, config.n_strikes),
        linspace(config.sigma_min, config.sigma_max, config.n_sigmas),
    )?
    .with_spot(config.spot)
    .with_rate(config.rate)
    .with_days(config.days)
    .with_paths(config.paths);
    Ok(grid)
}

/// Evaluates the grid, logging progress as cells complete.
pub fn evaluate(config: &GridConfig) -> Result<ResultGrid> {
    let grid = build_grid(config)?;
    let executor = RayonExecutor::from_thread_count(config.threads)?;
    let evaluator = GridEvaluator::with_config(
        executor,
        GridEvaluatorConfig {
            base_seed: config.seed,
            fail_fast: config.fail_fast,
        },
    );

    let total = grid.len();
    let done = AtomicUsize::new(0);
    let result = evaluator.evaluate_streaming(&grid, |outcome| {
        let n = done.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(
            row = outcome.row,
            col = outcome.col,
            ok = outcome.result.is_ok(),
            "{}/{} cells",
            n,
            total
        );
    })?;
    Ok(result)
}

/// Run the grid command
pub fn run(config: &GridConfig) -> Result<()> {
    info!(
        "Evaluating {}x{} grid: strikes [{}, {}], sigmas [{}, {}]",
        config.n_strikes,
        config.n_sigmas,
        config.strike_min,
        config.strike_max,
        config.sigma_min,
        config.sigma_max
    );

    let result = evaluate(config)?;
    let report = GridReport::new(
        &result,
        config.spot,
        config.rate,
        config.days,
        config.paths,
        config.seed,
    );

    let stdout = std::io::stdout();
    write_grid(&mut stdout.lock(), &report, config.format)
}
