//! Parallel evaluation of the pricing kernel over a (strike, volatility)
//! grid.
//!
//! This module provides:
//! - [`ParameterGrid`] and [`linspace`]: the axes and shared parameters
//! - [`GridEvaluator`]: fan-out of one kernel run per cell onto any
//!   [`TaskExecutor`](crate::dispatch::TaskExecutor), fan-in by handle
//! - [`ResultGrid`]: the assembled N × M estimates and per-option surfaces
//! - [`direct_evaluate_cell`]: single-cell reference evaluation
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::OptionKind;
//! use pricer_pricing::dispatch::RayonExecutor;
//! use pricer_pricing::grid::{linspace, GridEvaluator, ParameterGrid};
//!
//! let grid = ParameterGrid::new(linspace(90.0, 110.0, 5), linspace(0.1, 0.4, 5))
//!     .unwrap()
//!     .with_days(52)
//!     .with_paths(2_000);
//!
//! let result = GridEvaluator::new(RayonExecutor::global()).evaluate(&grid).unwrap();
//! for row in result.surface(OptionKind::AsianCall) {
//!     println!("{:?}", row);
//! }
//! ```

mod error;
mod evaluator;
mod params;
mod result;

pub use error::GridError;
pub use evaluator::{
    direct_evaluate_cell, GridCellOutcome, GridEvaluator, GridEvaluatorConfig, DEFAULT_BASE_SEED,
};
pub use params::{linspace, ParameterGrid};
pub use result::{GridCellResult, ResultGrid};
