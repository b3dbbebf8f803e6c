//! # Pricer Engine (Layer 3: Simulation and Dispatch)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing turns the Layer 1 types of `pricer_core` into prices:
//! - Seeded random sources and per-task seed derivation ([`rng`])
//! - The Monte Carlo kernel pricing European and arithmetic Asian calls
//!   and puts from one GBM path ensemble ([`mc`])
//! - Executors that run independent units of work sequentially or on a
//!   Rayon pool ([`dispatch`])
//! - Parallel evaluation of the kernel over a (strike, volatility) grid
//!   ([`grid`])
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::{OptionKind, SimulationParams};
//! use pricer_pricing::dispatch::RayonExecutor;
//! use pricer_pricing::grid::{linspace, GridEvaluator, ParameterGrid};
//! use pricer_pricing::mc::price_option;
//! use pricer_pricing::rng::PricerRng;
//!
//! // Single kernel run
//! let params = SimulationParams::new(100.0, 100.0, 0.25, 0.05, 52, 5_000).unwrap();
//! let prices = price_option(&params, &mut PricerRng::from_seed(42)).unwrap();
//! assert!(prices.euro_call > prices.asian_call);
//!
//! // Grid evaluation
//! let grid = ParameterGrid::new(linspace(90.0, 110.0, 3), linspace(0.1, 0.4, 3))
//!     .unwrap()
//!     .with_days(52)
//!     .with_paths(1_000);
//! let result = GridEvaluator::new(RayonExecutor::global()).evaluate(&grid).unwrap();
//! assert_eq!(result.surface(OptionKind::EuropeanPut).len(), 3);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for kernel estimates and grid
//!   cells, and `Serialize` for parameter and result grids.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
// Allow unknown lints for clippy compatibility across versions
#![allow(unknown_lints)]

pub mod dispatch;
pub mod grid;
pub mod mc;
pub mod rng;

// Re-export commonly used items for convenience
pub use dispatch::{CancellationToken, RayonExecutor, SequentialExecutor, TaskExecutor};
pub use grid::{GridError, GridEvaluator, GridEvaluatorConfig, ParameterGrid, ResultGrid};
pub use mc::{price_option, price_option_with_stats, KernelEstimate, PricingKernel};
pub use rng::{derive_task_seed, NormalSource, PricerRng};
