//! Monte Carlo pricing kernel.
//!
//! This module provides the unit of work the grid evaluator dispatches: a
//! GBM simulation that prices the European and arithmetic Asian call and
//! put from one path ensemble.
//!
//! # Architecture
//!
//! ```text
//! PricingKernel
//! ├── PathEnsemble   (per-path price, running sum, step draws)
//! ├── NormalSource   (injected random source, e.g. PricerRng)
//! └── run()
//!     ├── validate parameters
//!     ├── advance ensemble `days` times
//!     └── discounted payoff means + standard errors
//! ```
//!
//! # Examples
//!
//! ## Single run
//!
//! ```rust
//! use pricer_core::types::SimulationParams;
//! use pricer_pricing::mc::price_option;
//! use pricer_pricing::rng::PricerRng;
//!
//! let params = SimulationParams::new(100.0, 100.0, 0.25, 0.05, 260, 10_000).unwrap();
//! let mut rng = PricerRng::from_seed(42);
//!
//! let prices = price_option(&params, &mut rng).unwrap();
//! assert!(prices.is_finite());
//! ```
//!
//! ## Workspace reuse
//!
//! ```rust
//! use pricer_core::types::SimulationParams;
//! use pricer_pricing::mc::PricingKernel;
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut kernel = PricingKernel::with_capacity(10_000);
//! let base = SimulationParams::default();
//!
//! for sigma in [0.1, 0.2, 0.3] {
//!     let mut rng = PricerRng::from_seed(1);
//!     let estimate = kernel.run(&base.with_volatility(sigma), &mut rng).unwrap();
//!     println!("σ={sigma}: {:?}", estimate.prices);
//! }
//! ```

pub mod kernel;
pub mod workspace;

// Re-exports for convenient access
pub use kernel::{price_option, price_option_with_stats, KernelEstimate, PricingKernel};
pub use workspace::PathEnsemble;
