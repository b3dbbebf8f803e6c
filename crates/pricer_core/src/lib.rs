//! # pricer_core: Foundation types for the Monte Carlo option grid
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Simulation inputs: `SimulationParams` (`types::params`)
//! - Kernel output: `OptionPrices` and `OptionKind` (`types::option_prices`)
//! - Error taxonomy: `KernelError` (`types::error`)
//! - Closed-form references: Black-Scholes and geometric Asian (`analytical`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::analytical::black_scholes_put;
//! use pricer_core::types::{OptionKind, OptionPrices, SimulationParams};
//!
//! let params = SimulationParams::new(100.0, 110.0, 0.2, 0.05, 260, 10_000).unwrap();
//! let (s, k, r, v) = (params.spot, params.strike, params.rate, params.volatility);
//! let reference = black_scholes_put(s, k, r, v, 1.0);
//!
//! let prices = OptionPrices::new(0.0, reference, 0.0, 0.0);
//! assert_eq!(prices.get(OptionKind::EuropeanPut), reference);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SimulationParams`, `OptionPrices` and `OptionKind`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod types;
