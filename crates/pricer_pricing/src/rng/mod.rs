//! # Random Number Generation Infrastructure
//!
//! This module provides the random source the Monte Carlo kernel draws
//! from, and the seed derivation that keeps grid cells statistically
//! independent.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators support seeding for deterministic sequences
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//! - **Injectability**: The kernel takes any [`NormalSource`]; no global generator
//! - **Independence**: One generator per unit of work, seeded by [`derive_task_seed`]
//!
//! ## Module Structure
//!
//! - [`prng`]: Pseudo-random number generator wrapper with seed management
//! - [`source`]: The [`NormalSource`] trait consumed by the kernel
//! - [`seed`]: Per-task seed derivation
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::{derive_task_seed, NormalSource, PricerRng};
//!
//! // One generator per task, reproducible from (base seed, task index)
//! let mut rng = PricerRng::from_seed(derive_task_seed(42, 0));
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_standard_normal(&mut buffer);
//! ```

pub mod prng;
pub mod seed;
pub mod source;

// Public re-exports
pub use prng::PricerRng;
pub use seed::derive_task_seed;
pub use source::NormalSource;
