//! Parameter, result and error types shared across the workspace.
//!
//! This module provides:
//! - `params`: [`SimulationParams`], the validated inputs of one kernel run
//! - `option_prices`: [`OptionPrices`] and the [`OptionKind`] selector
//! - `error`: [`KernelError`] for parameter and numeric failures

pub mod error;
pub mod option_prices;
pub mod params;

pub use error::KernelError;
pub use option_prices::{OptionKind, OptionPrices};
pub use params::SimulationParams;
