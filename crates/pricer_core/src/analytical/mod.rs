//! Analytical (closed-form) reference prices.
//!
//! These formulas check the Monte Carlo kernel rather than replace it:
//!
//! - **European options**: Black-Scholes, matched by the kernel's European
//!   legs for any step count
//! - **Geometric average Asian options**: discrete-monitoring closed form,
//!   a lower bound for the arithmetic Asian call
//!
//! # Usage
//!
//! ```rust
//! use pricer_core::analytical::{black_scholes_call, geometric_asian_call};
//!
//! let european = black_scholes_call(100.0, 100.0, 0.05, 0.25, 1.0);
//! let asian = geometric_asian_call(100.0, 100.0, 0.05, 0.25, 1.0, 260);
//! assert!(asian < european);
//! ```

pub mod asian;
pub mod black_scholes;
pub mod distributions;

pub use asian::{geometric_asian_call, geometric_asian_put};
pub use black_scholes::{black_scholes_call, black_scholes_put};
pub use distributions::norm_cdf;
