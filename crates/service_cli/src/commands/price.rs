//! Price command implementation
//!
//! Runs the kernel once for a single (strike, sigma) and prints the four
//! prices with their standard errors.

use pricer_core::analytical::{
    black_scholes_call, black_scholes_put, geometric_asian_call, geometric_asian_put,
};
use pricer_core::types::{OptionPrices, SimulationParams};
use pricer_pricing::mc::price_option_with_stats;
use pricer_pricing::rng::PricerRng;
use std::time::Instant;
use tracing::info;

use crate::config::GridConfig;
use crate::output::{write_price, PriceReport};
use crate::Result;

/// Closed-form references for the four options.
fn references(params: &SimulationParams) -> OptionPrices {
    let (s, k, r, v) = (params.spot, params.strike, params.rate, params.volatility);
    OptionPrices::new(
        black_scholes_call(s, k, r, v, 1.0),
        black_scholes_put(s, k, r, v, 1.0),
        geometric_asian_call(s, k, r, v, 1.0, params.days),
        geometric_asian_put(s, k, r, v, 1.0, params.days),
    )
}

/// Run the price command
pub fn run(config: &GridConfig, strike: f64, sigma: f64, compare: bool) -> Result<()> {
    let params = SimulationParams::new(
        config.spot,
        strike,
        sigma,
        config.rate,
        config.days,
        config.paths,
    )?;

    info!("Starting pricing...");
    info!("  Strike: {}, sigma: {}", strike, sigma);
    info!("  Monte Carlo paths: {}, days: {}", config.paths, config.days);

    let start = Instant::now();
    let estimate = price_option_with_stats(&params, &mut PricerRng::from_seed(config.seed))?;
    info!(elapsed_ms = start.elapsed().as_secs_f64() * 1000.0, "Pricing complete");

    let report = PriceReport {
        params,
        seed: config.seed,
        estimate,
        reference: compare.then(|| references(&params)),
    };

    let stdout = std::io::stdout();
    write_price(&mut stdout.lock(), &report, config.format)
}
