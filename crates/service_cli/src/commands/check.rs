//! Check command implementation
//!
//! Prints the resolved configuration and the worker pool that a grid run
//! would use.

use pricer_pricing::dispatch::{RayonExecutor, TaskExecutor};
use tracing::info;

use crate::config::GridConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &GridConfig) -> Result<()> {
    info!("Checking configuration...");
    let executor = RayonExecutor::from_thread_count(config.threads)?;

    println!("mcgrid {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Simulation");
    println!("  spot       {}", config.spot);
    println!("  rate       {}", config.rate);
    println!("  days       {}", config.days);
    println!("  paths      {}", config.paths);
    println!("  seed       {}", config.seed);
    println!("Grid");
    println!(
        "  strikes    {} points in [{}, {}]",
        config.n_strikes, config.strike_min, config.strike_max
    );
    println!(
        "  sigmas     {} points in [{}, {}]",
        config.n_sigmas, config.sigma_min, config.sigma_max
    );
    println!("  fail_fast  {}", config.fail_fast);
    println!("Runtime");
    println!("  cpus       {}", num_cpus::get());
    println!("  executor   {}", executor.name());
    println!("  workers    {}", executor.worker_count());
    println!("  format     {}", config.format);
    println!("  log_level  {}", config.log_level);

    info!("Configuration OK");
    Ok(())
}
