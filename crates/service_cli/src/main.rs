//! mcgrid - Monte Carlo Option Pricing over Strike/Volatility Grids
//!
//! This is the operational entry point for the pricer crates.
//!
//! # Commands
//!
//! - `mcgrid price` - Price European and Asian options for one (strike, sigma)
//! - `mcgrid grid` - Evaluate a strike × sigma grid in parallel
//! - `mcgrid check` - Show the resolved configuration and worker pool
//!
//! # Configuration
//!
//! Values are resolved from, highest priority first: command line flags,
//! `MCGRID_*` environment variables, the `--config` TOML file, defaults.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires configuration,
//! logging and output formatting around `pricer_pricing`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::{build_config, CliOverrides, GridConfig, OutputFormat};

/// Monte Carlo option pricing CLI
#[derive(Parser)]
#[command(name = "mcgrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Simulation settings shared by `price` and `grid`
#[derive(Args, Debug, Default)]
struct SimulationArgs {
    /// Initial price
    #[arg(long)]
    spot: Option<f64>,

    /// Risk-free rate
    #[arg(long)]
    rate: Option<f64>,

    /// Time steps per path
    #[arg(long)]
    days: Option<usize>,

    /// Monte Carlo paths
    #[arg(short = 'n', long)]
    paths: Option<usize>,

    /// Base random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Output format (table, json, csv)
    #[arg(short, long, value_parser = parse_format)]
    format: Option<OutputFormat>,
}

fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse().map_err(|e: config::ConfigError| e.to_string())
}

#[derive(Subcommand)]
enum Commands {
    /// Price European and arithmetic Asian calls and puts for one cell
    Price {
        /// Strike price
        #[arg(short = 'k', long, default_value = "100.0")]
        strike: f64,

        /// Volatility
        #[arg(short = 's', long, default_value = "0.25")]
        sigma: f64,

        /// Also print Black-Scholes and geometric Asian references
        #[arg(long)]
        compare: bool,

        #[command(flatten)]
        sim: SimulationArgs,
    },

    /// Evaluate a strike × sigma grid in parallel
    Grid {
        /// Lowest strike
        #[arg(long)]
        strike_min: Option<f64>,

        /// Highest strike
        #[arg(long)]
        strike_max: Option<f64>,

        /// Number of strikes
        #[arg(long)]
        n_strikes: Option<usize>,

        /// Lowest volatility
        #[arg(long)]
        sigma_min: Option<f64>,

        /// Highest volatility
        #[arg(long)]
        sigma_max: Option<f64>,

        /// Number of volatilities
        #[arg(long)]
        n_sigmas: Option<usize>,

        /// Worker threads (defaults to the global Rayon pool)
        #[arg(short, long)]
        threads: Option<usize>,

        #[command(flatten)]
        sim: SimulationArgs,
    },

    /// Check system configuration and worker pool
    Check,
}

impl SimulationArgs {
    fn overrides(&self, verbose: bool) -> CliOverrides {
        CliOverrides {
            spot: self.spot,
            rate: self.rate,
            days: self.days,
            paths: self.paths,
            seed: self.seed,
            format: self.format,
            verbose,
            ..Default::default()
        }
    }
}

fn init_tracing(config: &GridConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = match &cli.command {
        Commands::Price { sim, .. } => sim.overrides(cli.verbose),
        Commands::Grid {
            strike_min,
            strike_max,
            n_strikes,
            sigma_min,
            sigma_max,
            n_sigmas,
            threads,
            sim,
        } => CliOverrides {
            strike_min: *strike_min,
            strike_max: *strike_max,
            n_strikes: *n_strikes,
            sigma_min: *sigma_min,
            sigma_max: *sigma_max,
            n_sigmas: *n_sigmas,
            threads: *threads,
            ..sim.overrides(cli.verbose)
        },
        Commands::Check => SimulationArgs::default().overrides(cli.verbose),
    };

    let config = build_config(cli.config.as_deref(), |key| std::env::var(key).ok(), &overrides)?;
    init_tracing(&config);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Resolved configuration");

    match cli.command {
        Commands::Price {
            strike,
            sigma,
            compare,
            ..
        } => commands::price::run(&config, strike, sigma, compare),
        Commands::Grid { .. } => commands::grid::run(&config),
        Commands::Check => commands::check::run(&config),
    }
}
