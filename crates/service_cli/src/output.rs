//! Rendering of pricing results as table, JSON or CSV.

use pricer_core::types::{OptionKind, OptionPrices, SimulationParams};
use pricer_pricing::grid::{GridCellResult, ResultGrid};
use pricer_pricing::mc::KernelEstimate;
use serde::Serialize;
use std::io::Write;

use crate::config::OutputFormat;
use crate::Result;

/// Single kernel run with optional closed-form references.
///
/// In `reference`, the Asian entries hold the geometric-average closed form.
#[derive(Debug, Serialize)]
pub struct PriceReport {
    pub params: SimulationParams,
    pub seed: u64,
    pub estimate: KernelEstimate,
    pub reference: Option<OptionPrices>,
}

/// Grid evaluation with the parameters that produced it.
#[derive(Debug, Serialize)]
pub struct GridReport<'a> {
    pub spot: f64,
    pub rate: f64,
    pub days: usize,
    pub paths: usize,
    pub seed: u64,
    pub strikes: &'a [f64],
    pub sigmas: &'a [f64],
    pub cells: Vec<GridCellResult>,
}

impl<'a> GridReport<'a> {
    pub fn new(
        result: &'a ResultGrid,
        spot: f64,
        rate: f64,
        days: usize,
        paths: usize,
        seed: u64,
    ) -> Self {
        Self {
            spot,
            rate,
            days,
            paths,
            seed,
            strikes: result.strikes(),
            sigmas: result.sigmas(),
            cells: result.iter().collect(),
        }
    }
}

/// One CSV record per grid cell.
#[derive(Debug, Serialize)]
struct CellRecord {
    row: usize,
    col: usize,
    strike: f64,
    sigma: f64,
    euro_call: f64,
    euro_call_se: f64,
    euro_put: f64,
    euro_put_se: f64,
    asian_call: f64,
    asian_call_se: f64,
    asian_put: f64,
    asian_put_se: f64,
}

impl From<&GridCellResult> for CellRecord {
    fn from(cell: &GridCellResult) -> Self {
        let (p, se) = (cell.estimate.prices, cell.estimate.std_errors);
        Self {
            row: cell.row,
            col: cell.col,
            strike: cell.strike,
            sigma: cell.sigma,
            euro_call: p.euro_call,
            euro_call_se: se.euro_call,
            euro_put: p.euro_put,
            euro_put_se: se.euro_put,
            asian_call: p.asian_call,
            asian_call_se: se.asian_call,
            asian_put: p.asian_put,
            asian_put_se: se.asian_put,
        }
    }
}

/// One CSV record per option of a single run.
#[derive(Debug, Serialize)]
struct OptionRecord {
    option: &'static str,
    price: f64,
    std_error: f64,
    ci95_low: f64,
    ci95_high: f64,
    reference: Option<f64>,
}

fn option_label(kind: OptionKind) -> &'static str {
    match kind {
        OptionKind::EuropeanCall => "European call",
        OptionKind::EuropeanPut => "European put",
        OptionKind::AsianCall => "Asian call",
        OptionKind::AsianPut => "Asian put",
    }
}

/// Writes a single-run report.
pub fn write_price<W: Write>(
    out: &mut W,
    report: &PriceReport,
    format: OutputFormat,
) -> Result<()> {
    let estimate = &report.estimate;
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for kind in OptionKind::ALL {
                let price = estimate.prices.get(kind);
                let half = estimate.confidence_95(kind);
                writer.serialize(OptionRecord {
                    option: kind.as_str(),
                    price,
                    std_error: estimate.std_errors.get(kind),
                    ci95_low: price - half,
                    ci95_high: price + half,
                    reference: report.reference.map(|r| r.get(kind)),
                })?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            let p = &report.params;
            writeln!(
                out,
                "S={} K={} sigma={} r={} days={} paths={} seed={}",
                p.spot, p.strike, p.volatility, p.rate, p.days, p.paths, report.seed
            )?;
            writeln!(
                out,
                "┌───────────────┬────────────┬────────────┬──────────────────────────┬────────────┐"
            )?;
            writeln!(
                out,
                "│ Option        │ Price      │ Std error  │ 95% interval             │ Reference  │"
            )?;
            writeln!(
                out,
                "├───────────────┼────────────┼────────────┼──────────────────────────┼────────────┤"
            )?;
            for kind in OptionKind::ALL {
                let price = estimate.prices.get(kind);
                let half = estimate.confidence_95(kind);
                let reference = report
                    .reference
                    .map(|r| format!("{:>10.4}", r.get(kind)))
                    .unwrap_or_else(|| format!("{:>10}", "-"));
                writeln!(
                    out,
                    "│ {:<13} │ {:>10.4} │ {:>10.4} │ [{:>10.4}, {:>10.4}] │ {} │",
                    option_label(kind),
                    price,
                    estimate.std_errors.get(kind),
                    price - half,
                    price + half,
                    reference
                )?;
            }
            writeln!(
                out,
                "└───────────────┴────────────┴────────────┴──────────────────────────┴────────────┘"
            )?;
            if report.reference.is_some() {
                writeln!(out, "Reference: Black-Scholes (European), geometric average (Asian)")?;
            }
        }
    }
    Ok(())
}

/// Writes a grid report.
pub fn write_grid<W: Write>(
    out: &mut W,
    report: &GridReport<'_>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for cell in &report.cells {
                writer.serialize(CellRecord::from(cell))?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            let cols = report.sigmas.len();
            for kind in OptionKind::ALL {
                writeln!(out, "{} (rows: strike, columns: sigma)", option_label(kind))?;
                write!(out, "{:>10}", "K \\ σ")?;
                for sigma in report.sigmas {
                    write!(out, " {:>10.4}", sigma)?;
                }
                writeln!(out)?;
                for (row, strike) in report.strikes.iter().enumerate() {
                    write!(out, "{:>10.2}", strike)?;
                    for cell in &report.cells[row * cols..(row + 1) * cols] {
                        write!(out, " {:>10.4}", cell.estimate.prices.get(kind))?;
                    }
                    writeln!(out)?;
                }
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
