//! Monte Carlo pricing kernel.
//!
//! Simulates an ensemble of GBM trajectories over `days` steps of length
//! `h = 1 / days` and prices four options from the same ensemble:
//!
//! ```text
//! const1 = exp((r - σ²/2) h)          drift multiplier
//! const2 = σ √h                       diffusion scale
//! S ← S · const1 · exp(const2 · Z)    per path, per step
//! A  = (Σ_steps S) / days             arithmetic average
//! V  = exp(-r h days) · mean(payoff)
//! ```
//!
//! The kernel is a pure function of its parameters and the injected
//! [`NormalSource`]; given the same seeded source it is bit-reproducible.

use super::workspace::PathEnsemble;
use crate::rng::NormalSource;
use pricer_core::types::{KernelError, OptionKind, OptionPrices, SimulationParams};

/// Price estimate with its Monte Carlo standard errors.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionKind, SimulationParams};
/// use pricer_pricing::mc::price_option_with_stats;
/// use pricer_pricing::rng::PricerRng;
///
/// let params = SimulationParams::new(100.0, 100.0, 0.25, 0.05, 52, 20_000).unwrap();
/// let estimate = price_option_with_stats(&params, &mut PricerRng::from_seed(42)).unwrap();
///
/// let call = estimate.prices.euro_call;
/// let half_width = estimate.confidence_95(OptionKind::EuropeanCall);
/// println!("euro call: {:.4} +/- {:.4}", call, half_width);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KernelEstimate {
    /// Discounted price estimates.
    pub prices: OptionPrices,
    /// Standard error of each discounted estimate.
    pub std_errors: OptionPrices,
    /// Number of simulated paths.
    pub paths: usize,
    /// Number of time steps.
    pub days: usize,
}

impl KernelEstimate {
    /// Returns the 95% confidence interval half-width for one option.
    #[inline]
    pub fn confidence_95(&self, kind: OptionKind) -> f64 {
        1.96 * self.std_errors.get(kind)
    }
}

/// Running first and second moments of one payoff.
#[derive(Clone, Copy, Debug, Default)]
struct PayoffMoments {
    sum: f64,
    sum_sq: f64,
}

impl PayoffMoments {
    #[inline]
    fn push(&mut self, payoff: f64) {
        self.sum += payoff;
        self.sum_sq += payoff * payoff;
    }

    #[inline]
    fn mean(&self, n: f64) -> f64 {
        self.sum / n
    }

    /// Standard error of the mean; zero for a single path.
    #[inline]
    fn std_error(&self, n: f64) -> f64 {
        if n < 2.0 {
            return 0.0;
        }
        let variance = ((self.sum_sq - self.sum * self.sum / n) / (n - 1.0)).max(0.0);
        (variance / n).sqrt()
    }
}

/// `max(0, x)` that lets NaN through so anomalies reach the final check.
#[inline]
fn positive_part(x: f64) -> f64 {
    if x.is_nan() {
        x
    } else {
        x.max(0.0)
    }
}

/// Reusable Monte Carlo pricing kernel.
///
/// Owns a [`PathEnsemble`] so repeated runs on one worker do not
/// re-allocate. The random source is supplied per call.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::SimulationParams;
/// use pricer_pricing::mc::PricingKernel;
/// use pricer_pricing::rng::PricerRng;
///
/// let mut kernel = PricingKernel::new();
/// let mut rng = PricerRng::from_seed(7);
///
/// for strike in [90.0, 100.0, 110.0] {
///     let params = SimulationParams::new(100.0, strike, 0.2, 0.05, 26, 2_000).unwrap();
///     let estimate = kernel.run(&params, &mut rng).unwrap();
///     assert!(estimate.prices.is_finite());
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct PricingKernel {
    ensemble: PathEnsemble,
}

impl PricingKernel {
    /// Creates a kernel with an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a kernel with room for `paths` trajectories.
    pub fn with_capacity(paths: usize) -> Self {
        Self {
            ensemble: PathEnsemble::new(paths),
        }
    }

    /// Runs one simulation and returns prices with standard errors.
    ///
    /// # Errors
    ///
    /// - [`KernelError::InvalidParameter`] if `params` fails validation;
    ///   nothing is drawn from `source` in that case.
    /// - [`KernelError::NumericAnomaly`] if any price or standard error is
    ///   not finite (e.g. `σ√h` large enough to overflow `exp`).
    pub fn run<R: NormalSource>(
        &mut self,
        params: &SimulationParams,
        source: &mut R,
    ) -> Result<KernelEstimate, KernelError> {
        params.validate()?;

        let h = params.step();
        let sigma = params.volatility;
        let const1 = ((params.rate - 0.5 * sigma * sigma) * h).exp();
        let const2 = sigma * h.sqrt();

        self.ensemble.reset(params.paths, params.spot);
        for _ in 0..params.days {
            self.ensemble.advance(const1, const2, source);
        }

        let days = params.days as f64;
        let strike = params.strike;
        let mut moments = [PayoffMoments::default(); 4];

        for (&terminal, &sum) in self.ensemble.prices().iter().zip(self.ensemble.sums()) {
            let average = sum / days;
            moments[OptionKind::EuropeanCall.index()].push(positive_part(terminal - strike));
            moments[OptionKind::EuropeanPut.index()].push(positive_part(strike - terminal));
            moments[OptionKind::AsianCall.index()].push(positive_part(average - strike));
            moments[OptionKind::AsianPut.index()].push(positive_part(strike - average));
        }

        let r_factor = (-params.rate * h * days).exp();
        let n = params.paths as f64;
        let prices = OptionPrices::from_array(moments.map(|m| r_factor * m.mean(n)));
        let std_errors = OptionPrices::from_array(moments.map(|m| r_factor * m.std_error(n)));

        if let Some(kind) = prices.first_non_finite() {
            return Err(KernelError::NumericAnomaly {
                kind,
                detail: format!("price={}", prices.get(kind)),
            });
        }
        if let Some(kind) = std_errors.first_non_finite() {
            return Err(KernelError::NumericAnomaly {
                kind,
                detail: format!("std_error={}", std_errors.get(kind)),
            });
        }

        Ok(KernelEstimate {
            prices,
            std_errors,
            paths: params.paths,
            days: params.days,
        })
    }
}

/// Prices the European and arithmetic Asian call and put in one pass.
///
/// Convenience wrapper around [`PricingKernel::run`] that allocates a fresh
/// ensemble and drops the standard errors.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::SimulationParams;
/// use pricer_pricing::mc::price_option;
/// use pricer_pricing::rng::PricerRng;
///
/// let params = SimulationParams::new(100.0, 100.0, 0.25, 0.05, 260, 10_000).unwrap();
/// let (euro_call, euro_put, asian_call, asian_put) =
///     price_option(&params, &mut PricerRng::from_seed(42)).unwrap().into();
///
/// assert!(asian_call < euro_call);
/// assert!(asian_put < euro_put);
/// ```
pub fn price_option<R: NormalSource>(
    params: &SimulationParams,
    source: &mut R,
) -> Result<OptionPrices, KernelError> {
    price_option_with_stats(params, source).map(|estimate| estimate.prices)
}

/// Like [`price_option`] but keeps the standard errors.
pub fn price_option_with_stats<R: NormalSource>(
    params: &SimulationParams,
    source: &mut R,
) -> Result<KernelEstimate, KernelError> {
    PricingKernel::with_capacity(params.paths).run(params, source)
}
