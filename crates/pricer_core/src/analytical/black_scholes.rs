//! Black-Scholes closed form for European options.
//!
//! Reference values for the European legs of the Monte Carlo kernel. The
//! kernel's log-space step is exact for GBM, so its European estimates
//! converge to these prices for any number of steps.

use super::distributions::norm_cdf;
use num_traits::Float;

/// Discounted intrinsic value used when volatility or maturity is zero.
#[inline]
fn degenerate<T: Float>(spot: T, strike: T, rate: T, maturity: T, is_call: bool) -> T {
    let df = (-rate * maturity).exp();
    let forward = spot * (rate * maturity).exp();
    let intrinsic = if is_call {
        forward - strike
    } else {
        strike - forward
    };
    df * intrinsic.max(T::zero())
}

/// d1 and d2 terms.
#[inline]
fn d1_d2<T: Float>(spot: T, strike: T, rate: T, volatility: T, maturity: T) -> (T, T) {
    let half = T::from(0.5).unwrap();
    let vol_sqrt_t = volatility * maturity.sqrt();
    let d1 = ((spot / strike).ln() + (rate + half * volatility * volatility) * maturity)
        / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Price a European call.
///
/// ```text
/// C = S N(d1) - K exp(-rT) N(d2)
/// ```
///
/// # Example
///
/// ```rust
/// use pricer_core::analytical::black_scholes_call;
///
/// let price: f64 = black_scholes_call(100.0, 100.0, 0.05, 0.2, 1.0);
/// assert!((price - 10.4506).abs() < 1e-3);
/// ```
pub fn black_scholes_call<T: Float>(spot: T, strike: T, rate: T, volatility: T, maturity: T) -> T {
    if volatility <= T::zero() || maturity <= T::zero() {
        return degenerate(spot, strike, rate, maturity, true);
    }
    let (d1, d2) = d1_d2(spot, strike, rate, volatility, maturity);
    spot * norm_cdf(d1) - strike * (-rate * maturity).exp() * norm_cdf(d2)
}

/// Price a European put.
///
/// ```text
/// P = K exp(-rT) N(-d2) - S N(-d1)
/// ```
pub fn black_scholes_put<T: Float>(spot: T, strike: T, rate: T, volatility: T, maturity: T) -> T {
    if volatility <= T::zero() || maturity <= T::zero() {
        return degenerate(spot, strike, rate, maturity, false);
    }
    let (d1, d2) = d1_d2(spot, strike, rate, volatility, maturity);
    strike * (-rate * maturity).exp() * norm_cdf(-d2) - spot * norm_cdf(-d1)
}
