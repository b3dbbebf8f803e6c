//! Discretely monitored geometric average Asian options.
//!
//! The geometric mean of log-normal fixings is log-normal, so it has a
//! closed form. For fixings `t_i = i·h`, `i = 1..n`, `T = n·h`:
//!
//! ```text
//! μ_G  = ln S + (r - σ²/2) · h (n + 1) / 2
//! σ²_G = σ² · h (n + 1)(2n + 1) / (6n)
//! d1   = (μ_G - ln K + σ²_G) / σ_G
//! d2   = d1 - σ_G
//! Call = exp(-rT) [exp(μ_G + σ²_G / 2) N(d1) - K N(d2)]
//! ```
//!
//! By the AM-GM inequality the arithmetic average dominates the geometric
//! one path by path, so these prices bound the arithmetic Asian call from
//! below and the arithmetic Asian put from above.

use super::distributions::norm_cdf;
use num_traits::Float;

/// Log-mean and log-variance of the geometric average over `fixings`
/// equally spaced observations ending at `maturity`.
#[inline]
fn geometric_moments<T: Float>(
    spot: T,
    rate: T,
    volatility: T,
    maturity: T,
    fixings: usize,
) -> (T, T) {
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let six = T::from(6.0).unwrap();
    let n = T::from(fixings).unwrap();
    let h = maturity / n;

    let mu = spot.ln() + (rate - volatility * volatility / two) * h * (n + one) / two;
    let var = volatility * volatility * h * (n + one) * (two * n + one) / (six * n);
    (mu, var)
}

fn geometric_asian<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    volatility: T,
    maturity: T,
    fixings: usize,
    is_call: bool,
) -> T {
    let zero = T::zero();
    let two = T::from(2.0).unwrap();
    if fixings == 0 || spot <= zero || strike <= zero {
        return zero;
    }

    let (mu, var) = geometric_moments(spot, rate, volatility, maturity, fixings);
    let df = (-rate * maturity).exp();

    if var <= zero {
        let g = mu.exp();
        let intrinsic = if is_call { g - strike } else { strike - g };
        return df * intrinsic.max(zero);
    }

    let sd = var.sqrt();
    let forward = (mu + var / two).exp();
    let d1 = (mu - strike.ln() + var) / sd;
    let d2 = d1 - sd;

    if is_call {
        df * (forward * norm_cdf(d1) - strike * norm_cdf(d2))
    } else {
        df * (strike * norm_cdf(-d2) - forward * norm_cdf(-d1))
    }
}

/// Price a discretely monitored geometric average Asian call.
///
/// # Arguments
///
/// * `spot` - Current spot price (S_0)
/// * `strike` - Strike price (K)
/// * `rate` - Risk-free interest rate (r)
/// * `volatility` - Annualised volatility (σ)
/// * `maturity` - Time to maturity (T)
/// * `fixings` - Number of equally spaced observations, the last at `T`
///
/// # Example
///
/// ```rust
/// use pricer_core::analytical::geometric_asian_call;
///
/// let price = geometric_asian_call(100.0, 100.0, 0.05, 0.25, 1.0, 260);
/// assert!(price > 0.0);
/// ```
pub fn geometric_asian_call<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    volatility: T,
    maturity: T,
    fixings: usize,
) -> T {
    geometric_asian(spot, strike, rate, volatility, maturity, fixings, true)
}

/// Price a discretely monitored geometric average Asian put.
pub fn geometric_asian_put<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    volatility: T,
    maturity: T,
    fixings: usize,
) -> T {
    geometric_asian(spot, strike, rate, volatility, maturity, fixings, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::{black_scholes_call, black_scholes_put};
    use approx::assert_relative_eq;

    #[test]
    fn test_single_fixing_is_black_scholes() {
        // One fixing at T is the terminal price.
        let call = geometric_asian_call(100.0_f64, 95.0, 0.05, 0.3, 1.0, 1);
        let put = geometric_asian_put(100.0_f64, 95.0, 0.05, 0.3, 1.0, 1);
        assert_relative_eq!(call, black_scholes_call(100.0, 95.0, 0.05, 0.3, 1.0), epsilon = 1e-9);
        assert_relative_eq!(put, black_scholes_put(100.0, 95.0, 0.05, 0.3, 1.0), epsilon = 1e-9);
    }

    #[test]
    fn test_averaging_cheapens_atm_call() {
        let asian = geometric_asian_call(100.0_f64, 100.0, 0.05, 0.25, 1.0, 260);
        let european = black_scholes_call(100.0_f64, 100.0, 0.05, 0.25, 1.0);
        assert!(asian > 0.0);
        assert!(asian < european);
    }

    #[test]
    fn test_many_fixings_approach_continuous_limit() {
        // Continuous limit: σ_G = σ/√3, adjusted drift (r - σ²/2)/2 over T.
        let (spot, strike, rate, vol, t) = (100.0_f64, 100.0, 0.05, 0.2, 1.0);
        let vol_g = vol / 3.0_f64.sqrt();
        let mu = spot.ln() + (rate - 0.5 * vol * vol) * t / 2.0;
        let var = vol_g * vol_g * t;
        let d1 = (mu - strike.ln() + var) / var.sqrt();
        let d2 = d1 - var.sqrt();
        let continuous =
            (-rate * t).exp() * ((mu + var / 2.0).exp() * norm_cdf(d1) - strike * norm_cdf(d2));

        let discrete = geometric_asian_call(spot, strike, rate, vol, t, 100_000);
        assert_relative_eq!(discrete, continuous, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_volatility_is_intrinsic() {
        // σ = 0: G = S·exp(r·h(n+1)/2)
        let n = 4;
        let g = 100.0_f64 * (0.05_f64 * 0.25 * 5.0 / 2.0).exp();
        let call = geometric_asian_call(100.0_f64, 100.0, 0.05, 0.0, 1.0, n);
        assert_relative_eq!(call, (-0.05_f64).exp() * (g - 100.0), epsilon = 1e-12);
        assert_eq!(geometric_asian_put(100.0_f64, 100.0, 0.05, 0.0, 1.0, n), 0.0);
    }
}
