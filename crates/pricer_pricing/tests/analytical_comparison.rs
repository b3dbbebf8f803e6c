//! Analytical comparison tests for the Monte Carlo kernel.
//!
//! Verifies kernel output against closed forms where they exist.
//!
//! # Test Categories
//!
//! 1. **European Options**: MC vs Black-Scholes
//! 2. **Asian Options**: arithmetic MC vs discrete geometric closed form
//! 3. **Convergence Tests**: standard error scales as 1/√paths
//! 4. **Degenerate Volatility**: σ → 0 collapses the distribution

use approx::assert_relative_eq;
use pricer_core::analytical::{
    black_scholes_call, black_scholes_put, geometric_asian_call, geometric_asian_put,
};
use pricer_core::types::{OptionKind, SimulationParams};
use pricer_pricing::mc::price_option_with_stats;
use pricer_pricing::rng::PricerRng;

/// Standard test parameters (one-year horizon).
fn standard_params(paths: usize) -> SimulationParams {
    SimulationParams::new(100.0, 100.0, 0.2, 0.05, 52, paths).unwrap()
}

// ============================================================================
// European Option Tests
// ============================================================================

#[test]
fn test_european_call_mc_vs_black_scholes() {
    let params = standard_params(100_000);
    let estimate = price_option_with_stats(&params, &mut PricerRng::from_seed(42)).unwrap();
    let analytical = black_scholes_call(100.0, 100.0, 0.05, 0.2, 1.0);

    let tolerance = 3.0 * estimate.std_errors.euro_call;
    let error = (estimate.prices.euro_call - analytical).abs();
    assert!(
        error < tolerance,
        "European Call: MC={:.4}, Analytical={:.4}, Error={:.4}, Tolerance={:.4}",
        estimate.prices.euro_call,
        analytical,
        error,
        tolerance
    );
}

#[test]
fn test_european_put_mc_vs_black_scholes() {
    let params = standard_params(100_000).with_strike(110.0);
    let estimate = price_option_with_stats(&params, &mut PricerRng::from_seed(7)).unwrap();
    let analytical = black_scholes_put(100.0, 110.0, 0.05, 0.2, 1.0);

    let tolerance = 3.0 * estimate.std_errors.euro_put;
    let error = (estimate.prices.euro_put - analytical).abs();
    assert!(
        error < tolerance,
        "European Put: MC={:.4}, Analytical={:.4}, Error={:.4}, Tolerance={:.4}",
        estimate.prices.euro_put,
        analytical,
        error,
        tolerance
    );
}

#[test]
fn test_put_call_parity_within_noise() {
    let params = standard_params(100_000);
    let estimate = price_option_with_stats(&params, &mut PricerRng::from_seed(3)).unwrap();

    // C - P = S - K·exp(-rT)
    let parity = 100.0 - 100.0 * (-0.05_f64).exp();
    let diff = estimate.prices.euro_call - estimate.prices.euro_put;
    let tolerance = 3.0 * (estimate.std_errors.euro_call + estimate.std_errors.euro_put);
    assert!(
        (diff - parity).abs() < tolerance,
        "C - P = {:.4}, expected {:.4} (tolerance {:.4})",
        diff,
        parity,
        tolerance
    );
}

// ============================================================================
// Asian Option Tests
// ============================================================================

#[test]
fn test_arithmetic_asian_call_above_geometric() {
    let params = standard_params(50_000);
    let estimate = price_option_with_stats(&params, &mut PricerRng::from_seed(42)).unwrap();
    let geometric = geometric_asian_call(100.0, 100.0, 0.05, 0.2, 1.0, params.days);

    // AM-GM holds pathwise; allow for MC noise on the arithmetic side.
    let tolerance = 3.0 * estimate.std_errors.asian_call;
    assert!(
        estimate.prices.asian_call > geometric - tolerance,
        "Arithmetic Asian Call {:.4} below geometric bound {:.4}",
        estimate.prices.asian_call,
        geometric
    );
    // The gap is small for moderate volatility.
    assert!(estimate.prices.asian_call - geometric < 0.5);
}

#[test]
fn test_arithmetic_asian_put_below_geometric() {
    let params = standard_params(50_000);
    let estimate = price_option_with_stats(&params, &mut PricerRng::from_seed(42)).unwrap();
    let geometric = geometric_asian_put(100.0, 100.0, 0.05, 0.2, 1.0, params.days);

    let tolerance = 3.0 * estimate.std_errors.asian_put;
    assert!(
        estimate.prices.asian_put < geometric + tolerance,
        "Arithmetic Asian Put {:.4} above geometric bound {:.4}",
        estimate.prices.asian_put,
        geometric
    );
}

#[test]
fn test_asian_cheaper_than_european() {
    let estimate =
        price_option_with_stats(&standard_params(50_000), &mut PricerRng::from_seed(11)).unwrap();
    assert!(estimate.prices.asian_call < estimate.prices.euro_call);
    assert!(estimate.prices.asian_put < estimate.prices.euro_put);
}

// ============================================================================
// Convergence Tests
// ============================================================================

#[test]
fn test_standard_error_shrinks_tenfold() {
    let small = SimulationParams::new(100.0, 100.0, 0.25, 0.05, 4, 10_000).unwrap();
    let large = SimulationParams { paths: 1_000_000, ..small };

    let se_small = price_option_with_stats(&small, &mut PricerRng::from_seed(1)).unwrap();
    let se_large = price_option_with_stats(&large, &mut PricerRng::from_seed(2)).unwrap();

    for kind in OptionKind::ALL {
        let ratio = se_small.std_errors.get(kind) / se_large.std_errors.get(kind);
        assert!(
            (8.0..12.0).contains(&ratio),
            "{}: standard error ratio {:.3} not close to 10",
            kind,
            ratio
        );
    }
}

// ============================================================================
// Degenerate Volatility
// ============================================================================

#[test]
fn test_vanishing_volatility_at_the_money() {
    let params = SimulationParams::new(100.0, 100.0, 1e-6, 0.0, 260, 10_000).unwrap();
    let estimate = price_option_with_stats(&params, &mut PricerRng::from_seed(5)).unwrap();

    assert_relative_eq!(estimate.prices.euro_call, 0.0, epsilon = 1e-3);
    assert_relative_eq!(estimate.prices.euro_put, 0.0, epsilon = 1e-3);
    assert_relative_eq!(estimate.prices.asian_call, 0.0, epsilon = 1e-3);
    assert_relative_eq!(estimate.prices.asian_put, 0.0, epsilon = 1e-3);
}

#[test]
fn test_zero_volatility_is_discounted_forward_intrinsic() {
    let params = SimulationParams::new(100.0, 90.0, 0.0, 0.05, 10, 100).unwrap();
    let estimate = price_option_with_stats(&params, &mut PricerRng::from_seed(5)).unwrap();

    let df = (-0.05_f64).exp();
    let forward = 100.0 * 0.05_f64.exp();
    assert_relative_eq!(estimate.prices.euro_call, df * (forward - 90.0), epsilon = 1e-9);
    assert_eq!(estimate.prices.euro_put, 0.0);
    assert!(estimate.std_errors.euro_call < 1e-9);
}
