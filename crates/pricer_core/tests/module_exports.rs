//! Integration tests for module exports.
//!
//! Verifies that public modules and types are reachable via absolute paths
//! and behave consistently across module boundaries.

/// Types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::KernelError;
    use pricer_core::types::option_prices::{OptionKind, OptionPrices};
    use pricer_core::types::params::SimulationParams;

    let params = SimulationParams::default();
    assert!(params.validate().is_ok());

    let prices = OptionPrices::default();
    assert_eq!(prices.get(OptionKind::AsianPut), 0.0);

    let err = KernelError::invalid("paths", "must be at least 1");
    assert!(err.is_invalid_parameter());
}

/// Analytical module is accessible via absolute path.
#[test]
fn test_analytical_module_exports() {
    use pricer_core::analytical::asian::geometric_asian_call;
    use pricer_core::analytical::black_scholes::black_scholes_call;
    use pricer_core::analytical::distributions::norm_cdf;

    assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
    let asian = geometric_asian_call(100.0_f64, 100.0, 0.05, 0.2, 1.0, 12);
    assert!(asian < black_scholes_call(100.0, 100.0, 0.05, 0.2, 1.0));
}

/// Re-exports match the defining modules.
#[test]
fn test_reexports_are_identical() {
    use pricer_core::types::{KernelError, OptionKind, OptionPrices, SimulationParams};

    let params: pricer_core::types::params::SimulationParams = SimulationParams::default();
    let kind: pricer_core::types::option_prices::OptionKind = OptionKind::EuropeanCall;
    let prices: pricer_core::types::option_prices::OptionPrices =
        OptionPrices::new(1.0, 2.0, 3.0, 4.0);
    let err: pricer_core::types::error::KernelError =
        KernelError::invalid("spot", "must be positive");

    assert_eq!(params.days, 260);
    assert_eq!(prices.get(kind), 1.0);
    assert!(err.to_string().contains("spot"));
}

/// Every option kind indexes its own slot.
#[test]
fn test_option_kind_indices() {
    use pricer_core::types::{OptionKind, OptionPrices};

    let prices = OptionPrices::from_array([10.0, 20.0, 30.0, 40.0]);
    for (i, kind) in OptionKind::ALL.iter().enumerate() {
        assert_eq!(kind.index(), i);
        assert_eq!(prices.get(*kind), prices.as_array()[i]);
    }
}

#[cfg(feature = "serde")]
mod serde_exports {
    use pricer_core::types::{OptionKind, OptionPrices, SimulationParams};

    #[test]
    fn test_params_json_shape() {
        let json = serde_json::to_value(SimulationParams::default()).unwrap();
        assert_eq!(json["spot"], 100.0);
        assert_eq!(json["days"], 260);
        assert_eq!(json["paths"], 10_000);
    }

    #[test]
    fn test_option_kind_snake_case() {
        let json = serde_json::to_string(&OptionKind::AsianCall).unwrap();
        assert_eq!(json, "\"asian_call\"");
        let kind: OptionKind = serde_json::from_str("\"euro_put\"").unwrap();
        assert_eq!(kind, OptionKind::EuropeanPut);
    }

    #[test]
    fn test_prices_field_names() {
        let json = serde_json::to_value(OptionPrices::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(json["euro_call"], 1.0);
        assert_eq!(json["asian_put"], 4.0);
    }
}
