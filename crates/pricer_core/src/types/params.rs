//! Simulation parameters for a single kernel invocation.

use super::error::KernelError;

/// Inputs of one Monte Carlo pricing run.
///
/// The horizon is always one year split into `days` steps, so `1 / days`
/// is the step length as a fraction of the year (260 trading days by
/// convention).
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::SimulationParams;
///
/// let params = SimulationParams::new(100.0, 100.0, 0.25, 0.05, 260, 10_000).unwrap();
/// assert_eq!(params.step(), 1.0 / 260.0);
///
/// assert!(SimulationParams::new(100.0, 100.0, 0.25, 0.05, 0, 10_000).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationParams {
    /// Initial price (S).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Annualised volatility (σ).
    pub volatility: f64,
    /// Continuously compounded risk-free rate (r).
    pub rate: f64,
    /// Number of discrete time steps.
    pub days: usize,
    /// Number of simulated trajectories.
    pub paths: usize,
}

impl SimulationParams {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::InvalidParameter`] when any field is outside
    /// its domain (see [`validate`](Self::validate)).
    pub fn new(
        spot: f64,
        strike: f64,
        volatility: f64,
        rate: f64,
        days: usize,
        paths: usize,
    ) -> Result<Self, KernelError> {
        let params = Self {
            spot,
            strike,
            volatility,
            rate,
            days,
            paths,
        };
        params.validate()?;
        Ok(params)
    }

    /// Returns a copy with a different strike.
    #[inline]
    pub fn with_strike(self, strike: f64) -> Self {
        Self { strike, ..self }
    }

    /// Returns a copy with a different volatility.
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Time step `h = 1 / days`.
    #[inline]
    pub fn step(&self) -> f64 {
        1.0 / self.days as f64
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `KernelError::InvalidParameter` if:
    /// - `spot` or `strike` is not a positive finite number
    /// - `volatility` is negative or not finite
    /// - `rate` is not finite
    /// - `days` or `paths` is zero
    pub fn validate(&self) -> Result<(), KernelError> {
        if !(self.spot > 0.0 && self.spot.is_finite()) {
            return Err(KernelError::invalid(
                "spot",
                format!("must be positive and finite, got {}", self.spot),
            ));
        }
        if !(self.strike > 0.0 && self.strike.is_finite()) {
            return Err(KernelError::invalid(
                "strike",
                format!("must be positive and finite, got {}", self.strike),
            ));
        }
        if !(self.volatility >= 0.0 && self.volatility.is_finite()) {
            return Err(KernelError::invalid(
                "volatility",
                format!("must be non-negative and finite, got {}", self.volatility),
            ));
        }
        if !self.rate.is_finite() {
            return Err(KernelError::invalid(
                "rate",
                format!("must be finite, got {}", self.rate),
            ));
        }
        if self.days == 0 {
            return Err(KernelError::invalid("days", "must be at least 1, got 0"));
        }
        if self.paths == 0 {
            return Err(KernelError::invalid("paths", "must be at least 1, got 0"));
        }
        Ok(())
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            volatility: 0.25,
            rate: 0.05,
            days: 260,
            paths: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimulationParams::default().validate().is_ok());
    }

    #[test]
    fn test_zero_volatility_is_valid() {
        let params = SimulationParams::default().with_volatility(0.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_negative_rate_is_valid() {
        let params = SimulationParams {
            rate: -0.01,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_spot_and_strike() {
        for spot in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let params = SimulationParams {
                spot,
                ..Default::default()
            };
            assert!(matches!(
                params.validate(),
                Err(KernelError::InvalidParameter { name: "spot", .. })
            ));
        }

        let params = SimulationParams::default().with_strike(0.0);
        assert!(matches!(
            params.validate(),
            Err(KernelError::InvalidParameter { name: "strike", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_volatility() {
        let params = SimulationParams::default().with_volatility(-0.1);
        assert!(matches!(
            params.validate(),
            Err(KernelError::InvalidParameter {
                name: "volatility",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_finite_rate() {
        let params = SimulationParams {
            rate: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(KernelError::InvalidParameter { name: "rate", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_days_and_paths() {
        let err = SimulationParams::new(100.0, 100.0, 0.2, 0.05, 0, 100).unwrap_err();
        assert!(matches!(err, KernelError::InvalidParameter { name: "days", .. }));

        let err = SimulationParams::new(100.0, 100.0, 0.2, 0.05, 10, 0).unwrap_err();
        assert!(matches!(err, KernelError::InvalidParameter { name: "paths", .. }));
    }

    #[test]
    fn test_step() {
        let params = SimulationParams {
            days: 4,
            ..Default::default()
        };
        assert_eq!(params.step(), 0.25);
    }
}
