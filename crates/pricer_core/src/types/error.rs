//! Error types for the pricing kernel.
//!
//! This module provides:
//! - `KernelError`: Errors raised by a single kernel invocation, either while
//!   validating [`SimulationParams`](super::SimulationParams) or after the
//!   simulation when the estimate is not usable.

use super::OptionKind;
use thiserror::Error;

/// Categorised kernel errors.
///
/// # Variants
/// - `InvalidParameter`: Rejected before any path is simulated
/// - `NumericAnomaly`: The simulation produced a non-finite estimate
///
/// # Examples
/// ```
/// use pricer_core::types::KernelError;
///
/// let err = KernelError::invalid("days", "must be at least 1, got 0");
/// assert_eq!(
///     err.to_string(),
///     "Invalid parameter 'days': must be at least 1, got 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    /// A simulation parameter is outside its valid domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// The estimate for one option contains a non-finite value.
    #[error("Numeric anomaly in {kind}: {detail}")]
    NumericAnomaly {
        /// Option whose estimate is not finite.
        kind: OptionKind,
        /// Offending value(s).
        detail: String,
    },
}

impl KernelError {
    /// Shorthand for [`KernelError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns `true` for parameter validation failures.
    #[inline]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = KernelError::invalid("spot", "must be positive, got -1");
        assert!(err.to_string().contains("'spot'"));
        assert!(err.to_string().contains("got -1"));
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_numeric_anomaly_display() {
        let err = KernelError::NumericAnomaly {
            kind: OptionKind::AsianCall,
            detail: "price=inf".to_string(),
        };
        assert_eq!(err.to_string(), "Numeric anomaly in asian_call: price=inf");
        assert!(!err.is_invalid_parameter());
    }
}
