//! The four option values produced by one kernel run.

use std::fmt;

/// Option selector for [`OptionPrices`].
///
/// Variants are listed in tuple order; [`OptionKind::ALL`] preserves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum OptionKind {
    /// Call on the terminal price.
    #[cfg_attr(feature = "serde", serde(rename = "euro_call"))]
    EuropeanCall,
    /// Put on the terminal price.
    #[cfg_attr(feature = "serde", serde(rename = "euro_put"))]
    EuropeanPut,
    /// Call on the arithmetic average price.
    AsianCall,
    /// Put on the arithmetic average price.
    AsianPut,
}

impl OptionKind {
    /// All kinds in tuple order.
    pub const ALL: [OptionKind; 4] = [
        OptionKind::EuropeanCall,
        OptionKind::EuropeanPut,
        OptionKind::AsianCall,
        OptionKind::AsianPut,
    ];

    /// Position of this kind in the result tuple.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            OptionKind::EuropeanCall => 0,
            OptionKind::EuropeanPut => 1,
            OptionKind::AsianCall => 2,
            OptionKind::AsianPut => 3,
        }
    }

    /// Snake-case label used in logs, output headers and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKind::EuropeanCall => "euro_call",
            OptionKind::EuropeanPut => "euro_put",
            OptionKind::AsianCall => "asian_call",
            OptionKind::AsianPut => "asian_put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discounted values of the European and arithmetic Asian call and put.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionKind, OptionPrices};
///
/// let prices = OptionPrices::new(12.0, 7.0, 6.5, 4.0);
/// assert_eq!(prices.get(OptionKind::AsianCall), 6.5);
///
/// let (euro_call, euro_put, asian_call, asian_put) = prices.into();
/// assert_eq!((euro_call, euro_put, asian_call, asian_put), (12.0, 7.0, 6.5, 4.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionPrices {
    /// European call.
    pub euro_call: f64,
    /// European put.
    pub euro_put: f64,
    /// Arithmetic Asian call.
    pub asian_call: f64,
    /// Arithmetic Asian put.
    pub asian_put: f64,
}

impl OptionPrices {
    /// Creates a result tuple.
    #[inline]
    pub fn new(euro_call: f64, euro_put: f64, asian_call: f64, asian_put: f64) -> Self {
        Self {
            euro_call,
            euro_put,
            asian_call,
            asian_put,
        }
    }

    /// Builds from an array in tuple order.
    #[inline]
    pub fn from_array(values: [f64; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    /// Values in tuple order.
    #[inline]
    pub fn as_array(&self) -> [f64; 4] {
        [self.euro_call, self.euro_put, self.asian_call, self.asian_put]
    }

    /// Value for one option kind.
    #[inline]
    pub fn get(&self, kind: OptionKind) -> f64 {
        self.as_array()[kind.index()]
    }

    /// Returns `true` when every value is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|v| v.is_finite())
    }

    /// First option kind whose value is not finite, if any.
    pub fn first_non_finite(&self) -> Option<OptionKind> {
        OptionKind::ALL
            .into_iter()
            .find(|&kind| !self.get(kind).is_finite())
    }
}

impl From<OptionPrices> for (f64, f64, f64, f64) {
    fn from(p: OptionPrices) -> Self {
        (p.euro_call, p.euro_put, p.asian_call, p.asian_put)
    }
}

impl From<(f64, f64, f64, f64)> for OptionPrices {
    fn from(t: (f64, f64, f64, f64)) -> Self {
        Self::new(t.0, t.1, t.2, t.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_order_matches_tuple() {
        let prices = OptionPrices::new(1.0, 2.0, 3.0, 4.0);
        let values: Vec<f64> = OptionKind::ALL.iter().map(|&k| prices.get(k)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(OptionKind::EuropeanCall.to_string(), "euro_call");
        assert_eq!(OptionKind::AsianPut.to_string(), "asian_put");
    }

    #[test]
    fn test_first_non_finite() {
        let prices = OptionPrices::new(1.0, 2.0, f64::INFINITY, f64::NAN);
        assert!(!prices.is_finite());
        assert_eq!(prices.first_non_finite(), Some(OptionKind::AsianCall));
        assert_eq!(OptionPrices::default().first_non_finite(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&OptionPrices::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(
            json,
            r#"{"euro_call":1.0,"euro_put":2.0,"asian_call":3.0,"asian_put":4.0}"#
        );
        let kind = serde_json::to_string(&OptionKind::EuropeanPut).unwrap();
        assert_eq!(kind, r#""euro_put""#);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_names_match_labels() {
        for kind in OptionKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: OptionKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }
}
