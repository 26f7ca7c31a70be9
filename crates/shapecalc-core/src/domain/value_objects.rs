//! Domain value objects: Dimension.
//!
//! # Design
//!
//! A `Dimension` is a pure value type: `Copy`, equality-by-value, no
//! identity. It is the only way a measurement enters a shape, so an invalid
//! measurement can never reach an `area()` computation.

use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

// ── Dimension ────────────────────────────────────────────────────────────────

/// A measurement that is finite and strictly positive.
///
/// Invariant: `value.is_finite() && value > 0.0`. Enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Dimension(f64);

impl Dimension {
    /// Validate `value` as the measurement called `field`.
    ///
    /// `field` only feeds the error message (`"width"`, `"radius"`, ...).
    pub fn new(field: &'static str, value: f64) -> DomainResult<Self> {
        // NaN fails `> 0.0`, so the finite check only has to catch +∞.
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidDimension { field, value })
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Dimension {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new("dimension", value)
    }
}

impl From<Dimension> for f64 {
    fn from(dimension: Dimension) -> Self {
        dimension.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_finite_values() {
        for value in [f64::MIN_POSITIVE, 1e-300, 0.5, 1.0, 42.0, f64::MAX] {
            assert_eq!(Dimension::new("side", value).unwrap().get(), value);
        }
    }

    #[test]
    fn accepts_subnormal_positive() {
        let tiny = f64::MIN_POSITIVE / 2.0;
        assert!(tiny > 0.0);
        assert!(Dimension::new("side", tiny).is_ok());
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        for value in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Dimension::new("width", value).unwrap_err();
            assert!(matches!(
                err,
                DomainError::InvalidDimension { field: "width", .. }
            ));
        }
    }

    #[test]
    fn try_from_uses_generic_field_name() {
        let err = Dimension::try_from(-2.0).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidDimension {
                field: "dimension",
                value: -2.0
            }
        );
    }

    #[test]
    fn serializes_as_bare_number() {
        let d = Dimension::new("radius", 2.5).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "2.5");
        assert_eq!(serde_json::from_str::<Dimension>("2.5").unwrap(), d);
    }

    #[test]
    fn deserialize_rejects_invalid_measurement() {
        assert!(serde_json::from_str::<Dimension>("0").is_err());
        assert!(serde_json::from_str::<Dimension>("-3.0").is_err());
    }

    #[test]
    fn display_matches_inner_value() {
        assert_eq!(Dimension::new("side", 4.0).unwrap().to_string(), "4");
    }
}
