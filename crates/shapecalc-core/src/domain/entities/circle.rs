//! Circle entity.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use super::finite_area;
use crate::domain::{
    capabilities::Shape,
    error::{DomainError, DomainResult},
    value_objects::Dimension,
};

/// A circle described by its radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircleFields")]
pub struct Circle {
    radius: Dimension,
}

#[derive(Deserialize)]
struct CircleFields {
    radius: f64,
}

impl TryFrom<CircleFields> for Circle {
    type Error = DomainError;

    fn try_from(fields: CircleFields) -> DomainResult<Self> {
        Self::new(fields.radius)
    }
}

impl Circle {
    pub fn new(radius: f64) -> DomainResult<Self> {
        let circle = Self {
            radius: Dimension::new("radius", radius)?,
        };
        finite_area(circle, "radius", radius)
    }

    pub fn radius(&self) -> f64 {
        self.radius.get()
    }

    /// Change the radius. On error the circle is left untouched.
    pub fn set_radius(&mut self, radius: f64) -> DomainResult<()> {
        *self = Self::new(radius)?;
        Ok(())
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        let r = self.radius.get();
        PI * (r * r)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "circle r={}", self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn area_is_pi_r_squared() {
        for r in [0.1, 1.0, 2.0, 3.5, 100.0] {
            let area = Circle::new(r).unwrap().area();
            assert!((area - PI * r * r).abs() <= EPSILON * area.max(1.0));
        }
    }

    #[test]
    fn radius_two_is_about_12_566() {
        let area = Circle::new(2.0).unwrap().area();
        assert!((area - 12.566).abs() < 1e-3);
    }

    #[test]
    fn rejects_invalid_radius() {
        for bad in [0.0, -2.0, f64::NAN, f64::NEG_INFINITY] {
            assert!(matches!(
                Circle::new(bad),
                Err(DomainError::InvalidDimension { field: "radius", .. })
            ));
        }
    }

    #[test]
    fn set_radius_validates_and_applies() {
        let mut c = Circle::new(1.0).unwrap();
        c.set_radius(3.0).unwrap();
        assert_eq!(c.radius(), 3.0);

        assert!(c.set_radius(0.0).is_err());
        assert_eq!(c.radius(), 3.0);
    }

    #[test]
    fn rejects_radius_whose_area_overflows() {
        assert!(matches!(
            Circle::new(1e155),
            Err(DomainError::InvalidDimension { field: "radius", .. })
        ));

        let mut c = Circle::new(1e150).unwrap();
        assert!(c.set_radius(1e155).is_err());
        assert_eq!(c.radius(), 1e150);
    }
}
