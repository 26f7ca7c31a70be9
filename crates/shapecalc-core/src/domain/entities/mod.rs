pub mod circle;
pub mod rectangle;
pub mod square;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use square::Square;

use crate::domain::{
    capabilities::Shape,
    error::{DomainError, DomainResult},
};

/// Accept `shape` only if its area is finite.
///
/// Every dimension is finite on its own, but their product can still
/// overflow. `field` and `value` name the measurement that tipped it over.
fn finite_area<S: Shape>(shape: S, field: &'static str, value: f64) -> DomainResult<S> {
    if shape.area().is_finite() {
        Ok(shape)
    } else {
        Err(DomainError::InvalidDimension { field, value })
    }
}
