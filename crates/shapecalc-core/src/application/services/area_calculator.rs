//! Area Calculator - generic consumer of the `Shape` capability.
//!
//! This file must stay closed for modification: it depends on the capability
//! alone, so new kinds plug in without touching it. The workspace tests read
//! this source and fail if it starts naming concrete kinds or inspecting
//! runtime types.

use tracing::{debug, trace};

use crate::domain::Shape;

/// Computes areas for any value with the `Shape` capability.
#[derive(Debug, Default, Clone, Copy)]
pub struct AreaCalculator;

impl AreaCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Area of a single shape, returned exactly as the shape reports it.
    pub fn calculate_area<S: Shape + ?Sized>(&self, shape: &S) -> f64 {
        let area = shape.area();
        trace!(area, "Area computed");
        area
    }

    /// Sum of the areas of every shape in `shapes`; `0.0` when empty.
    ///
    /// Accepts owned, borrowed, or boxed shapes, e.g. `&[Box<dyn Shape>]`.
    pub fn total_area<I>(&self, shapes: I) -> f64
    where
        I: IntoIterator,
        I::Item: Shape,
    {
        let (count, total) = shapes
            .into_iter()
            .fold((0usize, 0.0), |(count, total), shape| {
                (count + 1, total + self.calculate_area(&shape))
            });
        debug!(count, total, "Total area computed");
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::capabilities::MockShape;

    fn mock_with_area(area: f64) -> MockShape {
        let mut mock = MockShape::new();
        mock.expect_area().times(1).return_const(area);
        mock
    }

    #[test]
    fn delegates_exactly_once_and_returns_unchanged() {
        let mock = mock_with_area(0.1 + 0.2);
        assert_eq!(AreaCalculator::new().calculate_area(&mock), 0.1 + 0.2);
    }

    #[test]
    fn accepts_trait_objects() {
        let shape: Box<dyn Shape> = Box::new(mock_with_area(4.0));
        assert_eq!(AreaCalculator::new().calculate_area(shape.as_ref()), 4.0);
    }

    #[test]
    fn total_of_empty_collection_is_zero() {
        let none: Vec<Box<dyn Shape>> = Vec::new();
        assert_eq!(AreaCalculator::new().total_area(&none), 0.0);
    }

    #[test]
    fn total_asks_each_shape_once() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(mock_with_area(1.5)),
            Box::new(mock_with_area(2.5)),
            Box::new(mock_with_area(6.0)),
        ];
        assert_eq!(AreaCalculator::new().total_area(&shapes), 10.0);
    }

    #[test]
    fn total_accepts_owned_values() {
        let shapes = vec![mock_with_area(1.0), mock_with_area(2.0)];
        assert_eq!(AreaCalculator::new().total_area(shapes), 3.0);
    }
}
