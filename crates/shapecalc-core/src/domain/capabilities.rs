//! The `Shape` capability.
//!
//! # Adding a New Kind
//!
//! 1. Define the type (in this crate or any downstream crate)
//! 2. `impl Shape for YourKind`
//! 3. That's it — `AreaCalculator` and the existing kinds do not change
//!
//! A type that has no meaningful area must not implement this trait. Keep
//! role traits narrow instead of widening this one.

use std::rc::Rc;
use std::sync::Arc;

/// Anything that can report its own area.
///
/// Implementations must return a finite, non-negative value. The built-in
/// kinds guarantee this by holding only validated
/// [`Dimension`](crate::domain::Dimension)s.
#[cfg_attr(test, mockall::automock)]
pub trait Shape {
    /// The area of this shape, in square units of its dimensions.
    fn area(&self) -> f64;
}

// ── Blanket impls ────────────────────────────────────────────────────────────
//
// Borrowed, boxed, and shared shapes (including trait objects) are shapes too,
// so consumers can be written once against `S: Shape + ?Sized`.

impl<S: Shape + ?Sized> Shape for &S {
    fn area(&self) -> f64 {
        (**self).area()
    }
}

impl<S: Shape + ?Sized> Shape for &mut S {
    fn area(&self) -> f64 {
        (**self).area()
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn area(&self) -> f64 {
        (**self).area()
    }
}

impl<S: Shape + ?Sized> Shape for Rc<S> {
    fn area(&self) -> f64 {
        (**self).area()
    }
}

impl<S: Shape + ?Sized> Shape for Arc<S> {
    fn area(&self) -> f64 {
        (**self).area()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrappers_forward_to_inner_shape() {
        let mut mock = MockShape::new();
        mock.expect_area().times(1).return_const(7.5);

        let boxed: Box<dyn Shape> = Box::new(mock);
        let borrowed = &boxed;
        assert_eq!(borrowed.area(), 7.5);
    }

    #[test]
    fn shared_wrappers_forward_to_inner_shape() {
        let mut mock = MockShape::new();
        mock.expect_area().times(2).return_const(3.0);

        let shared: Arc<dyn Shape> = Arc::new(mock);
        let clone = Arc::clone(&shared);
        assert_eq!(shared.area() + clone.area(), 6.0);
    }
}
